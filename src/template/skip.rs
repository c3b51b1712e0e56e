use crate::config::ProjectConfig;

/// Leaves a template out of the project when its feature is disabled.
///
/// A rule applies when the lower-cased template file name contains `needle`.
pub struct SkipRule {
    pub needle: &'static str,
    pub feature: &'static str,
    enabled: fn(&ProjectConfig) -> bool,
}

impl SkipRule {
    pub fn applies_to(&self, file_name: &str) -> bool {
        file_name.to_lowercase().contains(self.needle)
    }

    pub fn is_enabled(&self, config: &ProjectConfig) -> bool {
        (self.enabled)(config)
    }
}

pub const SKIP_RULES: &[SkipRule] = &[
    SkipRule {
        needle: "pre-commit",
        feature: "configure_pre_commit",
        enabled: |config| config.configure_pre_commit,
    },
    SkipRule {
        needle: "docker",
        feature: "include_docker",
        enabled: |config| config.include_docker,
    },
];

/// Returns the first rule that excludes `file_name` under `config`, if any.
pub fn find_skip_rule(file_name: &str, config: &ProjectConfig) -> Option<&'static SkipRule> {
    SKIP_RULES
        .iter()
        .find(|rule| rule.applies_to(file_name) && !rule.is_enabled(config))
}
