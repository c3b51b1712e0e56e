//! Project configuration collected from the user
//!
//! - `types`: the validated `ProjectConfig` record and its normalization helpers

pub mod types;


pub use types::{
    is_valid_email, normalize_choices, normalize_name, parse_port, ProjectConfig,
    ANIMATION_CHOICES, STYLING_CHOICES,
};
