use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating missing parent directories.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Parses a JSON answers document. Anything but a JSON object is rejected.
pub fn parse_string_to_json(buf: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(buf)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::ValidationError(format!(
            "answers must be a JSON object, got `{other}`"
        ))),
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
