//! YAML output.

use serde::Serialize;

use crate::error::Result;

/// Serialize a result set as YAML.
pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}
