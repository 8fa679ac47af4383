//! JSON output.

use serde::Serialize;

use crate::error::Result;

/// Serialize a result set as pretty-printed JSON.
pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
