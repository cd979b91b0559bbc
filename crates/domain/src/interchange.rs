//! Interchange file codec.
//!
//! A saved sheet is a single UTF-8 JSON object keyed by internal field name,
//! with string or `null` values. There is no version field: importing
//! back-fills missing keys and ignores unknown ones.

use serde_json::Value;

use crate::character_sheet::SheetRecord;
use crate::error::ImportError;

/// File name used for downloads and for the on-disk export.
pub const SHEET_FILE_NAME: &str = "player_sheet.json";

/// Serialize a record to canonical interchange bytes.
pub fn encode(record: &SheetRecord) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(record)
}

/// Parse uploaded bytes into a normalized record.
///
/// # Errors
///
/// - [`ImportError::Syntax`] if the bytes are not JSON
/// - [`ImportError::NotAnObject`] if the JSON is not an object
pub fn decode(bytes: &[u8]) -> Result<SheetRecord, ImportError> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(map) => Ok(SheetRecord::normalize(&map)),
        other => Err(ImportError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
