//! JSON output helpers.
//!
//! The extractor has no opinion on downstream schemas; these helpers
//! just serialize the records as-is for consumers that want JSON.

use crate::error::Result;
use crate::extract::DirectoryTable;
use crate::model::ContactRecord;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize contact records to JSON.
pub fn contacts_to_json(records: &[ContactRecord], format: JsonFormat) -> Result<String> {
    match format {
        JsonFormat::Pretty => Ok(serde_json::to_string_pretty(records)?),
        JsonFormat::Compact => Ok(serde_json::to_string(records)?),
    }
}

/// Serialize a document scan result to JSON.
pub fn scan_to_json(tables: &[DirectoryTable], format: JsonFormat) -> Result<String> {
    match format {
        JsonFormat::Pretty => Ok(serde_json::to_string_pretty(tables)?),
        JsonFormat::Compact => Ok(serde_json::to_string(tables)?),
    }
}
