//! Error types for the contab library.
//!
//! Data-quality conditions never surface here: tables that fail the
//! directory gate and rows that fail validation produce empty output,
//! not errors. The only real failure modes are a user-supplied pattern
//! that does not compile and JSON serialization.

use thiserror::Error;

/// Result type alias for contab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when building an extractor or rendering output.
#[derive(Error, Debug)]
pub enum Error {
    /// A pattern supplied through the options failed to compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern string
        pattern: String,
        /// The underlying regex error
        source: regex::Error,
    },

    /// Error serializing records to JSON.
    #[error("JSON rendering error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid pattern `(`"));
    }
}
