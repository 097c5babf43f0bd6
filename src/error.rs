//! Error types
//!
//! Core lookups only fail on bad input: a codepoint outside the Unicode
//! range or a version string with no numeric component. Everything else
//! (loading tables, strict control-code checks, configuration) has its own
//! error type so callers can tell input mistakes from environment failures.

use std::path::PathBuf;

use thiserror::Error;

/// One past the largest Unicode scalar value.
pub const CODEPOINT_LIMIT: u32 = 0x11_0000;

/// Errors from the width engine itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidthError {
    #[error("Invalid codepoint U+{codepoint:X}{}", index_suffix(.index))]
    InvalidCodepoint {
        codepoint: u32,
        /// Position in the input sequence, for sequence operations
        index: Option<usize>,
    },

    #[error("Invalid Unicode version: {0:?}")]
    InvalidVersion(String),
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}

/// Errors from loading or validating a dataset collection
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset collection is empty")]
    Empty,

    #[error("Duplicate dataset for Unicode {0}")]
    DuplicateVersion(String),

    #[error("Unicode {version}: table {category} is not sorted and disjoint at range {index}")]
    UnsortedTable {
        version: String,
        category: &'static str,
        index: usize,
    },

    #[error(transparent)]
    Version(#[from] WidthError),
}

/// Errors from the control-aware text functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("Illegal control character U+{codepoint:04X} at byte {position}")]
    IllegalControl { codepoint: u32, position: usize },

    #[error("Vertical movement U+{codepoint:04X} at byte {position} cannot be measured")]
    VerticalMovement { codepoint: u32, position: usize },

    #[error("Indeterminate escape sequence at byte {position}")]
    IndeterminateSequence { position: usize },

    #[error("Fill character {0:?} must have positive width")]
    FillWidth(String),
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load tables: {0}")]
    Dataset(#[from] DatasetError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_codepoint_message() {
        let err = WidthError::InvalidCodepoint {
            codepoint: 0x110000,
            index: None,
        };
        assert_eq!(err.to_string(), "Invalid codepoint U+110000");

        let err = WidthError::InvalidCodepoint {
            codepoint: 0x110000,
            index: Some(3),
        };
        assert_eq!(err.to_string(), "Invalid codepoint U+110000 at index 3");
    }

    #[test]
    fn test_dataset_error_wraps_version() {
        let err: DatasetError = WidthError::InvalidVersion("abc".into()).into();
        assert!(matches!(err, DatasetError::Version(_)));
        assert_eq!(err.to_string(), "Invalid Unicode version: \"abc\"");
    }
}
