//! Error types for caselabel.
//!
//! The selector itself is total and cannot fail; errors arise only on the
//! string-parsing surface, where an input may be none of the fixed labels.

use thiserror::Error;

/// Errors produced when parsing label strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The input matched none of the fixed label strings.
    #[error("Unknown label: {name:?}")]
    UnknownLabel {
        /// The rejected input.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_message() {
        let err = LabelError::UnknownLabel {
            name: "CASE_9".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown label: \"CASE_9\"");
    }
}
