// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for htmlgen
//!
//! Building and rendering a tree is total except for one invalid request:
//! obfuscating text without escaping it. The remaining variants only come
//! from loading templates and from the CLI.

use thiserror::Error;

/// Result type alias for htmlgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for htmlgen
#[derive(Error, Debug)]
pub enum Error {
    /// A caller asked for a combination the builder cannot honor
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Template JSON could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument() {
        let err = Error::invalid_argument("cannot obfuscate without escaping");

        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid argument: cannot obfuscate without escaping"
        );
    }

    #[test]
    fn test_serialization_error() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();

        assert!(!err.is_invalid_argument());
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
