//! Parsing error types for HTML extraction
//!
//! Parsing a listing never fails as a whole: malformed review blocks are
//! skipped per-record. These errors cover parser construction only, where
//! a bad selector configuration must be reported.

use thiserror::Error;

pub type ParsingResult<T> = std::result::Result<T, ParsingError>;

#[derive(Error, Debug, Clone)]
pub enum ParsingError {
    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl ParsingError {
    /// Create an invalid selector error
    pub fn invalid_selector(selector: &str, reason: &str) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }
}
