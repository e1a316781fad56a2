//! Error types for the declaration tree

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyntaxError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Invalid type reference '{input}': {reason}")]
    InvalidType { input: String, reason: String },

    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),
}

impl SyntaxError {
    pub(crate) fn invalid_type(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidType {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
