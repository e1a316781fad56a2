//! Error types for controller generation

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot resolve the enclosing namespace of controller '{controller}'")]
    UnresolvedNamespace { controller: String },

    #[error("Invalid declaration model: {0}")]
    InvalidModel(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Syntax error: {0}")]
    Syntax(#[from] r4mvc_syntax::SyntaxError),

    #[error("View discovery error: {0}")]
    Views(#[from] r4mvc_views::ViewError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
