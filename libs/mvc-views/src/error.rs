//! Error types for view discovery

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewError>;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Malformed view path {path}: {reason}")]
    MalformedPath { path: PathBuf, reason: String },

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ViewError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
