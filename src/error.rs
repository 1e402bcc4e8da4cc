//! Error types for gddoc.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    DuplicateClass(#[from] DuplicateClassError),

    #[error("invalid reflection data: {0}")]
    Reflection(#[from] serde_json::Error),

    #[error("unknown format: {0}. Use markdown or jekyll")]
    UnknownFormat(String),
}

/// Two classes share a name; the class index cannot be built.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("duplicate class name: {name}")]
pub struct DuplicateClassError {
    pub name: String,
}
