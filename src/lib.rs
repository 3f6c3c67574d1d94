#![warn(clippy::pedantic)]

pub mod cli;
pub mod components;
pub mod kubernetes;
pub mod manifest;

/*
 * ============================================================================
 * Error
 * ============================================================================
 */
#[derive(Debug)]
pub enum Error {
    DuplicateFileName(String),
    InvalidFileName(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    MissingObjectKey(&'static str),
    Yaml(serde_yaml::Error),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DuplicateFileName(name) => write!(f, "duplicate file name: {name:?}"),
            Error::InvalidFileName(name) => write!(f, "invalid file name: {name:?}"),
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Json(e) => write!(f, "json error: {e}"),
            Error::MissingObjectKey(key) => write!(f, "missing object key: {key}"),
            Error::Yaml(e) => write!(f, "yaml error: {e}"),
        }
    }
}

/*
 * ============================================================================
 * Result
 * ============================================================================
 */
pub type Result<T, E = Error> = std::result::Result<T, E>;
