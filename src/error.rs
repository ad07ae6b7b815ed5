use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreitagError {
    #[error("freitag error: {0}")]
    Generic(String),
    #[error(transparent)]
    Expected(#[from] FreitagExpectedError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that are a normal outcome of running against user data: a filename
/// the format does not match, a rename target that is already taken. These are
/// reported per item and the batch moves on.
#[derive(Error, Debug)]
pub enum FreitagExpectedError {
    #[error("{0}")]
    Generic(String),
    #[error("format {format:?} does not match {candidate:?}")]
    NoMatch { format: String, candidate: String },
    #[error("destination already exists: {path}")]
    DestinationExists { path: PathBuf },
    #[error("invalid format {format:?}: {message}")]
    InvalidFormat { format: String, message: String },
}

pub type Result<T> = std::result::Result<T, FreitagError>;
