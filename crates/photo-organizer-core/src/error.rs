use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the photo-organizer library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding error
    #[error("Image decoding error: {0}")]
    Decode(#[from] image::ImageError),

    /// Input path is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Path has no usable file name component
    #[error("Path has no file name: {0}")]
    NoFileName(PathBuf),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}
