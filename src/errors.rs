//! Custom error types for coordinate conversion and geometry output

use std::fmt;
use std::io;

/// Errors produced by the coordinate tools
#[derive(Debug)]
pub enum CoordError {
    /// I/O error
    IoError(io::Error),
    /// Text input that is not a finite real number
    InvalidNumber(String),
    /// The origin has no defined azimuth or polar angle
    DegeneratePoint,
    /// Unknown conversion mode or coordinate system name
    UnknownMode(String),
    /// Unknown mesh export format
    UnsupportedFormat(String),
    /// Invalid geometry configuration
    ConfigError(String),
    /// Failure while encoding or saving an image
    ImageError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::IoError(e) => write!(f, "I/O error: {}", e),
            CoordError::InvalidNumber(text) => {
                write!(f, "Please enter valid numbers. ({:?} is not a number)", text)
            }
            CoordError::DegeneratePoint => write!(
                f,
                "Degenerate point: the origin has no defined azimuth or polar angle"
            ),
            CoordError::UnknownMode(name) => write!(f, "Unknown mode: {}", name),
            CoordError::UnsupportedFormat(name) => write!(f, "Unsupported mesh format: {}", name),
            CoordError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CoordError::ImageError(msg) => write!(f, "Image error: {}", msg),
            CoordError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CoordError {}

impl From<io::Error> for CoordError {
    fn from(error: io::Error) -> Self {
        CoordError::IoError(error)
    }
}

impl From<image::ImageError> for CoordError {
    fn from(error: image::ImageError) -> Self {
        CoordError::ImageError(error.to_string())
    }
}

/// Result type for coordinate operations
pub type CoordResult<T> = Result<T, CoordError>;

impl From<String> for CoordError {
    fn from(msg: String) -> Self {
        CoordError::GenericError(msg)
    }
}
