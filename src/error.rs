//! Error types for configuration and high-score storage

use std::num::ParseIntError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// IO error from the filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored high score is not a number
    #[error("Invalid high score: {0}")]
    Parse(#[from] ParseIntError),

    /// Malformed cover bitmap
    #[error("Invalid cover shape: {0}")]
    CoverShape(String),
}

pub type Result<T> = std::result::Result<T, Error>;
