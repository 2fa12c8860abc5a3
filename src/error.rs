use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors (CLI paths only; the codec itself never touches I/O)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Decode faults
    #[error("Truncated stream: token at offset {offset} needs {needed} more bytes, {remaining} remain")]
    TruncatedStream { offset: usize, needed: usize, remaining: usize },

    #[error("Back-reference distance {distance} exceeds {available} bytes of produced output")]
    InvalidBackReference { distance: usize, available: usize },

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
