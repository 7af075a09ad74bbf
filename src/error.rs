use thiserror::Error;

#[derive(Error, Debug)]
pub enum SudokuError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Filling length mismatch: expected {expected} digits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SudokuError>;
