use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("Invalid token: {0:?}")]
    InvalidToken(String),

    /// `line_number` is 1-based; 0 means the line was scanned on its own.
    #[error("No calibration token on line {line_number}: {line:?}")]
    NoTokenFound { line_number: usize, line: String },

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CalibrationError {
    /// Attaches the input line number to a `NoTokenFound` error.
    pub fn at_line(self, line_number: usize) -> Self {
        match self {
            CalibrationError::NoTokenFound { line, .. } => {
                CalibrationError::NoTokenFound { line_number, line }
            }
            other => other,
        }
    }
}
