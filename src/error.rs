use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrisError {
    #[error("Format error: {0}")]
    FormatError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl QrisError {
    /// HTTP status an outer request/response boundary should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            QrisError::FormatError(_) | QrisError::ValidationError(_) => 400,
            QrisError::Unauthorized(_) => 401,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, QrisError>;
