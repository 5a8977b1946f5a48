use thiserror::Error;

use crate::signup::SignupError;

#[derive(Debug, Error)]
pub enum FootprintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Signup(#[from] SignupError),
}

pub type Result<T> = std::result::Result<T, FootprintError>;
