use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantriError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed store response: {0}")]
    Format(String),

    #[error("Invalid item: {0}")]
    Validation(String),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PantriError>;
