//! Error types for Pennywise

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Responder error: {0}")]
    Responder(String),
}

pub type Result<T> = std::result::Result<T, Error>;
