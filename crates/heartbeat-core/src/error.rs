//! Error types for Heartbeat

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Journal store error: {0}")]
    Store(String),

    #[error("Widget export error: {0}")]
    Widget(String),
}

pub type Result<T> = std::result::Result<T, Error>;
