use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinzError {
    #[error("{0}")]
    Validation(String),

    #[error("Storage not found: {0}")]
    StorageNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Changes could not be saved: {0}")]
    Persistence(String),

    #[error("{0}")]
    InvalidTransition(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BinzError>;
