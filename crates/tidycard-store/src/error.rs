use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("invalid sql identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("invalid batch size: {0}")]
    InvalidBatchSize(usize),
    #[error("delete script needs at least one table")]
    NoTables,
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Json,
    NotFound,
    InvalidIdentifier,
    InvalidBatchSize,
    NoTables,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Json(_) => StoreErrorKind::Json,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::InvalidIdentifier(_) => StoreErrorKind::InvalidIdentifier,
            StoreError::InvalidBatchSize(_) => StoreErrorKind::InvalidBatchSize,
            StoreError::NoTables => StoreErrorKind::NoTables,
        }
    }
}
