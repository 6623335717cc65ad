//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio core operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Catalog records violate an invariant (duplicate id, empty title, ...)
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Embedded catalog data could not be parsed
    #[error("Catalog data error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Error during preference storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
