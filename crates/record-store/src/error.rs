use thiserror::Error;

/// Errors that can occur when interacting with a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not serve the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
