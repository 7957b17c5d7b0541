//! Domain error types.

use record_store::StoreError;
use thiserror::Error;

use crate::order::OrderError;
use crate::product::ProductError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the record store.
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    /// A product payload was rejected.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// An order payload was rejected.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}
