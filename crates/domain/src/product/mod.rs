//! Product records and the service that persists them.

mod record;
mod service;

pub use record::{NewProduct, Product};
pub use service::ProductService;

use thiserror::Error;

/// Errors that can occur while validating a product payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// One of name, price, or description was absent or blank.
    #[error("Name, price, and description are required")]
    MissingFields,

    /// The price was present but not a number.
    #[error("Price must be a number")]
    InvalidPrice,
}
