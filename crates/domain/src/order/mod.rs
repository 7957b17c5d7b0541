//! Order records, line item validation, and the service that persists orders.

mod line_item;
mod record;
mod service;
mod status;
mod validation;

pub use line_item::{LineItem, LineItemInput};
pub use record::Order;
pub use service::OrderService;
pub use status::OrderStatus;
pub use validation::validate_items;

use thiserror::Error;

/// Errors that can occur while validating an order submission.
///
/// The display strings are returned to callers verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// `items` was missing, not an array, or empty.
    #[error("Items array is required")]
    ItemsRequired,

    /// The item at `index` lacks an identifier or a positive quantity.
    #[error("Each item must have productId and positive quantity")]
    InvalidItem { index: usize },

    /// The item at `index` carries a price that is not a number.
    #[error("Item price must be a number")]
    InvalidItemPrice { index: usize },

    /// A line or order total does not fit in the price range.
    #[error("Order total is out of range")]
    AmountOverflow,
}
