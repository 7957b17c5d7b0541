//! Domain layer for the commerce gateway.
//!
//! This crate turns untyped request payloads into typed records:
//! - `coerce` holds the lenient field coercions shared by every payload
//! - `product` validates and builds product records
//! - `order` validates line items, prices them, and builds order records
//!
//! `ProductService` and `OrderService` persist those records through a
//! [`record_store::RecordStore`].

pub mod coerce;
pub mod error;
pub mod order;
pub mod product;

pub use error::DomainError;
pub use order::{
    LineItem, LineItemInput, Order, OrderError, OrderService, OrderStatus, validate_items,
};
pub use product::{NewProduct, Product, ProductError, ProductService};
