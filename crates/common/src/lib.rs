//! Value types shared by every crate in the workspace.

pub mod price;
pub mod types;

pub use price::Price;
pub use types::RecordId;
