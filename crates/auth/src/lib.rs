//! Caller authentication for the order workflow.
//!
//! A [`Credential`] is pulled out of an `Authorization: Bearer <token>`
//! header and handed to a [`TokenVerifier`], which resolves it to a
//! [`Principal`] or rejects it. Credentials carry no trust of their own.

pub mod credential;
pub mod error;
pub mod jwt;
pub mod memory;
pub mod verifier;

pub use credential::{BEARER_SCHEME, Credential};
pub use error::AuthError;
pub use jwt::{Claims, JwtTokenVerifier};
pub use memory::InMemoryTokenVerifier;
pub use verifier::{Principal, TokenVerifier};
