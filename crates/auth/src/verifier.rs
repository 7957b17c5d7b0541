use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{AuthError, Credential};

/// The authenticated identity behind a verified credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Identifying username; becomes the owner of anything the caller creates.
    pub username: String,
}

impl Principal {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.username)
    }
}

/// Token verification collaborator.
///
/// Implementations must fail closed: anything other than a positive
/// verification is an error.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Resolves a credential to the principal it was issued for.
    async fn resolve_principal(&self, credential: &Credential) -> Result<Principal, AuthError>;
}
