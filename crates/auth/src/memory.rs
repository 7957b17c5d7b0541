//! In-memory token verifier.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::{AuthError, Credential, Principal, TokenVerifier};

#[derive(Debug, Default)]
struct InMemoryVerifierState {
    tokens: HashMap<String, String>,
    unavailable: bool,
    calls: usize,
}

/// Verifier backed by a fixed token table, for local runs and tests.
///
/// An empty verifier rejects every token.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenVerifier {
    state: Arc<RwLock<InMemoryVerifierState>>,
}

impl InMemoryTokenVerifier {
    /// Creates a verifier that knows no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token that resolves to `username`.
    pub fn with_token(self, token: impl Into<String>, username: impl Into<String>) -> Self {
        self.insert_token(token, username);
        self
    }

    /// Registers a token that resolves to `username`.
    pub fn insert_token(&self, token: impl Into<String>, username: impl Into<String>) {
        self.write_state()
            .tokens
            .insert(token.into(), username.into());
    }

    /// Simulates an outage of the verification service.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.write_state().unavailable = unavailable;
    }

    /// Returns how many verifications have been attempted.
    pub fn calls(&self) -> usize {
        self.read_state().calls
    }

    // Every update is a single assignment or insert, so a poisoned lock
    // still guards valid state.
    fn read_state(&self) -> RwLockReadGuard<'_, InMemoryVerifierState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, InMemoryVerifierState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TokenVerifier for InMemoryTokenVerifier {
    async fn resolve_principal(&self, credential: &Credential) -> Result<Principal, AuthError> {
        let mut state = self.write_state();
        state.calls += 1;

        if state.unavailable {
            return Err(AuthError::Unavailable(
                "verification service did not respond".to_string(),
            ));
        }

        state
            .tokens
            .get(credential.as_str())
            .map(Principal::new)
            .ok_or_else(|| AuthError::InvalidToken("token not recognized".to_string()))
    }
}
