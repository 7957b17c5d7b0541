use thiserror::Error;

/// Errors raised while authenticating a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header, or one without the bearer scheme.
    #[error("Authorization token required")]
    MissingToken,

    /// The bearer scheme was present but the token after it was blank.
    #[error("Bearer token is empty")]
    EmptyToken,

    /// The verifier did not accept the token.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The token was well-formed but past its expiry.
    #[error("Token has expired")]
    TokenExpired,

    /// The verification service could not be reached or failed.
    #[error("Token verification unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Returns true when the caller never presented a bearer credential.
    pub fn is_missing_token(&self) -> bool {
        matches!(self, AuthError::MissingToken)
    }
}
