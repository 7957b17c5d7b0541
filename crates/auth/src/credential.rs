//! Bearer credential extraction.

use crate::AuthError;

/// The authorization scheme keyword, including its trailing space.
pub const BEARER_SCHEME: &str = "Bearer ";

/// An opaque bearer token taken from an `Authorization` header.
///
/// Always non-empty. Holding a `Credential` proves nothing about the
/// caller until a [`crate::TokenVerifier`] has accepted it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Parses the value of an `Authorization` header.
    ///
    /// The scheme keyword is matched case-insensitively. A missing header
    /// or a different scheme yields [`AuthError::MissingToken`]; the bearer
    /// scheme followed by nothing but whitespace yields
    /// [`AuthError::EmptyToken`].
    pub fn from_authorization_header(value: Option<&str>) -> Result<Self, AuthError> {
        let value = value.ok_or(AuthError::MissingToken)?;

        let scheme = value
            .get(..BEARER_SCHEME.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(BEARER_SCHEME))
            .ok_or(AuthError::MissingToken)?;

        let token = value[scheme.len()..].trim();
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        Ok(Self(token.to_string()))
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are secrets; keep them out of logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_token_after_scheme() {
        let credential = Credential::from_authorization_header(Some("Bearer abc.def")).unwrap();
        assert_eq!(credential.as_str(), "abc.def");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let lower = Credential::from_authorization_header(Some("bearer tok")).unwrap();
        let upper = Credential::from_authorization_header(Some("BEARER tok")).unwrap();
        assert_eq!(lower.as_str(), "tok");
        assert_eq!(upper.as_str(), "tok");
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            Credential::from_authorization_header(None),
            Err(AuthError::MissingToken)
        );
    }

    #[test]
    fn test_other_scheme_is_treated_as_missing() {
        assert_eq!(
            Credential::from_authorization_header(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::MissingToken)
        );
        assert_eq!(
            Credential::from_authorization_header(Some("Bearer")),
            Err(AuthError::MissingToken)
        );
        assert_eq!(
            Credential::from_authorization_header(Some("Bearertoken")),
            Err(AuthError::MissingToken)
        );
    }

    #[test]
    fn test_blank_token() {
        assert_eq!(
            Credential::from_authorization_header(Some("Bearer    ")),
            Err(AuthError::EmptyToken)
        );
    }

    #[test]
    fn test_multibyte_header_does_not_panic() {
        assert_eq!(
            Credential::from_authorization_header(Some("Béarer x")),
            Err(AuthError::MissingToken)
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let credential = Credential::from_authorization_header(Some("Bearer secret")).unwrap();
        assert_eq!(format!("{credential:?}"), "Credential(***)");
    }
}
