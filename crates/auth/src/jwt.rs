//! HS256 JWT verification.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{AuthError, Credential, Principal, TokenVerifier};

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(
        rename = "cognito:username",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cognito_username: Option<String>,
}

impl Claims {
    /// The username to attribute work to: `username`, then
    /// `cognito:username`, then the subject.
    pub fn principal_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.cognito_username.as_deref())
            .unwrap_or(&self.sub)
    }
}

/// Verifies HS256-signed JWTs against a shared secret.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Signs a token for `subject` that expires after `ttl`.
    pub fn issue_token(
        &self,
        subject: &str,
        username: Option<&str>,
        ttl: Duration,
    ) -> Result<String, AuthError> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
            username: username.map(str::to_string),
            cognito_username: None,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Decodes and validates a raw token.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn resolve_principal(&self, credential: &Credential) -> Result<Principal, AuthError> {
        let claims = self.verify(credential.as_str())?;
        tracing::debug!(sub = %claims.sub, "token verified");
        Ok(Principal::new(claims.principal_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(token: &str) -> Credential {
        Credential::from_authorization_header(Some(&format!("Bearer {token}"))).unwrap()
    }

    #[tokio::test]
    async fn test_issued_token_resolves_to_username() {
        let verifier = JwtTokenVerifier::new(b"test-secret");
        let token = verifier
            .issue_token("user-123", Some("alice"), Duration::minutes(5))
            .unwrap();

        let principal = verifier.resolve_principal(&credential(&token)).await.unwrap();
        assert_eq!(principal.username, "alice");
    }

    #[tokio::test]
    async fn test_subject_used_when_no_username_claim() {
        let verifier = JwtTokenVerifier::new(b"test-secret");
        let token = verifier
            .issue_token("user-123", None, Duration::minutes(5))
            .unwrap();

        let principal = verifier.resolve_principal(&credential(&token)).await.unwrap();
        assert_eq!(principal.username, "user-123");
    }

    #[test]
    fn test_cognito_username_claim() {
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "sub": "abc",
            "exp": 0,
            "cognito:username": "bob"
        }))
        .unwrap();
        assert_eq!(claims.principal_name(), "bob");
    }

    #[test]
    fn test_expired_token() {
        let verifier = JwtTokenVerifier::new(b"test-secret");
        let token = verifier
            .issue_token("user-123", None, Duration::minutes(-10))
            .unwrap();
        assert_eq!(verifier.verify(&token).unwrap_err(), AuthError::TokenExpired);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = JwtTokenVerifier::new(b"secret-a");
        let verifier = JwtTokenVerifier::new(b"secret-b");
        let token = issuer
            .issue_token("user-123", None, Duration::minutes(5))
            .unwrap();
        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let verifier = JwtTokenVerifier::new(b"test-secret");
        assert!(matches!(
            verifier.verify("not-a-jwt"),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
