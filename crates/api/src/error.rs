//! API error types with HTTP response mapping.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;
use serde_json::json;
use thiserror::Error;

use crate::response::ApiResponse;

/// Every way a request can fail, grouped by who is at fault.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No operation matches the method and path.
    #[error("Not found")]
    NotFound,

    /// The body could not be read or is not valid JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The payload parsed but failed validation.
    #[error("{0}")]
    Validation(String),

    /// No bearer credential was presented.
    #[error("Authorization token required")]
    MissingCredential,

    /// A credential was presented and rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Anything else: collaborator failures, encoding failures, panics.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingCredential | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            ApiError::NotFound => json!({ "error": "Not found" }),
            ApiError::InvalidBody(details) => {
                json!({ "error": "Invalid request body", "details": details })
            }
            ApiError::Validation(message) => json!({ "error": message }),
            ApiError::MissingCredential => json!({ "error": "Authorization token required" }),
            ApiError::Unauthorized(details) => {
                json!({ "error": "Unauthorized", "details": details })
            }
            ApiError::Internal(details) => {
                json!({ "error": "Internal server error", "details": details })
            }
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        if let ApiError::Internal(ref details) = err {
            tracing::error!(error = %details, "internal server error");
        }
        ApiResponse::new(err.status(), err.body())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiResponse::from(self).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Product(e) => ApiError::Validation(e.to_string()),
            DomainError::Order(e) => ApiError::Validation(e.to_string()),
            DomainError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => ApiError::MissingCredential,
            other => ApiError::Unauthorized(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
