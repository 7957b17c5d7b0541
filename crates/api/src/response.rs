//! Structured results returned by the dispatcher.

use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Status, headers and JSON body of a handled request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl ApiResponse {
    /// A response with the base header set.
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            headers: base_headers(),
            body,
        }
    }

    /// Serializes `body` into a response.
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Self, ApiError> {
        Ok(Self::new(status, serde_json::to_value(body)?))
    }

    /// 200 with `body`.
    pub fn ok<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        Self::json(StatusCode::OK, body)
    }

    /// 201 with `body`.
    pub fn created<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        Self::json(StatusCode::CREATED, body)
    }

    /// Answer to a cross-origin preflight probe.
    pub fn preflight() -> Self {
        let mut response = Self::new(StatusCode::OK, Value::Object(Default::default()));
        response.headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        response.headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        response
    }
}

/// Headers carried by every response.
pub fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body.to_string()));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_headers_on_every_response() {
        let response = ApiResponse::new(StatusCode::NOT_FOUND, serde_json::json!({}));
        assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(response.headers[CONTENT_TYPE], "application/json");
        assert!(!response.headers.contains_key(ACCESS_CONTROL_ALLOW_METHODS));
    }

    #[test]
    fn test_preflight_adds_allow_lists() {
        let response = ApiResponse::preflight();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, serde_json::json!({}));
        assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_METHODS], ALLOWED_METHODS);
        assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_HEADERS], ALLOWED_HEADERS);
        assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
