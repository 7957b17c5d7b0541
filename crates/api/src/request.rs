//! Transport-neutral request representation.

use axum::body::Bytes;
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::Value;

use crate::error::ApiError;

/// A request as seen by the dispatcher.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    /// Set when the transport could not deliver the body, e.g. it was too
    /// large. Only handlers that read the body report it.
    pub body_error: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
            body_error: None,
        }
    }

    /// Adds a header. Invalid names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name),
            HeaderValue::try_from(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_json(self, body: &Value) -> Self {
        self.with_body(body.to_string())
    }

    /// Reads an axum request, buffering at most `body_limit` bytes of body.
    ///
    /// A body that cannot be read does not fail the request here: preflight
    /// and routing never look at it.
    pub async fn from_http(request: Request, body_limit: usize) -> Self {
        let (parts, body) = request.into_parts();
        let (body, body_error) = match axum::body::to_bytes(body, body_limit).await {
            Ok(bytes) => ((!bytes.is_empty()).then_some(bytes), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            method: parts.method,
            path: parts.uri.path().to_string(),
            headers: parts.headers,
            body,
            body_error,
        }
    }

    /// Looks up a header value. Header names are case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parses the body as JSON. A missing or blank body is an empty object.
    pub fn json_body(&self) -> Result<Value, ApiError> {
        if let Some(err) = &self.body_error {
            return Err(ApiError::InvalidBody(err.clone()));
        }
        let Some(body) = self.body.as_ref().filter(|b| !b.trim_ascii().is_empty()) else {
            return Ok(Value::Object(Default::default()));
        };
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}
