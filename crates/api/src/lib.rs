//! HTTP entry point for the commerce gateway.
//!
//! The [`Dispatcher`] does all request handling against injected store and
//! verifier collaborators. [`create_app`] mounts it behind axum, next to the
//! `/health` and `/metrics` operational endpoints.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod request;
pub mod response;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::{FromRef, Request, State};
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use dispatcher::Dispatcher;
pub use error::ApiError;
pub use request::ApiRequest;
pub use response::ApiResponse;

/// Shared state for the HTTP adapter.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub metrics_handle: PrometheusHandle,
    pub body_limit: usize,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, metrics_handle: PrometheusHandle) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            metrics_handle,
            body_limit: Config::default().max_body_bytes,
        }
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}

impl FromRef<AppState> for PrometheusHandle {
    fn from_ref(state: &AppState) -> Self {
        state.metrics_handle.clone()
    }
}

/// Creates the Axum application router.
///
/// Every request that is not a `GET` on an operational endpoint goes to the
/// dispatcher, so preflight and not-found handling stay in one place.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::check).fallback(forward))
        .route("/metrics", get(routes::metrics::get).fallback(forward))
        .fallback(forward)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn forward(State(state): State<AppState>, request: Request) -> ApiResponse {
    let request = ApiRequest::from_http(request, state.body_limit).await;
    state.dispatcher.dispatch(request).await
}
