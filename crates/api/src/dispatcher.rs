//! Request dispatcher.
//!
//! The dispatcher is the single entry point for every request. It answers
//! preflight probes itself, routes everything else through [`Route`], and
//! is the one place where handler failures become responses: no error or
//! panic escapes [`Dispatcher::dispatch`].

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use auth::TokenVerifier;
use axum::http::Method;
use domain::{OrderService, ProductService};
use futures_util::FutureExt;
use record_store::RecordStore;

use crate::config::Config;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use crate::routes::{self, Route};

/// Routes requests to product and order handlers.
///
/// Holds no per-request state; collaborators are injected at construction.
#[derive(Clone)]
pub struct Dispatcher {
    products: ProductService,
    orders: OrderService,
    verifier: Arc<dyn TokenVerifier>,
}

impl Dispatcher {
    pub fn new(
        products: ProductService,
        orders: OrderService,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            products,
            orders,
            verifier,
        }
    }

    /// Builds a dispatcher over one store, using the configured collections.
    pub fn from_config(
        config: &Config,
        store: Arc<dyn RecordStore>,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self::new(
            ProductService::new(store.clone(), config.products_collection.clone()),
            OrderService::new(store, config.orders_collection.clone()),
            verifier,
        )
    }

    /// Handles one request.
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn dispatch(&self, request: ApiRequest) -> ApiResponse {
        if request.method == Method::OPTIONS {
            return ApiResponse::preflight();
        }

        let Some(route) = Route::resolve(&request.method, &request.path) else {
            tracing::debug!("no route matched");
            return record_request("unmatched", ApiError::NotFound.into());
        };

        let outcome = AssertUnwindSafe(self.handle(route, &request))
            .catch_unwind()
            .await;

        let response = match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => err.into(),
            Err(panic) => ApiError::Internal(panic_message(panic.as_ref())).into(),
        };

        record_request(route.name(), response)
    }

    async fn handle(&self, route: Route, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        match route {
            Route::CreateProduct => routes::products::create(&self.products, request).await,
            Route::ListProducts => routes::products::list(&self.products).await,
            Route::CreateOrder => {
                routes::orders::create(&self.orders, self.verifier.as_ref(), request).await
            }
            Route::ListOrders => routes::orders::list(&self.orders).await,
        }
    }
}

fn record_request(route: &'static str, response: ApiResponse) -> ApiResponse {
    metrics::counter!(
        "http_requests_total",
        "route" => route,
        "status" => response.status.as_u16().to_string()
    )
    .increment(1);
    response
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}
