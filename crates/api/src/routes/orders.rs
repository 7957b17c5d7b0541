//! Order endpoints.
//!
//! Creating an order is the only authenticated operation:
//!
//! 1. pull the bearer credential from `Authorization`
//! 2. resolve it to a principal through the [`TokenVerifier`]
//! 3. parse the body and validate every line item
//! 4. price the items, build the order, and persist it
//!
//! Each step can end the request. A missing credential never reaches the
//! verifier, and nothing is written unless all items are valid.

use auth::{Credential, Principal, TokenVerifier};
use axum::http::header::AUTHORIZATION;
use domain::OrderService;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// POST /orders
#[tracing::instrument(skip_all)]
pub async fn create(
    orders: &OrderService,
    verifier: &dyn TokenVerifier,
    request: &ApiRequest,
) -> Result<ApiResponse, ApiError> {
    let principal = authenticate(verifier, request).await?;
    let body = request.json_body()?;
    let order = orders.place_order(&principal.username, &body).await?;
    ApiResponse::created(&order)
}

/// GET /orders
#[tracing::instrument(skip_all)]
pub async fn list(orders: &OrderService) -> Result<ApiResponse, ApiError> {
    let all = orders.list_orders().await?;
    ApiResponse::ok(&all)
}

async fn authenticate(
    verifier: &dyn TokenVerifier,
    request: &ApiRequest,
) -> Result<Principal, ApiError> {
    let result = match Credential::from_authorization_header(request.header(AUTHORIZATION.as_str()))
    {
        Ok(credential) => verifier.resolve_principal(&credential).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(principal) => {
            tracing::debug!(user = %principal, "caller authenticated");
            Ok(principal)
        }
        Err(err) => {
            tracing::warn!(error = %err, "order creation rejected");
            metrics::counter!("auth_rejections_total").increment(1);
            Err(err.into())
        }
    }
}
