//! Product endpoints.

use domain::ProductService;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// POST /products
#[tracing::instrument(skip_all)]
pub async fn create(
    products: &ProductService,
    request: &ApiRequest,
) -> Result<ApiResponse, ApiError> {
    let payload = request.json_body()?;
    let product = products.create_product(&payload).await?;
    ApiResponse::created(&product)
}

/// GET /products
#[tracing::instrument(skip_all)]
pub async fn list(products: &ProductService) -> Result<ApiResponse, ApiError> {
    let all = products.list_products().await?;
    ApiResponse::ok(&all)
}
