//! Route table and operation handlers.

pub mod health;
pub mod metrics;
pub mod orders;
pub mod products;

use axum::http::Method;

/// The operations the dispatcher can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    CreateProduct,
    ListProducts,
    CreateOrder,
    ListOrders,
}

impl Route {
    /// Matches a method and path against the route table.
    ///
    /// A single trailing slash on the path is ignored.
    pub fn resolve(method: &Method, path: &str) -> Option<Route> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        match (method, path) {
            (&Method::POST, "/products") => Some(Route::CreateProduct),
            (&Method::GET, "/products") => Some(Route::ListProducts),
            (&Method::POST, "/orders") => Some(Route::CreateOrder),
            (&Method::GET, "/orders") => Some(Route::ListOrders),
            _ => None,
        }
    }

    /// Stable name used as a metrics label.
    pub fn name(&self) -> &'static str {
        match self {
            Route::CreateProduct => "create_product",
            Route::ListProducts => "list_products",
            Route::CreateOrder => "create_order",
            Route::ListOrders => "list_orders",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(
            Route::resolve(&Method::POST, "/products"),
            Some(Route::CreateProduct)
        );
        assert_eq!(
            Route::resolve(&Method::GET, "/products"),
            Some(Route::ListProducts)
        );
        assert_eq!(
            Route::resolve(&Method::POST, "/orders"),
            Some(Route::CreateOrder)
        );
        assert_eq!(
            Route::resolve(&Method::GET, "/orders"),
            Some(Route::ListOrders)
        );
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(
            Route::resolve(&Method::GET, "/orders/"),
            Some(Route::ListOrders)
        );
        assert_eq!(Route::resolve(&Method::GET, "/"), None);
    }

    #[test]
    fn test_unmatched() {
        assert_eq!(Route::resolve(&Method::DELETE, "/orders"), None);
        assert_eq!(Route::resolve(&Method::PUT, "/products"), None);
        assert_eq!(Route::resolve(&Method::GET, "/customers"), None);
        assert_eq!(Route::resolve(&Method::GET, "/orders/123"), None);
        assert_eq!(Route::resolve(&Method::GET, "/Orders"), None);
    }
}
