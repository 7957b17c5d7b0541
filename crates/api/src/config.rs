//! Application configuration loaded from environment variables.

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default `0.0.0.0`)
/// - `PORT`: listen port (default `3000`)
/// - `RUST_LOG`: tracing filter directive (default `info`)
/// - `DATABASE_URL`: PostgreSQL URL; unset means an in-memory store
/// - `JWT_SECRET`: HS256 secret for bearer tokens; unset rejects every token
/// - `PRODUCTS_COLLECTION` / `ORDERS_COLLECTION`: collection names
///   (default `products` / `orders`)
/// - `MAX_BODY_BYTES`: request body limit (default 1 MiB)
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: Option<String>,
    pub jwt_secret: Option<String>,
    pub products_collection: String,
    pub orders_collection: String,
    pub max_body_bytes: usize,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset; unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
            database_url: get("DATABASE_URL"),
            jwt_secret: get("JWT_SECRET"),
            products_collection: get("PRODUCTS_COLLECTION")
                .unwrap_or(defaults.products_collection),
            orders_collection: get("ORDERS_COLLECTION").unwrap_or(defaults.orders_collection),
            max_body_bytes: get("MAX_BODY_BYTES")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            database_url: None,
            jwt_secret: None,
            products_collection: "products".to_string(),
            orders_collection: "orders".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("database_url", &self.database_url.as_ref().map(|_| "***"))
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "***"))
            .field("products_collection", &self.products_collection)
            .field("orders_collection", &self.orders_collection)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.products_collection, "products");
        assert_eq!(config.orders_collection, "orders");
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert!(config.database_url.is_none());
        assert!(config.jwt_secret.is_none());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = from_pairs(&[
            ("PORT", "8080"),
            ("JWT_SECRET", "s3cret"),
            ("ORDERS_COLLECTION", "orders-staging"),
            ("MAX_BODY_BYTES", "2048"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.jwt_secret.as_deref(), Some("s3cret"));
        assert_eq!(config.orders_collection, "orders-staging");
        assert_eq!(config.products_collection, "products");
        assert_eq!(config.max_body_bytes, 2048);
    }

    #[test]
    fn test_bad_and_empty_values_fall_back() {
        let config = from_pairs(&[("PORT", "not-a-port"), ("HOST", ""), ("DATABASE_URL", "")]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = from_pairs(&[("JWT_SECRET", "s3cret")]);
        assert!(!format!("{config:?}").contains("s3cret"));
    }
}
