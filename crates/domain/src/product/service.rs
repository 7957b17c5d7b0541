//! Product service.

use std::sync::Arc;

use record_store::{Record, RecordStore};
use serde_json::Value;

use super::{NewProduct, Product};
use crate::error::DomainError;

/// Creates and lists products in one collection of a record store.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn RecordStore>,
    collection: String,
}

impl ProductService {
    pub fn new(store: Arc<dyn RecordStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Returns the collection products are written to.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Validates a payload and persists the resulting product.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_product(&self, payload: &Value) -> Result<Product, DomainError> {
        let new = NewProduct::from_payload(payload).inspect_err(|e| {
            tracing::debug!(error = ?e, "product payload rejected");
        })?;
        let product = Product::create(new);

        let record = Record::encode(product.id.to_string(), &product)?;
        self.store.put(&self.collection, record).await?;

        metrics::counter!("products_created_total").increment(1);
        tracing::info!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Returns every stored product.
    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        let records = self.store.scan_all(&self.collection).await?;
        let products = records
            .iter()
            .map(Record::decode)
            .collect::<Result<Vec<Product>, _>>()?;
        Ok(products)
    }
}
