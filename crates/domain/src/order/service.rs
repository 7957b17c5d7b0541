//! Order service providing the persistence side of order creation.

use std::sync::Arc;

use record_store::{Record, RecordStore};
use serde_json::Value;

use super::{Order, validate_items};
use crate::error::DomainError;

/// Places and lists orders in one collection of a record store.
///
/// Authentication happens before this service is reached: callers pass
/// the already verified owner.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn RecordStore>,
    collection: String,
}

impl OrderService {
    pub fn new(store: Arc<dyn RecordStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Returns the collection orders are written to.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Validates the submitted items, builds the order, and persists it.
    ///
    /// The store is only written once every item has passed validation.
    #[tracing::instrument(skip(self, body))]
    pub async fn place_order(&self, user_id: &str, body: &Value) -> Result<Order, DomainError> {
        let items = validate_items(body).inspect_err(|e| {
            tracing::debug!(error = ?e, "order submission rejected");
        })?;
        let order = Order::place(user_id, items)?;

        let record = Record::encode(order.id.to_string(), &order)?;
        self.store.put(&self.collection, record).await?;

        metrics::counter!("orders_created_total").increment(1);
        if let Some(total) = order.total_amount() {
            metrics::histogram!("order_total_amount").record(total.as_major());
            tracing::info!(
                order_id = %order.id,
                items = order.item_count(),
                total = %total,
                "order placed"
            );
        }

        Ok(order)
    }

    /// Returns every stored order.
    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        let records = self.store.scan_all(&self.collection).await?;
        let orders = records
            .iter()
            .map(Record::decode)
            .collect::<Result<Vec<Order>, _>>()?;
        Ok(orders)
    }
}
