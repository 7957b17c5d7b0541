use chrono::{DateTime, Utc};
use common::{Price, RecordId};
use serde::{Deserialize, Serialize};

use super::{LineItem, LineItemInput, OrderError, OrderStatus};

/// A persisted order.
///
/// Built once from validated items and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: RecordId,
    /// Username of the principal that placed the order.
    pub user_id: String,
    pub items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Prices the items and assembles a new pending order for `user_id`.
    ///
    /// Fails with [`OrderError::AmountOverflow`] if any line total, or the
    /// order total, does not fit in the price range.
    pub fn place(user_id: impl Into<String>, items: Vec<LineItemInput>) -> Result<Self, OrderError> {
        let items = items
            .into_iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let order = Self {
            id: RecordId::new(),
            user_id: user_id.into(),
            items,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
        };

        order.total_amount().ok_or(OrderError::AmountOverflow)?;
        Ok(order)
    }

    /// Sum of all line totals, or `None` if it overflows.
    pub fn total_amount(&self) -> Option<Price> {
        self.items
            .iter()
            .try_fold(Price::zero(), |total, item| total.checked_add(item.total_price))
    }

    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
