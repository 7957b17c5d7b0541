use common::Price;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OrderError;
use crate::coerce;

/// One submitted line item after validation and coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemInput {
    pub id: String,
    pub quantity: u32,
    pub price: Price,
}

impl LineItemInput {
    /// Validates the raw item at position `index` of a submission.
    ///
    /// The identifier is read from `id`, falling back to `productId`, and
    /// must be a non-blank string or non-zero number. Other truthy values
    /// such as `true`, arrays or objects have no text form and are rejected
    /// as an invalid item. `quantity` must be a whole number greater than
    /// zero. A blank `price` means zero.
    pub fn from_value(index: usize, item: &Value) -> Result<Self, OrderError> {
        let id = ["id", "productId"]
            .iter()
            .find_map(|key| item.get(key).filter(|v| !v.is_null()));

        let id = coerce::to_text(id).ok_or(OrderError::InvalidItem { index })?;
        let quantity = coerce::to_positive_quantity(item.get("quantity"))
            .ok_or(OrderError::InvalidItem { index })?;

        let price = match item.get("price") {
            Some(price) if !coerce::is_blank(Some(price)) => {
                coerce::to_price(price).ok_or(OrderError::InvalidItemPrice { index })?
            }
            _ => Price::zero(),
        };

        Ok(Self {
            id,
            quantity,
            price,
        })
    }
}

/// A priced line item as stored on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub quantity: u32,
    pub price: Price,
    pub total_price: Price,
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = OrderError;

    fn try_from(input: LineItemInput) -> Result<Self, Self::Error> {
        let total_price = input
            .price
            .checked_multiply(input.quantity)
            .ok_or(OrderError::AmountOverflow)?;

        Ok(Self {
            id: input.id,
            quantity: input.quantity,
            price: input.price,
            total_price,
        })
    }
}
