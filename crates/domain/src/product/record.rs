use chrono::{DateTime, Utc};
use common::{Price, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ProductError;
use crate::coerce;

/// A validated product creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Validates a raw payload.
    ///
    /// `name`, `price` and `description` must be present and non-blank;
    /// `price` may be a number or a numeric string. A non-blank string
    /// `imageUrl` is kept, anything else is dropped.
    pub fn from_payload(payload: &Value) -> Result<Self, ProductError> {
        let name = coerce::to_text(payload.get("name"));
        let description = coerce::to_text(payload.get("description"));
        let price = payload.get("price").filter(|v| !is_absent(v));

        let (Some(name), Some(description), Some(price)) = (name, description, price) else {
            return Err(ProductError::MissingFields);
        };

        let price = coerce::to_price(price).ok_or(ProductError::InvalidPrice)?;

        let image_url = match payload.get("imageUrl") {
            Some(Value::String(url)) if !url.is_empty() => Some(url.clone()),
            _ => None,
        };

        Ok(Self {
            name,
            price,
            description,
            image_url,
        })
    }
}

// Zero is a real price, so only missing, null and empty strings count as absent.
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// A persisted product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Builds a product with a fresh ID and the current time.
    pub fn create(new: NewProduct) -> Self {
        Self {
            id: RecordId::new(),
            name: new.name,
            price: new.price,
            description: new.description,
            image_url: new.image_url,
            created_at: Utc::now(),
        }
    }
}
