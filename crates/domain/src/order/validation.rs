//! Order submission validation.

use serde_json::Value;

use super::{LineItemInput, OrderError};

/// Validates the `items` of an order submission in one pass.
///
/// Returns every item normalized, in submission order, or the first
/// failure. Nothing is accepted partially.
pub fn validate_items(body: &Value) -> Result<Vec<LineItemInput>, OrderError> {
    let items = body
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(OrderError::ItemsRequired)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| LineItemInput::from_value(index, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_required() {
        for body in [
            json!({}),
            json!({"items": []}),
            json!({"items": "p1"}),
            json!({"items": {"id": "p1"}}),
            json!(null),
        ] {
            assert_eq!(
                validate_items(&body),
                Err(OrderError::ItemsRequired),
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_preserves_submission_order() {
        let items = validate_items(&json!({
            "items": [
                {"id": "b", "quantity": 1},
                {"id": "a", "quantity": 2},
                {"id": "c", "quantity": 3}
            ]
        }))
        .unwrap();

        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_first_invalid_item_fails_everything() {
        let result = validate_items(&json!({
            "items": [
                {"id": "ok", "quantity": 1},
                {"id": "bad", "quantity": -2},
                {"quantity": 1}
            ]
        }));
        assert_eq!(result, Err(OrderError::InvalidItem { index: 1 }));
    }
}
