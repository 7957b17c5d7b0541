//! Lenient coercions from untyped JSON fields.
//!
//! Callers send loosely typed payloads: identifiers may arrive as numbers,
//! quantities and prices as numeric strings. These helpers accept those
//! shapes and nothing else, so every rejection is decided in one place.

use common::Price;
use serde_json::Value;

/// Returns true when a field counts as absent: missing, `null`, `false`,
/// an empty string, or the number zero.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// Coerces a non-blank string or non-zero number to text.
pub fn to_text(value: Option<&Value>) -> Option<String> {
    if is_blank(value) {
        return None;
    }
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerces a number or numeric string to `f64`.
pub fn to_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Coerces a value to a strictly positive whole quantity.
pub fn to_positive_quantity(value: Option<&Value>) -> Option<u32> {
    let number = to_number(value?)?;
    if number <= 0.0 || number.fract() != 0.0 || number > f64::from(u32::MAX) {
        return None;
    }
    Some(number as u32)
}

/// Coerces a value to a price.
pub fn to_price(value: &Value) -> Option<Price> {
    to_number(value).and_then(Price::from_major)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(null))));
        assert!(is_blank(Some(&json!(false))));
        assert!(is_blank(Some(&json!(""))));
        assert!(is_blank(Some(&json!(0))));
        assert!(is_blank(Some(&json!(0.0))));
        assert!(!is_blank(Some(&json!("x"))));
        assert!(!is_blank(Some(&json!(3))));
        assert!(!is_blank(Some(&json!([]))));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(Some(&json!("p1"))), Some("p1".to_string()));
        assert_eq!(to_text(Some(&json!(42))), Some("42".to_string()));
        assert_eq!(to_text(Some(&json!(""))), None);
        assert_eq!(to_text(Some(&json!(0))), None);
        assert_eq!(to_text(Some(&json!({"a": 1}))), None);
        assert_eq!(to_text(Some(&json!(true))), None);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&json!(2)), Some(2.0));
        assert_eq!(to_number(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(to_number(&json!("abc")), None);
        assert_eq!(to_number(&json!("NaN")), None);
        assert_eq!(to_number(&json!("inf")), None);
        assert_eq!(to_number(&json!(true)), None);
    }

    #[test]
    fn test_to_positive_quantity() {
        assert_eq!(to_positive_quantity(Some(&json!(3))), Some(3));
        assert_eq!(to_positive_quantity(Some(&json!("4"))), Some(4));
        assert_eq!(to_positive_quantity(Some(&json!(2.0))), Some(2));
        assert_eq!(to_positive_quantity(Some(&json!(0))), None);
        assert_eq!(to_positive_quantity(Some(&json!(-1))), None);
        assert_eq!(to_positive_quantity(Some(&json!(1.5))), None);
        assert_eq!(to_positive_quantity(Some(&json!(1e12))), None);
        assert_eq!(to_positive_quantity(None), None);
    }

    #[test]
    fn test_to_price() {
        assert_eq!(to_price(&json!(5)).map(|p| p.cents()), Some(500));
        assert_eq!(to_price(&json!("19.99")).map(|p| p.cents()), Some(1999));
        assert_eq!(to_price(&json!("free")), None);
    }
}
