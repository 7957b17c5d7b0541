use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;

/// A single persisted document.
///
/// `key` identifies the record within its collection; `body` is the
/// document exactly as it will be returned by a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub key: String,
    pub body: serde_json::Value,
}

impl Record {
    /// Creates a record from an already encoded body.
    pub fn new(key: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            key: key.into(),
            body,
        }
    }

    /// Encodes a serializable value into a record.
    pub fn encode<T: Serialize>(key: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self::new(key, serde_json::to_value(value)?))
    }

    /// Decodes the body into a typed value.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

/// Persistence collaborator: a set of named collections of records.
///
/// Implementations apply no business logic. A `put` with a key that
/// already exists in the collection replaces the stored body. Scans
/// return records in the order they were first written.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Writes a record into a collection.
    async fn put(&self, collection: &str, record: Record) -> Result<()>;

    /// Returns every record in a collection.
    async fn scan_all(&self, collection: &str) -> Result<Vec<Record>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Widget {
        name: String,
        count: u32,
    }

    #[test]
    fn test_encode_then_decode_typed_value() {
        let widget = Widget {
            name: "gear".to_string(),
            count: 3,
        };
        let record = Record::encode("w-1", &widget).unwrap();
        assert_eq!(record.key, "w-1");
        assert_eq!(record.body["name"], "gear");

        let decoded: Widget = record.decode().unwrap();
        assert_eq!(decoded, widget);
    }

    #[test]
    fn test_decode_rejects_mismatched_shape() {
        let record = Record::new("w-2", serde_json::json!({"name": 7}));
        let result: Result<Widget> = record.decode();
        assert!(matches!(result, Err(crate::StoreError::Serialization(_))));
    }
}
