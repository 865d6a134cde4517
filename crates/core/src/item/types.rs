use serde::{Deserialize, Serialize};

use super::ItemError;

/// A persisted record.
///
/// Ids are issued externally and are expected to be unique within a
/// repository. The `Default` value (`id == 0`, empty name) doubles as the
/// "nothing found" answer of the cache lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl Item {
    /// Creates a new item with the given id and name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns true if this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.id == 0 && self.name.is_empty()
    }

    /// Checks that the item can be written to a repository.
    ///
    /// An id of `0` is reserved for the zero value and is rejected.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.id == 0 {
            return Err(ItemError::MissingId);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item() {
        let item = Item::new(7, "seven");

        assert_eq!(item.id, 7);
        assert_eq!(item.name, "seven");
    }

    #[test]
    fn test_default_is_zero_value() {
        let item = Item::default();

        assert!(item.is_zero());
        assert_eq!(item, Item::new(0, ""));
    }

    #[test]
    fn test_named_item_with_zero_id_is_not_zero_value() {
        assert!(!Item::new(0, "ghost").is_zero());
    }

    #[test]
    fn test_validate_rejects_zero_id() {
        assert_eq!(Item::new(0, "no id").validate(), Err(ItemError::MissingId));
    }

    #[test]
    fn test_validate_accepts_negative_id() {
        assert_eq!(Item::new(-3, "negative").validate(), Ok(()));
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(Item::new(1, "a")).unwrap();

        assert_eq!(json, serde_json::json!({ "id": 1, "name": "a" }));
    }

    #[test]
    fn test_deserialize_missing_name_defaults_to_empty() {
        let item: Item = serde_json::from_str(r#"{"id":4}"#).unwrap();

        assert_eq!(item, Item::new(4, ""));
    }

    #[test]
    fn test_deserialize_rejects_string_id() {
        let result = serde_json::from_str::<Item>(r#"{"id":"1","name":"a"}"#);

        assert!(result.is_err());
    }
}
