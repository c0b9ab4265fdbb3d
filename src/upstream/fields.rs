//! Optional-field accessors over loosely-typed upstream payloads.
//!
//! tranSMART study records are read as `serde_json::Value`; only recognized
//! fields are touched. A missing optional field yields `None` and the caller
//! skips the corresponding statement; a missing required field is a
//! [`MetadataError`].

use serde_json::Value;

use crate::error::MetadataError;

/// A string field, if present and a string.
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// An object field, if present and an object.
pub fn object_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| v.is_object())
}

/// An array field, if present and an array.
pub fn array_field<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value.get(key).and_then(Value::as_array)
}

/// A field that must be present, of any shape.
pub fn required<'a>(value: &'a Value, key: &str) -> Result<&'a Value, MetadataError> {
    value
        .get(key)
        .ok_or_else(|| MetadataError::MissingField(key.to_string()))
}

/// A string field that must be present.
pub fn required_str<'a>(value: &'a Value, key: &str) -> Result<&'a str, MetadataError> {
    str_field(value, key).ok_or_else(|| MetadataError::MissingField(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_accessors_return_none_on_absence() {
        let study = json!({"id": "S1", "ontologyTerm": {}});
        assert_eq!(str_field(&study, "id"), Some("S1"));
        assert_eq!(str_field(&study, "title"), None);
        assert!(object_field(&study, "ontologyTerm").is_some());
        assert!(object_field(&study, "id").is_none());
        assert!(array_field(&study, "studies").is_none());
    }

    #[test]
    fn required_str_reports_the_field_name() {
        let study = json!({});
        let err = required_str(&study, "id").unwrap_err();
        assert!(err.to_string().contains("'id'"));
    }
}
