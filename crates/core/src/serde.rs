//! Serde helper functions for JSON request bodies.
//!
//! PATCH-style updates need to tell an absent field apart from an explicit
//! `null`. Pair these helpers with `#[serde(default)]` on an
//! `Option<Option<T>>` field: absent stays `None`, `null` becomes
//! `Some(None)`, and a value becomes `Some(Some(v))`.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

/// Deserialize a present field (including `null`) into `Some(..)`.
pub fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize an optional field that must not be `null` when present.
///
/// Pair with `#[serde(default)]`: absent stays `None`, a value becomes
/// `Some(v)`, and an explicit `null` is a deserialization error.
pub fn deserialize_non_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(D::Error::custom("field cannot be null")),
    }
}

/// Serialize a nullable update field.
///
/// Use with `skip_serializing_if = "Option::is_none"` so absent fields are
/// omitted and `Some(None)` is written as `null`.
pub fn serialize_nullable<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct TestStruct {
        #[serde(
            default,
            deserialize_with = "deserialize_nullable",
            serialize_with = "serialize_nullable",
            skip_serializing_if = "Option::is_none"
        )]
        field: Option<Option<String>>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct RequiredWhenPresent {
        #[serde(default, deserialize_with = "deserialize_non_null")]
        field: Option<f64>,
    }

    #[test]
    fn test_non_null_absent_and_value() {
        let absent: RequiredWhenPresent = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.field, None);

        let value: RequiredWhenPresent = serde_json::from_str(r#"{"field": 2.5}"#).unwrap();
        assert_eq!(value.field, Some(2.5));
    }

    #[test]
    fn test_non_null_rejects_null() {
        let err = serde_json::from_str::<RequiredWhenPresent>(r#"{"field": null}"#).unwrap_err();
        assert!(err.to_string().contains("field cannot be null"));
    }

    #[test]
    fn test_absent_field_is_none() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.field, None);
    }

    #[test]
    fn test_null_field_is_some_none() {
        let result: TestStruct = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(result.field, Some(None));
    }

    #[test]
    fn test_value_field_is_some_some() {
        let result: TestStruct = serde_json::from_str(r#"{"field": "hello"}"#).unwrap();
        assert_eq!(result.field, Some(Some("hello".to_string())));
    }

    #[test]
    fn test_serialize_skips_absent_and_writes_null() {
        let absent = TestStruct { field: None };
        assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");

        let cleared = TestStruct { field: Some(None) };
        assert_eq!(
            serde_json::to_string(&cleared).unwrap(),
            r#"{"field":null}"#
        );
    }
}
