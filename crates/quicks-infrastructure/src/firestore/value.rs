//! Firestore wire value decoding.
//!
//! The REST API encodes every field as a tagged union (`{"stringValue": "x"}`,
//! `{"integerValue": "42"}`, ...). This module models that encoding and
//! collapses it into plain JSON so the domain records can be deserialized
//! with ordinary serde derives.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashMap;

/// A single field value as returned by the Firestore REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FirestoreValue {
    NullValue(Value),
    BooleanValue(bool),
    /// Int64, string-encoded on the wire.
    IntegerValue(String),
    DoubleValue(f64),
    /// RFC 3339 timestamp.
    TimestampValue(String),
    StringValue(String),
    /// Base64-encoded bytes.
    BytesValue(String),
    /// Full resource name of another document.
    ReferenceValue(String),
    GeoPointValue(LatLng),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<FirestoreValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: HashMap<String, FirestoreValue>,
}

impl FirestoreValue {
    /// Collapses the tagged wire representation into a plain JSON value.
    ///
    /// Integer values parse to numbers when they fit an i64 and stay strings
    /// otherwise; timestamps, bytes and references stay strings (the domain
    /// models decide how to interpret them).
    pub fn into_json(self) -> Value {
        match self {
            Self::NullValue(_) => Value::Null,
            Self::BooleanValue(flag) => Value::Bool(flag),
            Self::IntegerValue(raw) => match raw.parse::<i64>() {
                Ok(number) => Value::from(number),
                Err(_) => Value::String(raw),
            },
            Self::DoubleValue(number) => serde_json::Number::from_f64(number)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::TimestampValue(timestamp) => Value::String(timestamp),
            Self::StringValue(text) => Value::String(text),
            Self::BytesValue(encoded) => Value::String(encoded),
            Self::ReferenceValue(path) => Value::String(path),
            Self::GeoPointValue(point) => json!({
                "latitude": point.latitude,
                "longitude": point.longitude,
            }),
            Self::ArrayValue(array) => {
                Value::Array(array.values.into_iter().map(Self::into_json).collect())
            }
            Self::MapValue(map) => Value::Object(
                map.fields
                    .into_iter()
                    .map(|(name, value)| (name, value.into_json()))
                    .collect(),
            ),
        }
    }
}

/// Decodes a document field map into a plain JSON object.
pub fn fields_to_json(fields: HashMap<String, FirestoreValue>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(name, value)| (name, value.into_json()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(wire: Value) -> Value {
        serde_json::from_value::<FirestoreValue>(wire)
            .unwrap()
            .into_json()
    }

    #[test]
    fn scalar_values_decode() {
        assert_eq!(decode(json!({"stringValue": "hello"})), json!("hello"));
        assert_eq!(decode(json!({"booleanValue": true})), json!(true));
        assert_eq!(decode(json!({"doubleValue": 1.5})), json!(1.5));
        assert_eq!(decode(json!({"nullValue": null})), Value::Null);
    }

    #[test]
    fn integers_are_string_encoded_on_the_wire() {
        assert_eq!(decode(json!({"integerValue": "42"})), json!(42));
        assert_eq!(decode(json!({"integerValue": "-7"})), json!(-7));
        // Anything that does not fit an i64 stays a string.
        assert_eq!(
            decode(json!({"integerValue": "99999999999999999999"})),
            json!("99999999999999999999")
        );
    }

    #[test]
    fn timestamps_stay_rfc3339_strings() {
        assert_eq!(
            decode(json!({"timestampValue": "2025-01-02T10:30:00Z"})),
            json!("2025-01-02T10:30:00Z")
        );
    }

    #[test]
    fn nested_arrays_and_maps_decode() {
        let wire = json!({
            "arrayValue": {
                "values": [
                    {"stringValue": "a"},
                    {"mapValue": {"fields": {"n": {"integerValue": "1"}}}}
                ]
            }
        });
        assert_eq!(decode(wire), json!(["a", {"n": 1}]));
    }

    #[test]
    fn geo_points_become_objects() {
        let wire = json!({"geoPointValue": {"latitude": 35.6, "longitude": 139.7}});
        assert_eq!(decode(wire), json!({"latitude": 35.6, "longitude": 139.7}));
    }

    #[test]
    fn empty_array_and_map_values_tolerate_missing_keys() {
        assert_eq!(decode(json!({"arrayValue": {}})), json!([]));
        assert_eq!(decode(json!({"mapValue": {}})), json!({}));
    }

    #[test]
    fn field_maps_decode_wholesale() {
        let mut fields = HashMap::new();
        fields.insert(
            "title".to_string(),
            serde_json::from_value(json!({"stringValue": "x"})).unwrap(),
        );
        fields.insert(
            "unread".to_string(),
            serde_json::from_value(json!({"booleanValue": false})).unwrap(),
        );

        let object = fields_to_json(fields);
        assert_eq!(object["title"], json!("x"));
        assert_eq!(object["unread"], json!(false));
    }
}
