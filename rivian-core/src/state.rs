//! Raw vehicle state snapshot
//!
//! Mirrors the shape the vehicle state API returns: every field is an
//! object carrying the value and the time the vehicle last reported it.
//!
//! ```json
//! { "batteryLevel": { "timeStamp": "2024-03-01T10:00:00.000Z", "value": 81.2 } }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

/// Values the vehicle uses when a sensor is faulted or not reporting
pub const INVALID_SENSOR_STATES: [&str; 3] = ["fault", "signal_not_available", "undefined"];

/// One reported field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldValue {
    #[serde(
        rename = "timeStamp",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub time_stamp: Option<DateTime<Utc>>,

    /// Missing for composite fields such as `gnssLocation`
    #[serde(default)]
    pub value: Value,
}

impl FieldValue {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            time_stamp: None,
            value: value.into(),
        }
    }

    pub fn at(mut self, time_stamp: DateTime<Utc>) -> Self {
        self.time_stamp = Some(time_stamp);
        self
    }

    /// Text form of a scalar value; `None` for null, arrays and objects
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match &self.value {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Whether the value is usable: a scalar that is not a sentinel token
    pub fn is_valid(&self) -> bool {
        self.as_text()
            .is_some_and(|text| !INVALID_SENSOR_STATES.contains(&text.as_ref()))
    }
}

/// Snapshot of every field returned by one vehicle state fetch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleState {
    fields: HashMap<String, FieldValue>,
}

impl VehicleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field, builder style
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.insert(field, FieldValue::new(value));
        self
    }

    pub fn insert(&mut self, field: &str, value: FieldValue) {
        self.fields.insert(field.to_string(), value);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// The field's value when present and not a sentinel, otherwise `None`
    pub fn valid(&self, field: &str) -> Option<&FieldValue> {
        self.get(field).filter(|value| value.is_valid())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<'a, V: Into<Value>> FromIterator<(&'a str, V)> for VehicleState {
    fn from_iter<I: IntoIterator<Item = (&'a str, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |state, (field, value)| state.with(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_api_shape() {
        let state: VehicleState = serde_json::from_value(json!({
            "batteryLevel": { "timeStamp": "2024-03-01T10:00:00.000Z", "value": 81.2 },
            "gearStatus": { "timeStamp": "2024-03-01T10:00:00.000Z", "value": "park" },
            "gnssLocation": { "latitude": 42.1, "longitude": -71.2, "timeStamp": "2024-03-01T10:00:00.000Z" }
        }))
        .unwrap();

        assert_eq!(state.len(), 3);
        assert_eq!(state.get("batteryLevel").unwrap().value, json!(81.2));
        assert!(state.get("gearStatus").unwrap().time_stamp.is_some());
        assert_eq!(state.get("gnssLocation").unwrap().value, Value::Null);
    }

    #[test]
    fn test_sentinels_are_invalid() {
        for sentinel in INVALID_SENSOR_STATES {
            assert!(!FieldValue::new(sentinel).is_valid(), "{} should be invalid", sentinel);
        }
        assert!(!FieldValue::new(Value::Null).is_valid());
        assert!(FieldValue::new("open").is_valid());
        assert!(FieldValue::new(0).is_valid());
    }

    #[test]
    fn test_as_text_scalars() {
        assert_eq!(FieldValue::new("open").as_text().unwrap(), "open");
        assert_eq!(FieldValue::new(true).as_text().unwrap(), "true");
        assert_eq!(FieldValue::new(42).as_text().unwrap(), "42");
        assert!(FieldValue::new(json!({"a": 1})).as_text().is_none());
    }

    #[test]
    fn test_valid_lookup() {
        let state: VehicleState = [("doorFrontLeftClosed", "closed"), ("wiperFluidState", "fault")]
            .into_iter()
            .collect();

        assert!(state.valid("doorFrontLeftClosed").is_some());
        assert!(state.valid("wiperFluidState").is_none());
        assert!(state.valid("missingField").is_none());
    }
}
