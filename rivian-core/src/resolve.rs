//! Entity state resolution
//!
//! Turns a [`VehicleState`] snapshot into sensor readings and binary states
//! for one trim. A field that is missing, null, or carries one of the
//! sentinel tokens resolves to `None` (unavailable), never to a default.

use crate::error::ResolveError;
use crate::model::{BinarySensorDescription, SensorDescription, Trim};
use crate::registry::Registry;
use crate::state::{FieldValue, VehicleState};
use crate::units::Unit;
use serde::Serialize;
use tracing::{debug, error};

/// Resolved sensor value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    Number(f64),
    Text(String),
}

impl SensorValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SensorValue::Text(text) => Some(text),
            SensorValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SensorValue::Number(number) => Some(*number),
            SensorValue::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub value: SensorValue,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Sensor,
    BinarySensor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityState {
    Sensor(SensorReading),
    Binary(bool),
}

/// One entity's state, ready to hand to the host platform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEntity {
    pub key: &'static str,
    pub name: &'static str,
    pub platform: Platform,

    /// `None` when the entity is unavailable
    pub state: Option<EntityState>,
}

impl ResolvedEntity {
    pub fn is_available(&self) -> bool {
        self.state.is_some()
    }
}

/// Read a sensor descriptor's value from the snapshot
///
/// Numbers are reported as-is; text goes through the descriptor's
/// normalizer.
pub fn resolve_sensor(description: &SensorDescription, state: &VehicleState) -> Option<SensorReading> {
    let raw = state.valid(description.field)?;

    let value = match raw.value.as_f64() {
        Some(number) => SensorValue::Number(number),
        None => SensorValue::Text(description.normalizer.apply(&raw.as_text()?)),
    };

    Some(SensorReading {
        value,
        unit: description.unit,
        precision: description.precision,
    })
}

/// Evaluate a binary descriptor against the snapshot
///
/// Each field with a usable value is matched independently and the results
/// are OR-ed. With no usable field the result is unavailable, and `negate`
/// only ever flips a definite result.
pub fn resolve_binary(description: &BinarySensorDescription, state: &VehicleState) -> Option<bool> {
    let mut definite = false;
    let mut matched = false;

    for field in description.field.fields() {
        let Some(raw) = state.valid(field).and_then(FieldValue::as_text) else {
            continue;
        };
        definite = true;
        if description.on_value.matches(&raw) {
            matched = true;
            break;
        }
    }

    definite.then_some(matched != description.negate)
}

/// Per-trim view over a [`Registry`]
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r Registry,
    trim: Trim,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r Registry, trim: Trim) -> Self {
        Self { registry, trim }
    }

    pub fn trim(&self) -> Trim {
        self.trim
    }

    /// Resolve one sensor; an unknown key is a caller error
    pub fn sensor(&self, key: &str, state: &VehicleState) -> Result<Option<SensorReading>, ResolveError> {
        let description = self
            .registry
            .sensor(self.trim, key)
            .ok_or_else(|| self.unknown_key("sensor", key))?;
        Ok(resolve_sensor(description, state))
    }

    /// Resolve one binary sensor; an unknown key is a caller error
    pub fn binary_sensor(&self, key: &str, state: &VehicleState) -> Result<Option<bool>, ResolveError> {
        let description = self
            .registry
            .binary_sensor(self.trim, key)
            .ok_or_else(|| self.unknown_key("binary sensor", key))?;
        Ok(resolve_binary(description, state))
    }

    /// Resolve a sensor or binary sensor by key
    pub fn entity(&self, key: &str, state: &VehicleState) -> Result<ResolvedEntity, ResolveError> {
        if let Some(description) = self.registry.sensor(self.trim, key) {
            return Ok(sensor_entity(description, state));
        }
        if let Some(description) = self.registry.binary_sensor(self.trim, key) {
            return Ok(binary_entity(description, state));
        }
        Err(self.unknown_key("entity", key))
    }

    /// Every entity of the trim, sensors first, in table order
    pub fn resolve_all(&self, state: &VehicleState) -> Vec<ResolvedEntity> {
        let entities: Vec<ResolvedEntity> = self
            .registry
            .sensors(self.trim)
            .map(|description| sensor_entity(description, state))
            .chain(
                self.registry
                    .binary_sensors(self.trim)
                    .map(|description| binary_entity(description, state)),
            )
            .collect();

        debug!(
            "Resolved {} entities for {} ({} unavailable)",
            entities.len(),
            self.trim,
            entities.iter().filter(|entity| !entity.is_available()).count()
        );

        entities
    }

    fn unknown_key(&self, platform: &'static str, key: &str) -> ResolveError {
        error!("No {} `{}` registered for trim {}", platform, key, self.trim);
        ResolveError::UnknownKey {
            trim: self.trim,
            platform,
            key: key.to_string(),
        }
    }
}

fn sensor_entity(description: &'static SensorDescription, state: &VehicleState) -> ResolvedEntity {
    ResolvedEntity {
        key: description.key,
        name: description.name,
        platform: Platform::Sensor,
        state: resolve_sensor(description, state).map(EntityState::Sensor),
    }
}

fn binary_entity(description: &'static BinarySensorDescription, state: &VehicleState) -> ResolvedEntity {
    ResolvedEntity {
        key: description.key,
        name: description.name,
        platform: Platform::BinarySensor,
        state: resolve_binary(description, state).map(EntityState::Binary),
    }
}
