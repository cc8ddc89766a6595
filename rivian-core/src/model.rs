//! Entity descriptor model
//!
//! Descriptors are plain static data: each one maps a vehicle state field
//! (or a set of fields) to the presentation metadata and the value
//! transform the host platform needs. Tables are built with `const`
//! constructors so they can live in `static` items.

use crate::error::ParseTrimError;
use crate::normalize::Normalizer;
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle model variant selecting which descriptor tables apply
///
/// `R1` holds the descriptors shared by every vehicle; `R1S` and `R1T`
/// only add to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Trim {
    R1,
    R1S,
    R1T,
}

impl Trim {
    pub const ALL: [Trim; 3] = [Trim::R1, Trim::R1S, Trim::R1T];

    pub const fn as_str(self) -> &'static str {
        match self {
            Trim::R1 => "R1",
            Trim::R1S => "R1S",
            Trim::R1T => "R1T",
        }
    }

    /// Whether this is the generic table every trim inherits
    pub const fn is_generic(self) -> bool {
        matches!(self, Trim::R1)
    }
}

impl fmt::Display for Trim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trim {
    type Err = ParseTrimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R1" => Ok(Trim::R1),
            "R1S" => Ok(Trim::R1S),
            "R1T" => Ok(Trim::R1T),
            _ => Err(ParseTrimError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Trim {
    type Error = ParseTrimError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// === Presentation enums ===

/// Sensor device class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Battery,
    Distance,
    Duration,
    EnergyStorage,
    Enum,
    Pressure,
    Speed,
    Temperature,
}

/// Binary sensor device class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryDeviceClass {
    BatteryCharging,
    Door,
    Lock,
    Moving,
    Plug,
    Problem,
    Running,
    Tamper,
    Window,
}

/// How a measurement accumulates over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    Measurement,
    TotalIncreasing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Diagnostic,
}

/// Broad kind of value a sensor reports, derived from its metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Measurement,
    Enum,
    DiagnosticFlag,
    RawPassthrough,
}

// === Sensors ===

fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

/// Descriptor for a numeric, enum or text sensor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorDescription {
    /// Stable identifier, unique within a trim
    pub key: &'static str,

    /// Vehicle state field the value is read from
    pub field: &'static str,

    pub name: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<DeviceClass>,

    /// Unit the vehicle reports the value in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,

    /// Unit the host should convert to for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_unit: Option<Unit>,

    /// Suggested number of decimals when displaying
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_class: Option<StateClass>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<EntityCategory>,

    pub enabled_by_default: bool,

    /// Allowed display labels for enum sensors, in display order
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],

    pub normalizer: Normalizer,

    /// Key this sensor was registered under before a rename
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_key: Option<&'static str>,
}

impl SensorDescription {
    pub const fn new(key: &'static str, field: &'static str, name: &'static str) -> Self {
        Self {
            key,
            field,
            name,
            icon: None,
            device_class: None,
            unit: None,
            suggested_unit: None,
            precision: None,
            state_class: None,
            entity_category: None,
            enabled_by_default: true,
            options: &[],
            normalizer: Normalizer::Identity,
            old_key: None,
        }
    }

    pub const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub const fn device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = Some(device_class);
        self
    }

    pub const fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub const fn suggested_unit(mut self, unit: Unit) -> Self {
        self.suggested_unit = Some(unit);
        self
    }

    pub const fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub const fn state_class(mut self, state_class: StateClass) -> Self {
        self.state_class = Some(state_class);
        self
    }

    pub const fn measurement(self) -> Self {
        self.state_class(StateClass::Measurement)
    }

    pub const fn diagnostic(mut self) -> Self {
        self.entity_category = Some(EntityCategory::Diagnostic);
        self
    }

    pub const fn disabled_by_default(mut self) -> Self {
        self.enabled_by_default = false;
        self
    }

    /// Mark as an enum sensor with the given display labels
    pub const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.device_class = Some(DeviceClass::Enum);
        self.options = options;
        self
    }

    pub const fn normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub const fn old_key(mut self, old_key: &'static str) -> Self {
        self.old_key = Some(old_key);
        self
    }

    pub fn value_kind(&self) -> ValueKind {
        if self.device_class == Some(DeviceClass::Enum) {
            ValueKind::Enum
        } else if self.state_class.is_some() || self.unit.is_some() {
            ValueKind::Measurement
        } else if self.entity_category == Some(EntityCategory::Diagnostic) {
            ValueKind::DiagnosticFlag
        } else {
            ValueKind::RawPassthrough
        }
    }
}

// === Binary sensors ===

/// One field or a set of fields feeding a binary sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldRef {
    Single(&'static str),
    /// On when any member field matches
    Set(&'static [&'static str]),
}

impl FieldRef {
    pub fn fields(&self) -> &[&'static str] {
        match self {
            FieldRef::Single(field) => std::slice::from_ref(field),
            FieldRef::Set(fields) => fields,
        }
    }
}

/// Raw value(s) that count as "on"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OnValue {
    Exact(&'static str),
    AnyOf(&'static [&'static str]),
}

impl OnValue {
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            OnValue::Exact(on) => *on == raw,
            OnValue::AnyOf(on) => on.contains(&raw),
        }
    }
}

/// Descriptor for a boolean-derived sensor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinarySensorDescription {
    pub key: &'static str,

    pub field: FieldRef,

    pub name: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<BinaryDeviceClass>,

    pub on_value: OnValue,

    /// Report the opposite of the matched predicate
    pub negate: bool,
}

impl BinarySensorDescription {
    pub const fn new(
        key: &'static str,
        field: FieldRef,
        name: &'static str,
        on_value: OnValue,
    ) -> Self {
        Self {
            key,
            field,
            name,
            icon: None,
            device_class: None,
            on_value,
            negate: false,
        }
    }

    pub const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub const fn device_class(mut self, device_class: BinaryDeviceClass) -> Self {
        self.device_class = Some(device_class);
        self
    }

    pub const fn negate(mut self) -> Self {
        self.negate = true;
        self
    }
}
