//! Rivian vehicle entity tables
//!
//! The concrete sensor and binary sensor descriptors for every trim, the
//! Field Registry they read from, and a demo vehicle source.

pub mod binary_sensors;
pub mod demo;
pub mod fields;
pub mod sensors;

pub use demo::DemoVehicle;

use rivian_core::{Registry, RegistryError, RegistryTables, Trim};

pub const NAME: &str = "Rivian (Unofficial)";

/// All descriptor tables, ready for [`Registry::new`]
pub const TABLES: RegistryTables = RegistryTables {
    sensors: &[
        (Trim::R1, sensors::R1_SENSORS),
        (Trim::R1S, sensors::R1S_SENSORS),
    ],
    binary_sensors: &[
        (Trim::R1, binary_sensors::R1_BINARY_SENSORS),
        (Trim::R1T, binary_sensors::R1T_BINARY_SENSORS),
        (Trim::R1S, binary_sensors::R1S_BINARY_SENSORS),
    ],
    known_fields: &[
        (Trim::R1, fields::R1_FIELDS),
        (Trim::R1S, fields::R1S_FIELDS),
        (Trim::R1T, fields::R1T_FIELDS),
    ],
    auxiliary_fields: fields::AUXILIARY_FIELDS,
    tire_pressure_fields: fields::TIRE_PRESSURE_FIELDS,
};

/// Build the process-wide registry from the bundled tables
pub fn build_registry() -> Result<Registry, RegistryError> {
    Registry::new(&TABLES)
}
