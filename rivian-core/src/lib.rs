//! Rivian Telemetry Core Library
//!
//! This crate provides the entity descriptor model, value normalization and
//! the registry/resolver pair that turns a raw vehicle state snapshot into
//! sensor and binary sensor states.

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod registry;
pub mod resolve;
pub mod source;
pub mod state;
pub mod units;

pub use config::VehicleConfig;
pub use error::{ParseTrimError, RegistryError, ResolveError};
pub use model::{BinarySensorDescription, FieldRef, OnValue, SensorDescription, Trim};
pub use normalize::Normalizer;
pub use registry::{Registry, RegistryTables};
pub use resolve::{EntityState, Platform, ResolvedEntity, Resolver, SensorReading, SensorValue};
pub use source::VehicleStateSource;
pub use state::{FieldValue, VehicleState};
