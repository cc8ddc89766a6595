//! Descriptor registry
//!
//! The registry owns the per-trim descriptor tables and the Field Registry.
//! It is built once from static tables, checked for consistency, and then
//! only read: resolvers borrow it, the server shares it behind an `Arc`.
//!
//! A vehicle of a given trim sees the generic (`R1`) descriptors followed by
//! the descriptors of its own trim.

use crate::config::VehicleConfig;
use crate::error::{RegistryError, ResolveError};
use crate::model::{BinarySensorDescription, FieldRef, SensorDescription, Trim};
use crate::resolve::{Resolver, SensorReading};
use crate::state::VehicleState;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Static inputs the registry is assembled from
#[derive(Debug, Clone, Copy)]
pub struct RegistryTables {
    pub sensors: &'static [(Trim, &'static [SensorDescription])],
    pub binary_sensors: &'static [(Trim, &'static [BinarySensorDescription])],

    /// Every API field name understood, partitioned by trim
    pub known_fields: &'static [(Trim, &'static [&'static str])],

    /// Fields fetched for reporting but not exposed as sensors
    pub auxiliary_fields: &'static [&'static str],

    pub tire_pressure_fields: &'static [&'static str],
}

#[derive(Debug)]
pub struct Registry {
    sensors: HashMap<Trim, Vec<&'static SensorDescription>>,
    binary_sensors: HashMap<Trim, Vec<&'static BinarySensorDescription>>,
    known_fields: HashMap<Trim, HashSet<&'static str>>,
    auxiliary_fields: &'static [&'static str],
    tire_pressure_fields: &'static [&'static str],
}

/// Generic descriptors followed by the trim's own
fn view<'a, T: 'static>(
    tables: &'a HashMap<Trim, Vec<&'static T>>,
    trim: Trim,
) -> impl Iterator<Item = &'static T> + 'a {
    let generic = tables.get(&Trim::R1).into_iter().flatten();
    let specific = (!trim.is_generic())
        .then(|| tables.get(&trim))
        .flatten()
        .into_iter()
        .flatten();
    generic.chain(specific).copied()
}

fn group<T: 'static>(tables: &'static [(Trim, &'static [T])]) -> HashMap<Trim, Vec<&'static T>> {
    let mut grouped: HashMap<Trim, Vec<&'static T>> = HashMap::new();
    for &(trim, table) in tables {
        grouped.entry(trim).or_default().extend(table.iter());
    }
    grouped
}

impl Registry {
    /// Assemble and validate the registry
    pub fn new(tables: &RegistryTables) -> Result<Self, RegistryError> {
        let mut known_fields: HashMap<Trim, HashSet<&'static str>> = HashMap::new();
        for &(trim, fields) in tables.known_fields {
            known_fields.entry(trim).or_default().extend(fields.iter().copied());
        }

        let registry = Self {
            sensors: group(tables.sensors),
            binary_sensors: group(tables.binary_sensors),
            known_fields,
            auxiliary_fields: tables.auxiliary_fields,
            tire_pressure_fields: tables.tire_pressure_fields,
        };

        registry.validate()?;

        debug!(
            "Descriptor registry built: {} sensors, {} binary sensors, {} API fields",
            registry.sensors.values().map(Vec::len).sum::<usize>(),
            registry.binary_sensors.values().map(Vec::len).sum::<usize>(),
            registry.all_fields().len()
        );

        Ok(registry)
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let every_field: HashSet<&'static str> =
            self.known_fields.values().flatten().copied().collect();

        for trim in Trim::ALL {
            self.validate_keys(trim)?;

            // Generic descriptors may aggregate fields only some trims have
            let allowed = if trim.is_generic() {
                every_field.clone()
            } else {
                self.known_fields(trim)
            };
            self.validate_fields(trim, &allowed)?;
        }

        if let Some(field) = self
            .auxiliary_fields
            .iter()
            .copied()
            .find(|field| !every_field.contains(field))
        {
            return Err(RegistryError::UnknownAuxiliaryField(field));
        }

        let all_fields = self.all_fields();
        if let Some(field) = self
            .tire_pressure_fields
            .iter()
            .copied()
            .find(|field| !all_fields.contains(field))
        {
            return Err(RegistryError::TirePressureFieldMissing(field));
        }

        Ok(())
    }

    fn validate_keys(&self, trim: Trim) -> Result<(), RegistryError> {
        let mut keys = HashSet::new();
        for description in self.sensors(trim) {
            if !keys.insert(description.key) {
                return Err(RegistryError::DuplicateKey {
                    trim,
                    platform: "sensor",
                    key: description.key,
                });
            }
        }
        for description in self.sensors(trim) {
            if let Some(alias) = description.old_key {
                if keys.contains(alias) {
                    return Err(RegistryError::AliasCollision {
                        trim,
                        key: description.key,
                        alias,
                    });
                }
            }
        }

        let mut keys = HashSet::new();
        for description in self.binary_sensors(trim) {
            if !keys.insert(description.key) {
                return Err(RegistryError::DuplicateKey {
                    trim,
                    platform: "binary sensor",
                    key: description.key,
                });
            }
        }

        Ok(())
    }

    /// Checks only the trim's own table; the generic table is checked once
    fn validate_fields(&self, trim: Trim, allowed: &HashSet<&'static str>) -> Result<(), RegistryError> {
        for description in self.sensors.get(&trim).into_iter().flatten() {
            if !allowed.contains(description.field) {
                return Err(RegistryError::UnknownField {
                    trim,
                    key: description.key,
                    field: description.field,
                });
            }
            for label in description.normalizer.labels() {
                if !description.options.is_empty() && !description.options.contains(&label) {
                    return Err(RegistryError::OptionMismatch {
                        trim,
                        key: description.key,
                        label,
                    });
                }
            }
        }

        for description in self.binary_sensors.get(&trim).into_iter().flatten() {
            if matches!(description.field, FieldRef::Set(fields) if fields.is_empty()) {
                return Err(RegistryError::EmptyFieldSet {
                    trim,
                    key: description.key,
                });
            }
            if let Some(field) = description
                .field
                .fields()
                .iter()
                .copied()
                .find(|field| !allowed.contains(field))
            {
                return Err(RegistryError::UnknownField {
                    trim,
                    key: description.key,
                    field,
                });
            }
        }

        Ok(())
    }

    // === Descriptor lookup ===

    /// Sensor descriptors a vehicle of this trim exposes, in table order
    pub fn sensors(&self, trim: Trim) -> impl Iterator<Item = &'static SensorDescription> + '_ {
        view(&self.sensors, trim)
    }

    /// Binary sensor descriptors a vehicle of this trim exposes, in table order
    pub fn binary_sensors(
        &self,
        trim: Trim,
    ) -> impl Iterator<Item = &'static BinarySensorDescription> + '_ {
        view(&self.binary_sensors, trim)
    }

    pub fn sensor(&self, trim: Trim, key: &str) -> Option<&'static SensorDescription> {
        self.sensors(trim).find(|description| description.key == key)
    }

    pub fn binary_sensor(&self, trim: Trim, key: &str) -> Option<&'static BinarySensorDescription> {
        self.binary_sensors(trim).find(|description| description.key == key)
    }

    /// Live key for `key`, following a deprecated sensor alias if needed
    pub fn current_key(&self, trim: Trim, key: &str) -> Option<&'static str> {
        if let Some(description) = self.sensor(trim, key) {
            return Some(description.key);
        }
        if let Some(description) = self.binary_sensor(trim, key) {
            return Some(description.key);
        }
        self.sensors(trim)
            .find(|description| description.old_key == Some(key))
            .map(|description| description.key)
    }

    // === Field sets ===

    /// Field Registry entries for this trim (generic plus trim specific)
    pub fn known_fields(&self, trim: Trim) -> HashSet<&'static str> {
        let mut fields: HashSet<&'static str> = self
            .known_fields
            .get(&Trim::R1)
            .into_iter()
            .flatten()
            .copied()
            .collect();
        if !trim.is_generic() {
            fields.extend(self.known_fields.get(&trim).into_iter().flatten().copied());
        }
        fields
    }

    /// Every field read by any descriptor of any trim, plus the auxiliary fields
    pub fn all_fields(&self) -> HashSet<&'static str> {
        let sensor_fields = self
            .sensors
            .values()
            .flatten()
            .map(|description| description.field);
        let binary_fields = self
            .binary_sensors
            .values()
            .flatten()
            .copied()
            .flat_map(|description| description.field.fields().iter().copied());

        sensor_fields
            .chain(binary_fields)
            .chain(self.auxiliary_fields.iter().copied())
            .collect()
    }

    /// [`Registry::all_fields`] without the tire pressure readings
    ///
    /// Computed as a symmetric difference. Registry construction guarantees
    /// every tire pressure field is in the full set, so this never adds one.
    pub fn all_fields_excluding_tire_pressure(&self) -> HashSet<&'static str> {
        let tire_pressure: HashSet<&'static str> = self.tire_pressure_fields.iter().copied().collect();
        self.all_fields()
            .symmetric_difference(&tire_pressure)
            .copied()
            .collect()
    }

    /// Fields to request for a vehicle with this configuration
    pub fn api_fields(&self, config: &VehicleConfig) -> HashSet<&'static str> {
        if config.exclude_tire_pressure {
            self.all_fields_excluding_tire_pressure()
        } else {
            self.all_fields()
        }
    }

    pub fn tire_pressure_fields(&self) -> &'static [&'static str] {
        self.tire_pressure_fields
    }

    // === Resolution ===

    pub fn resolver(&self, trim: Trim) -> Resolver<'_> {
        Resolver::new(self, trim)
    }

    pub fn resolve_sensor(
        &self,
        trim: Trim,
        key: &str,
        state: &VehicleState,
    ) -> Result<Option<SensorReading>, ResolveError> {
        self.resolver(trim).sensor(key, state)
    }

    pub fn resolve_binary(
        &self,
        trim: Trim,
        key: &str,
        state: &VehicleState,
    ) -> Result<Option<bool>, ResolveError> {
        self.resolver(trim).binary_sensor(key, state)
    }
}
