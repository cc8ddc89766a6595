//! Integration tests for the bundled descriptor tables

use rivian_core::model::ValueKind;
use rivian_core::state::INVALID_SENSOR_STATES;
use rivian_core::{Normalizer, Registry, SensorValue, Trim, VehicleConfig, VehicleState};
use rivian_entities::fields::{AUXILIARY_FIELDS, R1S_FIELDS, R1T_FIELDS, R1_FIELDS, TIRE_PRESSURE_FIELDS};
use rivian_entities::sensors::DRIVE_MODE_MAP;
use std::collections::HashSet;

fn registry() -> Registry {
    rivian_entities::build_registry().expect("bundled tables should be consistent")
}

// ==================== Registry construction ====================

#[test]
fn test_bundled_tables_build() {
    let registry = registry();
    assert_eq!(registry.sensors(Trim::R1).count(), 66);
    assert_eq!(registry.sensors(Trim::R1S).count(), 67);
    assert_eq!(registry.sensors(Trim::R1T).count(), 66);
    assert_eq!(registry.binary_sensors(Trim::R1).count(), 41);
    assert_eq!(registry.binary_sensors(Trim::R1S).count(), 45);
    assert_eq!(registry.binary_sensors(Trim::R1T).count(), 47);
}

#[test]
fn test_trim_tables_are_additive() {
    let registry = registry();
    let generic: Vec<_> = registry.binary_sensors(Trim::R1).map(|d| d.key).collect();

    for trim in [Trim::R1S, Trim::R1T] {
        let view: Vec<_> = registry.binary_sensors(trim).map(|d| d.key).collect();
        assert_eq!(&view[..generic.len()], &generic[..], "{} should start with the generic table", trim);
    }

    assert!(registry.binary_sensor(Trim::R1T, "closure_tonneau_closed").is_some());
    assert!(registry.binary_sensor(Trim::R1S, "closure_tonneau_closed").is_none());
    assert!(registry.binary_sensor(Trim::R1S, "seat_third_row_left_heat").is_some());
    assert!(registry.sensor(Trim::R1S, "liftgate_next_action").is_some());
    assert!(registry.sensor(Trim::R1T, "liftgate_next_action").is_none());
}

#[test]
fn test_power_state_alias_migrates() {
    let registry = registry();
    for trim in Trim::ALL {
        assert_eq!(registry.current_key(trim, "power_tate"), Some("power_state"));
    }
}

#[test]
fn test_enum_options_cover_lookup_labels() {
    let registry = registry();
    let drive_mode = registry.sensor(Trim::R1, "drive_mode").unwrap();
    assert_eq!(drive_mode.value_kind(), ValueKind::Enum);
    let labels: Vec<_> = drive_mode.normalizer.labels().collect();
    assert_eq!(labels, drive_mode.options);
}

// ==================== Field sets ====================

#[test]
fn test_all_fields_is_the_field_registry() {
    let registry = registry();
    let known: HashSet<&str> = R1_FIELDS
        .iter()
        .chain(R1S_FIELDS)
        .chain(R1T_FIELDS)
        .copied()
        .collect();

    assert_eq!(registry.all_fields(), known);
    assert_eq!(registry.all_fields().len(), 115);
    for field in AUXILIARY_FIELDS {
        assert!(registry.all_fields().contains(field));
    }
}

#[test]
fn test_aggregated_fields_are_flattened() {
    let all = registry().all_fields();
    for field in ["closureTonneauLocked", "closureSideBinRightClosed", "closureLiftgateLocked"] {
        assert!(all.contains(field), "{} should come from the aggregated sets", field);
    }
}

#[test]
fn test_excluding_tire_pressure_removes_exactly_the_four_readings() {
    let registry = registry();
    let all = registry.all_fields();
    let without = registry.all_fields_excluding_tire_pressure();

    let tire_pressure: HashSet<&str> = TIRE_PRESSURE_FIELDS.iter().copied().collect();
    assert!(tire_pressure.is_subset(&all));
    assert!(without.is_disjoint(&tire_pressure));
    assert_eq!(without.len(), all.len() - 4);
    assert_eq!(all.difference(&without).count(), 4);

    // Status and validity fields stay
    assert!(without.contains("tirePressureStatusFrontLeft"));
    assert!(without.contains("tirePressureStatusValidRearRight"));
}

#[test]
fn test_api_fields_follow_config() {
    let registry = registry();
    let config = VehicleConfig {
        trim: Trim::R1T,
        exclude_tire_pressure: true,
    };
    assert_eq!(registry.api_fields(&config), registry.all_fields_excluding_tire_pressure());
    assert_eq!(registry.api_fields(&VehicleConfig::new(Trim::R1T)), registry.all_fields());
}

// ==================== Sentinels ====================

#[test]
fn test_every_entity_is_unavailable_on_sentinel_values() {
    let registry = registry();

    for sentinel in INVALID_SENSOR_STATES {
        let state: VehicleState = registry.all_fields().into_iter().map(|field| (field, sentinel)).collect();

        for trim in Trim::ALL {
            for entity in registry.resolver(trim).resolve_all(&state) {
                assert!(
                    !entity.is_available(),
                    "{} should be unavailable on `{}` for {}",
                    entity.key,
                    sentinel,
                    trim
                );
            }
        }
    }
}

#[test]
fn test_every_entity_is_unavailable_on_empty_state() {
    let registry = registry();
    let entities = registry.resolver(Trim::R1S).resolve_all(&VehicleState::new());
    assert_eq!(entities.len(), 67 + 45);
    assert!(entities.iter().all(|entity| entity.state.is_none()));
}

// ==================== Sensor examples ====================

#[test]
fn test_drive_mode_lookup() {
    let normalizer = Normalizer::Lookup(DRIVE_MODE_MAP);
    assert_eq!(normalizer.apply("winter"), "Snow");
    assert_eq!(normalizer.apply("unknown_mode"), "unknown_mode");

    let registry = registry();
    let state = VehicleState::new().with("driveMode", "off_road_sport_drift");
    let reading = registry.resolve_sensor(Trim::R1T, "drive_mode", &state).unwrap().unwrap();
    assert_eq!(reading.value.as_text(), Some("Drift"));
}

#[test]
fn test_ota_install_ready_acronym() {
    let registry = registry();
    let state = VehicleState::new().with("otaInstallReady", "ota_ready");
    let reading = registry.resolve_sensor(Trim::R1, "ota_install_ready", &state).unwrap().unwrap();
    assert_eq!(reading.value, SensorValue::Text("OTA Ready".to_string()));
}

#[test]
fn test_ota_status_humanized() {
    let registry = registry();
    let state = VehicleState::new().with("otaStatus", "ready_to_install");
    let reading = registry.resolve_sensor(Trim::R1, "ota_status", &state).unwrap().unwrap();
    assert_eq!(reading.value.as_text(), Some("Ready To Install"));
}

#[test]
fn test_measurement_keeps_unit_and_precision() {
    let registry = registry();
    let state = VehicleState::new().with("batteryCapacity", 131.2);
    let reading = registry.resolve_sensor(Trim::R1, "battery_capacity", &state).unwrap().unwrap();
    assert_eq!(reading.value.as_number(), Some(131.2));
    assert_eq!(reading.unit.map(|unit| unit.symbol()), Some("kWh"));
    assert_eq!(reading.precision, Some(2));
}

#[test]
fn test_unknown_sensor_key_is_an_error() {
    let registry = registry();
    assert!(registry.resolve_sensor(Trim::R1, "flux_capacitor", &VehicleState::new()).is_err());
    // Trim specific keys are unknown to other trims
    assert!(registry
        .resolve_sensor(Trim::R1T, "liftgate_next_action", &VehicleState::new())
        .is_err());
}

// ==================== Binary examples ====================

#[test]
fn test_frunk_closure() {
    let registry = registry();
    let resolve = |state: &VehicleState| registry.resolve_binary(Trim::R1, "closure_frunk_closed", state).unwrap();

    assert_eq!(resolve(&VehicleState::new().with("closureFrunkClosed", "open")), Some(true));
    assert_eq!(resolve(&VehicleState::new().with("closureFrunkClosed", "closed")), Some(false));
    assert_eq!(resolve(&VehicleState::new()), None);
}

#[test]
fn test_wiper_fluid_is_negated() {
    let registry = registry();
    let resolve = |value: &str| {
        let state = VehicleState::new().with("wiperFluidState", value);
        registry.resolve_binary(Trim::R1, "wiper_fluid_state", &state).unwrap()
    };

    assert_eq!(resolve("normal"), Some(false));
    assert_eq!(resolve("low"), Some(true));
    assert_eq!(resolve("fault"), None);
}

#[test]
fn test_heated_seat_levels() {
    let registry = registry();
    let resolve = |value: &str| {
        let state = VehicleState::new().with("seatThirdRowLeftHeat", value);
        registry.resolve_binary(Trim::R1S, "seat_third_row_left_heat", &state).unwrap()
    };

    assert_eq!(resolve("Level_3"), Some(true));
    assert_eq!(resolve("Off"), Some(false));
}

#[test]
fn test_locked_state_is_or_over_all_locks() {
    let registry = registry();
    let locked: VehicleState = rivian_entities::binary_sensors::LOCK_STATE_FIELDS
        .iter()
        .map(|field| (*field, "locked"))
        .collect();
    assert_eq!(registry.resolve_binary(Trim::R1T, "locked_state", &locked).unwrap(), Some(false));

    let one_unlocked = locked.clone().with("closureTonneauLocked", "unlocked");
    assert_eq!(registry.resolve_binary(Trim::R1T, "locked_state", &one_unlocked).unwrap(), Some(true));
}

#[test]
fn test_door_state_partial_report() {
    let registry = registry();
    // Only one door reporting, and it is shut
    let state = VehicleState::new()
        .with("doorFrontLeftClosed", "closed")
        .with("doorRearLeftClosed", "signal_not_available");
    assert_eq!(registry.resolve_binary(Trim::R1, "door_state", &state).unwrap(), Some(false));

    let state = VehicleState::new().with("doorRearRightClosed", "fault");
    assert_eq!(registry.resolve_binary(Trim::R1, "door_state", &state).unwrap(), None);
}

#[test]
fn test_charger_connection_negated() {
    let registry = registry();
    let state = VehicleState::new().with("chargerStatus", "chrgr_sts_connected_charging");
    assert_eq!(registry.resolve_binary(Trim::R1, "charger_status", &state).unwrap(), Some(true));
}
