//! Integration tests for the DemoVehicle source

use rivian_core::{Trim, VehicleState, VehicleStateSource};
use rivian_entities::demo::Phase;
use rivian_entities::fields::CHARGING_SESSION_FIELDS;
use rivian_entities::DemoVehicle;
use std::collections::HashSet;

fn fetch(vehicle: &mut DemoVehicle, fields: &HashSet<&'static str>) -> VehicleState {
    vehicle
        .fetch(fields)
        .expect("fetch() should not error")
        .expect("fetch() should return Some")
}

#[test]
fn test_demo_vehicle_name() {
    let vehicle = DemoVehicle::new();
    assert_eq!(vehicle.name(), "Demo");
}

#[test]
fn test_demo_vehicle_cycles_phases() {
    let mut vehicle = DemoVehicle::new();
    let fields = HashSet::new();

    let mut phases = Vec::new();
    for _ in 0..4 {
        phases.push(vehicle.phase());
        fetch(&mut vehicle, &fields);
    }

    assert_eq!(
        phases,
        vec![Phase::Parked, Phase::Driving, Phase::Charging, Phase::Parked]
    );
}

#[test]
fn test_demo_vehicle_answers_only_requested_fields() {
    let mut vehicle = DemoVehicle::new();
    let fields: HashSet<&'static str> = ["batteryLevel", "gearStatus"].into_iter().collect();

    let state = fetch(&mut vehicle, &fields);
    let names: HashSet<&str> = state.field_names().collect();
    assert_eq!(names, fields);
}

#[test]
fn test_demo_vehicle_stamps_values() {
    let mut vehicle = DemoVehicle::new();
    let fields: HashSet<&'static str> = ["powerState"].into_iter().collect();

    let state = fetch(&mut vehicle, &fields);
    let value = state.get("powerState").expect("powerState should be reported");
    assert!(value.time_stamp.is_some(), "demo values should carry a timestamp");
    assert_eq!(value.as_text().as_deref(), Some("sleep"));
}

#[test]
fn test_demo_vehicle_reports_every_registry_field() {
    let registry = rivian_entities::build_registry().unwrap();
    let fields = registry.all_fields();

    let mut vehicle = DemoVehicle::new();
    let state = fetch(&mut vehicle, &fields);

    for field in &fields {
        assert!(state.get(field).is_some(), "demo should report {}", field);
    }
}

#[test]
fn test_demo_state_resolves_through_registry() {
    let registry = rivian_entities::build_registry().unwrap();
    let fields = registry.all_fields();
    let mut vehicle = DemoVehicle::new();

    // Parked
    let state = fetch(&mut vehicle, &fields);
    let resolver = registry.resolver(Trim::R1T);
    assert_eq!(resolver.binary_sensor("locked_state", &state).unwrap(), Some(false));
    assert_eq!(
        resolver
            .sensor("gear_status", &state)
            .unwrap()
            .map(|reading| reading.value.as_text().map(str::to_string)),
        Some(Some("Park".to_string()))
    );

    // Driving
    let state = fetch(&mut vehicle, &fields);
    assert_eq!(resolver.binary_sensor("locked_state", &state).unwrap(), Some(true));
    assert_eq!(resolver.binary_sensor("seat_front_left_heat", &state).unwrap(), Some(true));

    // Charging
    let state = fetch(&mut vehicle, &fields);
    assert_eq!(resolver.binary_sensor("charger_status", &state).unwrap(), Some(true));
    assert_eq!(resolver.binary_sensor("closure_frunk_closed", &state).unwrap(), Some(true));
    assert_eq!(
        resolver
            .sensor("ota_install_ready", &state)
            .unwrap()
            .and_then(|reading| reading.value.as_text().map(str::to_string)),
        Some("OTA Ready".to_string())
    );
}

#[test]
fn test_demo_rear_right_tire_drops_out() {
    let registry = rivian_entities::build_registry().unwrap();
    let fields: HashSet<&'static str> = ["tirePressureRearRight", "tirePressureRearLeft"].into_iter().collect();
    let mut vehicle = DemoVehicle::new();

    for step in 0..6 {
        let state = fetch(&mut vehicle, &fields);
        let rear_right = registry.resolve_sensor(Trim::R1, "tire_pressure_rear_right", &state).unwrap();
        let rear_left = registry.resolve_sensor(Trim::R1, "tire_pressure_rear_left", &state).unwrap();

        assert!(rear_left.is_some());
        assert_eq!(rear_right.is_none(), step == 5, "rear right at step {}", step);
    }
}

#[test]
fn test_demo_charging_session_only_while_charging() {
    let fields: HashSet<&'static str> = CHARGING_SESSION_FIELDS.iter().copied().collect();
    let mut vehicle = DemoVehicle::new();

    for _ in 0..3 {
        let phase = vehicle.phase();
        let state = fetch(&mut vehicle, &fields);
        if phase == Phase::Charging {
            assert_eq!(state.len(), CHARGING_SESSION_FIELDS.len());
            assert_eq!(state.get("currentCurrency").and_then(|v| v.as_text()).as_deref(), Some("USD"));
        } else {
            assert!(state.is_empty(), "no session while {:?}", phase);
        }
    }
}
