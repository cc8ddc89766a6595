//! Binary sensor descriptor tables

use rivian_core::model::{BinaryDeviceClass, BinarySensorDescription, FieldRef, OnValue};

/// Every lockable closure; the vehicle is unlocked if any of them is
pub const LOCK_STATE_FIELDS: &[&str] = &[
    "closureFrunkLocked",
    "closureLiftgateLocked",
    "closureSideBinLeftLocked",
    "closureSideBinRightLocked",
    "closureTailgateLocked",
    "closureTonneauLocked",
    "doorFrontLeftLocked",
    "doorFrontRightLocked",
    "doorRearLeftLocked",
    "doorRearRightLocked",
];

pub const DOOR_STATE_FIELDS: &[&str] = &[
    "doorFrontLeftClosed",
    "doorFrontRightClosed",
    "doorRearLeftClosed",
    "doorRearRightClosed",
];

pub const CLOSURE_STATE_FIELDS: &[&str] = &[
    "closureFrunkClosed",
    "closureLiftgateClosed",
    "closureSideBinLeftClosed",
    "closureSideBinRightClosed",
    "closureTailgateClosed",
    "closureTonneauClosed",
];

const SEAT_LEVELS: OnValue = OnValue::AnyOf(&["Level_1", "Level_2", "Level_3"]);

const fn open(key: &'static str, field: &'static str, name: &'static str) -> BinarySensorDescription {
    BinarySensorDescription::new(key, FieldRef::Single(field), name, OnValue::Exact("open"))
        .device_class(BinaryDeviceClass::Door)
}

const fn window(key: &'static str, field: &'static str, name: &'static str) -> BinarySensorDescription {
    BinarySensorDescription::new(key, FieldRef::Single(field), name, OnValue::Exact("open"))
        .device_class(BinaryDeviceClass::Window)
}

const fn unlocked(key: &'static str, field: &'static str, name: &'static str) -> BinarySensorDescription {
    BinarySensorDescription::new(key, FieldRef::Single(field), name, OnValue::Exact("unlocked"))
        .device_class(BinaryDeviceClass::Lock)
}

const fn heated(key: &'static str, field: &'static str, name: &'static str) -> BinarySensorDescription {
    BinarySensorDescription::new(key, FieldRef::Single(field), name, SEAT_LEVELS)
        .icon("mdi:car-seat-heater")
        .device_class(BinaryDeviceClass::Running)
}

const fn vented(key: &'static str, field: &'static str, name: &'static str) -> BinarySensorDescription {
    BinarySensorDescription::new(key, FieldRef::Single(field), name, SEAT_LEVELS)
        .icon("mdi:car-seat-cooler")
        .device_class(BinaryDeviceClass::Running)
}

const fn tire_pressure_invalid(key: &'static str, field: &'static str, name: &'static str) -> BinarySensorDescription {
    BinarySensorDescription::new(key, FieldRef::Single(field), name, OnValue::Exact("invalid"))
        .device_class(BinaryDeviceClass::Problem)
}

/// Binary sensors every trim exposes
pub const R1_BINARY_SENSORS: &[BinarySensorDescription] = &[
    BinarySensorDescription::new(
        "alarm_sound_status",
        FieldRef::Single("alarmSoundStatus"),
        "Gear Guard Alarm",
        OnValue::Exact("true"),
    )
    .device_class(BinaryDeviceClass::Tamper),
    BinarySensorDescription::new(
        "cabin_preconditioning_status",
        FieldRef::Single("cabinPreconditioningStatus"),
        "Cabin Climate Preconditioning",
        OnValue::AnyOf(&["active", "complete_maintain", "initiate"]),
    )
    .device_class(BinaryDeviceClass::Running),
    open("charge_port", "chargePortState", "Charge Port"),
    BinarySensorDescription::new(
        "charger_state",
        FieldRef::Single("chargerState"),
        "Charging Status",
        OnValue::AnyOf(&["charging_active", "charging_connecting"]),
    )
    .device_class(BinaryDeviceClass::BatteryCharging),
    BinarySensorDescription::new(
        "charger_status",
        FieldRef::Single("chargerStatus"),
        "Charger Connection",
        OnValue::Exact("chrgr_sts_not_connected"),
    )
    .device_class(BinaryDeviceClass::Plug)
    .negate(),
    open("closure_frunk_closed", "closureFrunkClosed", "Front Trunk"),
    unlocked("closure_frunk_locked", "closureFrunkLocked", "Front Trunk Lock"),
    open("closure_tailgate_closed", "closureTailgateClosed", "Tailgate"),
    unlocked("closure_tailgate_locked", "closureTailgateLocked", "Tailgate Lock"),
    BinarySensorDescription::new(
        "defrost_defog_status",
        FieldRef::Single("defrostDefogStatus"),
        "Defrost/Defog",
        OnValue::Exact("Off"),
    )
    .icon("mdi:car-defrost-front")
    .device_class(BinaryDeviceClass::Running)
    .negate(),
    open("door_front_left_closed", "doorFrontLeftClosed", "Door Front Left"),
    unlocked("door_front_left_locked", "doorFrontLeftLocked", "Door Front Left Lock"),
    open("door_front_right_closed", "doorFrontRightClosed", "Door Front Right"),
    unlocked("door_front_right_locked", "doorFrontRightLocked", "Door Front Right Lock"),
    open("door_rear_left_closed", "doorRearLeftClosed", "Door Rear Left"),
    unlocked("door_rear_left_locked", "doorRearLeftLocked", "Door Rear Left Lock"),
    open("door_rear_right_closed", "doorRearRightClosed", "Door Rear Right"),
    unlocked("door_rear_right_locked", "doorRearRightLocked", "Door Rear Right Lock"),
    unlocked("gear_guard_locked", "gearGuardLocked", "Gear Guard"),
    BinarySensorDescription::new(
        "pet_mode_status",
        FieldRef::Single("petModeStatus"),
        "Pet Mode",
        OnValue::Exact("On"),
    )
    .device_class(BinaryDeviceClass::Running),
    heated("seat_front_left_heat", "seatFrontLeftHeat", "Heated Seat Front Left"),
    vented("seat_front_left_vent", "seatFrontLeftVent", "Vented Seat Front Left"),
    heated("seat_front_right_heat", "seatFrontRightHeat", "Heated Seat Front Right"),
    vented("seat_front_right_vent", "seatFrontRightVent", "Vented Seat Front Right"),
    heated("seat_rear_left_heat", "seatRearLeftHeat", "Heated Seat Rear Left"),
    heated("seat_rear_right_heat", "seatRearRightHeat", "Heated Seat Rear Right"),
    BinarySensorDescription::new(
        "steering_wheel_heat",
        FieldRef::Single("steeringWheelHeat"),
        "Heated Steering Wheel",
        OnValue::Exact("Level_1"),
    )
    // no steering-heater icon upstream yet
    .icon("mdi:steering")
    .device_class(BinaryDeviceClass::Running),
    tire_pressure_invalid(
        "tire_pressure_status_valid_front_left",
        "tirePressureStatusValidFrontLeft",
        "Tire Pressure Front Left Validity",
    ),
    tire_pressure_invalid(
        "tire_pressure_status_valid_front_right",
        "tirePressureStatusValidFrontRight",
        "Tire Pressure Front Right Validity",
    ),
    tire_pressure_invalid(
        "tire_pressure_status_valid_rear_left",
        "tirePressureStatusValidRearLeft",
        "Tire Pressure Rear Left Validity",
    ),
    tire_pressure_invalid(
        "tire_pressure_status_valid_rear_right",
        "tirePressureStatusValidRearRight",
        "Tire Pressure Rear Right Validity",
    ),
    window("window_front_left_closed", "windowFrontLeftClosed", "Window Front Left"),
    window("window_front_right_closed", "windowFrontRightClosed", "Window Front Right"),
    window("window_rear_left_closed", "windowRearLeftClosed", "Window Rear Left"),
    window("window_rear_right_closed", "windowRearRightClosed", "Window Rear Right"),
    BinarySensorDescription::new(
        "wiper_fluid_state",
        FieldRef::Single("wiperFluidState"),
        "Wiper Fluid Level",
        OnValue::Exact("normal"),
    )
    .icon("mdi:wiper-wash")
    .device_class(BinaryDeviceClass::Problem)
    .negate(),
    BinarySensorDescription::new(
        "locked_state",
        FieldRef::Set(LOCK_STATE_FIELDS),
        "Locked State",
        OnValue::Exact("unlocked"),
    )
    .device_class(BinaryDeviceClass::Lock),
    BinarySensorDescription::new(
        "door_state",
        FieldRef::Set(DOOR_STATE_FIELDS),
        "Door State",
        OnValue::Exact("open"),
    )
    .device_class(BinaryDeviceClass::Door),
    BinarySensorDescription::new(
        "closure_state",
        FieldRef::Set(CLOSURE_STATE_FIELDS),
        "Closure State",
        OnValue::Exact("open"),
    )
    .device_class(BinaryDeviceClass::Door),
    BinarySensorDescription::new(
        "use_state",
        FieldRef::Single("powerState"),
        "In Use State",
        OnValue::Exact("go"),
    )
    .device_class(BinaryDeviceClass::Moving),
    BinarySensorDescription::new(
        "car_wash_mode",
        FieldRef::Single("carWashMode"),
        "Car Wash Mode",
        OnValue::Exact("on"),
    )
    .icon("mdi:car-wash"),
];

/// Gear tunnels and tonneau cover
pub const R1T_BINARY_SENSORS: &[BinarySensorDescription] = &[
    open("closure_side_bin_left_closed", "closureSideBinLeftClosed", "Gear Tunnel Left"),
    unlocked("closure_side_bin_left_locked", "closureSideBinLeftLocked", "Gear Tunnel Left Lock"),
    open("closure_side_bin_right_closed", "closureSideBinRightClosed", "Gear Tunnel Right"),
    unlocked("closure_side_bin_right_locked", "closureSideBinRightLocked", "Gear Tunnel Right Lock"),
    open("closure_tonneau_closed", "closureTonneauClosed", "Tonneau"),
    unlocked("closure_tonneau_locked", "closureTonneauLocked", "Tonneau Lock"),
];

/// Liftgate and third row
pub const R1S_BINARY_SENSORS: &[BinarySensorDescription] = &[
    open("closure_liftgate_closed", "closureLiftgateClosed", "Liftgate"),
    unlocked("closure_liftgate_locked", "closureLiftgateLocked", "Liftgate Lock"),
    heated("seat_third_row_left_heat", "seatThirdRowLeftHeat", "Heated Seat 3rd Row Left"),
    heated("seat_third_row_right_heat", "seatThirdRowRightHeat", "Heated Seat 3rd Row Right"),
];
