//! Sensor descriptor tables

use rivian_core::model::{DeviceClass, SensorDescription, StateClass};
use rivian_core::units::Unit;
use rivian_core::Normalizer;

/// Vehicle drive mode tokens and their in-car names
pub const DRIVE_MODE_MAP: &[(&str, &str)] = &[
    ("everyday", "All-Purpose"),
    ("sport", "Sport"),
    ("distance", "Conserve"),
    ("winter", "Snow"),
    ("towing", "Towing"),
    ("off_road_auto", "All-Terrain"),
    ("off_road_sand", "Soft Sand"),
    ("off_road_rocks", "Rock Crawl"),
    ("off_road_sport_auto", "Rally"),
    ("off_road_sport_drift", "Drift"),
];

const DRIVE_MODE_OPTIONS: &[&str] = &[
    "All-Purpose",
    "Sport",
    "Conserve",
    "Snow",
    "Towing",
    "All-Terrain",
    "Soft Sand",
    "Rock Crawl",
    "Rally",
    "Drift",
];

const OTA_STATUS_OPTIONS: &[&str] = &[
    "Idle",
    "Ready To Download",
    "Downloading",
    "Preparing",
    "Ready To Install",
    "Install Countdown",
    "Awaiting Install",
    "Installing",
    "Install Success",
    "Connection Lost",
    "Install Failed",
];

const fn ota_version(key: &'static str, field: &'static str, name: &'static str, icon: &'static str) -> SensorDescription {
    SensorDescription::new(key, field, name)
        .icon(icon)
        .diagnostic()
        .disabled_by_default()
}

const fn tire_pressure(key: &'static str, field: &'static str, name: &'static str) -> SensorDescription {
    SensorDescription::new(key, field, name)
        .icon("mdi:tire")
        .device_class(DeviceClass::Pressure)
        .unit(Unit::Bar)
        .measurement()
}

const fn diagnostic(key: &'static str, field: &'static str, name: &'static str, icon: &'static str) -> SensorDescription {
    SensorDescription::new(key, field, name).icon(icon).diagnostic()
}

/// Sensors every trim exposes
pub const R1_SENSORS: &[SensorDescription] = &[
    SensorDescription::new("altitude", "gnssAltitude", "Altitude")
        .icon("mdi:altimeter")
        .device_class(DeviceClass::Distance)
        .unit(Unit::Meters)
        .measurement()
        .precision(0),
    SensorDescription::new("battery_thermal_status", "batteryHvThermalEvent", "Battery Thermal Status")
        .icon("mdi:battery-alert")
        .normalizer(Normalizer::Humanize),
    SensorDescription::new(
        "battery_thermal_runaway_propagation",
        "batteryHvThermalEventPropagation",
        "Battery Thermal Runaway Propagation",
    )
    .icon("mdi:battery-alert"),
    SensorDescription::new("battery_level", "batteryLevel", "Battery State of Charge")
        .device_class(DeviceClass::Battery)
        .unit(Unit::Percent)
        .measurement()
        .precision(1),
    SensorDescription::new("battery_limit", "batteryLimit", "Battery State of Charge Limit")
        .icon("mdi:battery-charging-80")
        .unit(Unit::Percent),
    SensorDescription::new("battery_capacity", "batteryCapacity", "Battery Capacity")
        .icon("mdi:battery-check")
        .device_class(DeviceClass::EnergyStorage)
        .unit(Unit::KilowattHours)
        .measurement()
        .precision(2),
    SensorDescription::new("bearing", "gnssBearing", "Bearing")
        .icon("mdi:compass")
        .unit(Unit::Degrees)
        .precision(0),
    SensorDescription::new("brake_fluid_low", "brakeFluidLow", "Brake Fluid Level Low")
        .icon("mdi:car-brake-fluid-level"),
    SensorDescription::new("driver_temperature", "cabinClimateDriverTemperature", "Driver Temperature")
        .device_class(DeviceClass::Temperature)
        .unit(Unit::Celsius)
        .precision(1),
    SensorDescription::new("cabin_temperature", "cabinClimateInteriorTemperature", "Cabin Temperature")
        .device_class(DeviceClass::Temperature)
        .unit(Unit::Celsius)
        .measurement()
        .precision(1),
    SensorDescription::new(
        "cabin_preconditioning_type",
        "cabinPreconditioningType",
        "Cabin Climate Preconditioning Type",
    )
    .icon("mdi:thermostat")
    .normalizer(Normalizer::Humanize),
    SensorDescription::new("charger_derate_status", "chargerDerateStatus", "Charger Derate Status")
        .icon("mdi:ev-station"),
    SensorDescription::new("distance_to_empty", "distanceToEmpty", "Estimated Vehicle Range")
        .icon("mdi:map-marker-distance")
        .device_class(DeviceClass::Distance)
        .unit(Unit::Kilometers)
        .measurement()
        .precision(1),
    SensorDescription::new("drive_mode", "driveMode", "Drive Mode")
        .icon("mdi:car-speed-limiter")
        .options(DRIVE_MODE_OPTIONS)
        .normalizer(Normalizer::Lookup(DRIVE_MODE_MAP)),
    SensorDescription::new("gear_status", "gearStatus", "Gear Selector")
        .icon("mdi:car-shift-pattern")
        .options(&["Drive", "Neutral", "Park", "Reverse"])
        .normalizer(Normalizer::Title),
    SensorDescription::new("trailer_status", "trailerStatus", "Trailer Status").icon("mdi:truck-trailer"),
    SensorDescription::new("gear_guard_video_mode", "gearGuardVideoMode", "Gear Guard Video Mode")
        .icon("mdi:cctv")
        .options(&["Away From Home", "Everywhere"])
        .normalizer(Normalizer::Humanize),
    SensorDescription::new("gear_guard_video_status", "gearGuardVideoStatus", "Gear Guard Video Status")
        .icon("mdi:cctv")
        .options(&["Disabled", "Enabled", "Engaged"])
        .normalizer(Normalizer::Humanize),
    SensorDescription::new(
        "gear_guard_video_terms_accepted",
        "gearGuardVideoTermsAccepted",
        "Gear Guard Video Terms Accepted",
    )
    .icon("mdi:cctv")
    .diagnostic()
    .disabled_by_default()
    .normalizer(Normalizer::Humanize),
    ota_version(
        "ota_available_version",
        "otaAvailableVersion",
        "Software OTA - Available Version",
        "mdi:package",
    ),
    ota_version(
        "ota_available_version_git_hash",
        "otaAvailableVersionGitHash",
        "Software OTA - Available Version Git Hash",
        "mdi:source-commit",
    ),
    ota_version(
        "ota_available_version_number",
        "otaAvailableVersionNumber",
        "Software OTA - Available Version Number",
        "mdi:numeric",
    ),
    ota_version(
        "ota_available_version_week",
        "otaAvailableVersionWeek",
        "Software OTA - Available Version Week",
        "mdi:calendar-week",
    ),
    ota_version(
        "ota_available_version_year",
        "otaAvailableVersionYear",
        "Software OTA - Available Version Year",
        "mdi:calendar",
    ),
    diagnostic("ota_current_status", "otaCurrentStatus", "Software OTA - Status Current", "mdi:package")
        .normalizer(Normalizer::Humanize),
    ota_version(
        "ota_current_version",
        "otaCurrentVersion",
        "Software OTA - Current Version",
        "mdi:package",
    ),
    ota_version(
        "ota_current_version_git_hash",
        "otaCurrentVersionGitHash",
        "Software OTA - Current Version Git Hash",
        "mdi:source-commit",
    ),
    ota_version(
        "ota_current_version_number",
        "otaCurrentVersionNumber",
        "Software OTA - Current Version Number",
        "mdi:numeric",
    ),
    ota_version(
        "ota_current_version_week",
        "otaCurrentVersionWeek",
        "Software OTA - Current Version Week",
        "mdi:calendar-week",
    ),
    ota_version(
        "ota_current_version_year",
        "otaCurrentVersionYear",
        "Software OTA - Current Version Year",
        "mdi:calendar",
    ),
    diagnostic(
        "ota_download_progress",
        "otaDownloadProgress",
        "Software OTA - Download Progress",
        "mdi:progress-download",
    )
    .unit(Unit::Percent),
    diagnostic(
        "ota_install_duration",
        "otaInstallDuration",
        "Software OTA - Install Duration",
        "mdi:wrench-clock",
    )
    .device_class(DeviceClass::Duration)
    .unit(Unit::Minutes),
    ota_version(
        "ota_install_progress",
        "otaInstallProgress",
        "Software OTA - Install Progress",
        "mdi:progress-clock",
    )
    .unit(Unit::Percent),
    diagnostic(
        "ota_install_ready",
        "otaInstallReady",
        "Software OTA - Install Ready",
        "mdi:progress-check",
    )
    .normalizer(Normalizer::HumanizeAcronym("OTA")),
    diagnostic("ota_install_time", "otaInstallTime", "Software OTA - Install Time", "mdi:clock")
        .device_class(DeviceClass::Duration)
        .unit(Unit::Minutes),
    diagnostic("ota_install_type", "otaInstallType", "Software OTA - Install Type", "mdi:package"),
    diagnostic("ota_status", "otaStatus", "Software OTA - Status", "mdi:package")
        .options(OTA_STATUS_OPTIONS)
        .normalizer(Normalizer::Humanize),
    SensorDescription::new(
        "pet_mode_temperature_status",
        "petModeTemperatureStatus",
        "Pet Mode Temperature Status",
    )
    .icon("mdi:dog-side")
    .normalizer(Normalizer::Humanize),
    SensorDescription::new("power_state", "powerState", "Power State")
        .icon("mdi:power")
        .options(&["Go", "Ready", "Sleep", "Standby"])
        .normalizer(Normalizer::Title)
        // TODO: drop the alias once installs from before the rename have migrated (2024-06)
        .old_key("power_tate"),
    SensorDescription::new("range_threshold", "rangeThreshold", "Range Threshold")
        .icon("mdi:map-marker-distance")
        .normalizer(Normalizer::Humanize),
    SensorDescription::new(
        "remote_charging_available",
        "remoteChargingAvailable",
        "Remote Charging Available",
    )
    .icon("mdi:battery-charging-wireless-80"),
    SensorDescription::new("service_mode", "serviceMode", "Service Mode").icon("mdi:account-wrench"),
    SensorDescription::new("speed", "gnssSpeed", "Speed")
        .device_class(DeviceClass::Speed)
        .unit(Unit::MetersPerSecond)
        .measurement()
        .precision(0),
    SensorDescription::new("time_to_end_of_charge", "timeToEndOfCharge", "Charging Time Remaining")
        .device_class(DeviceClass::Duration)
        .unit(Unit::Minutes)
        .measurement(),
    tire_pressure("tire_pressure_front_left", "tirePressureFrontLeft", "Tire Pressure Front Left"),
    tire_pressure("tire_pressure_front_right", "tirePressureFrontRight", "Tire Pressure Front Right"),
    tire_pressure("tire_pressure_rear_left", "tirePressureRearLeft", "Tire Pressure Rear Left"),
    tire_pressure("tire_pressure_rear_right", "tirePressureRearRight", "Tire Pressure Rear Right"),
    SensorDescription::new(
        "tire_pressure_status_front_left",
        "tirePressureStatusFrontLeft",
        "Tire Pressure Front Left Status",
    )
    .icon("mdi:tire"),
    SensorDescription::new(
        "tire_pressure_status_front_right",
        "tirePressureStatusFrontRight",
        "Tire Pressure Front Right Status",
    )
    .icon("mdi:tire"),
    SensorDescription::new(
        "tire_pressure_status_rear_left",
        "tirePressureStatusRearLeft",
        "Tire Pressure Rear Left Status",
    )
    .icon("mdi:tire"),
    SensorDescription::new(
        "tire_pressure_status_rear_right",
        "tirePressureStatusRearRight",
        "Tire Pressure Rear Right Status",
    )
    .icon("mdi:tire"),
    SensorDescription::new("vehicle_mileage", "vehicleMileage", "Odometer")
        .icon("mdi:counter")
        .device_class(DeviceClass::Distance)
        .unit(Unit::Meters)
        .suggested_unit(Unit::Miles)
        .state_class(StateClass::TotalIncreasing)
        .precision(1),
    diagnostic(
        "window_front_left_calibrated",
        "windowFrontLeftCalibrated",
        "Window Calibration Front Left State",
        "mdi:window-closed",
    ),
    diagnostic(
        "window_front_right_calibrated",
        "windowFrontRightCalibrated",
        "Window Calibration Front Right State",
        "mdi:window-closed",
    ),
    diagnostic(
        "window_rear_left_calibrated",
        "windowRearLeftCalibrated",
        "Window Calibration Rear Left State",
        "mdi:window-closed",
    ),
    diagnostic(
        "window_rear_right_calibrated",
        "windowRearRightCalibrated",
        "Window Calibration Rear Right State",
        "mdi:window-closed",
    ),
    diagnostic("windows_next_action", "windowsNextAction", "Windows Next Action", "mdi:window-closed"),
    diagnostic(
        "twelve_volt_battery_health",
        "twelveVoltBatteryHealth",
        "12V Battery Health",
        "mdi:car-battery",
    ),
    diagnostic(
        "limited_acceleration_cold",
        "limitedAccelCold",
        "Limited Acceleration (Cold)",
        "mdi:snowflake-thermometer",
    ),
    diagnostic(
        "limited_regen_braking_cold",
        "limitedRegenCold",
        "Limited Regenerative Braking (Cold)",
        "mdi:snowflake-thermometer",
    ),
    diagnostic(
        "bluetooth_front_fascia_hardware_failure_status",
        "btmFfHardwareFailureStatus",
        "Bluetooth Module Failure Status Fascia Front",
        "mdi:bluetooth",
    ),
    diagnostic(
        "bluetooth_rear_fascia_hardware_failure_status",
        "btmRfHardwareFailureStatus",
        "Bluetooth Module Failure Status Fascia Rear",
        "mdi:bluetooth",
    ),
    diagnostic(
        "bluetooth_instrument_controls_hardware_failure_status",
        "btmIcHardwareFailureStatus",
        "Bluetooth Module Failure Status Instrument Controls",
        "mdi:bluetooth",
    ),
    diagnostic(
        "bluetooth_right_front_door_hardware_failure_status",
        "btmRfdHardwareFailureStatus",
        "Bluetooth Module Failure Status Door Front Right",
        "mdi:bluetooth",
    ),
    diagnostic(
        "bluetooth_left_front_door_hardware_failure_status",
        "btmLfdHardwareFailureStatus",
        "Bluetooth Module Failure Status Door Front Left",
        "mdi:bluetooth",
    ),
];

/// Sensors only the R1S has
pub const R1S_SENSORS: &[SensorDescription] = &[SensorDescription::new(
    "liftgate_next_action",
    "closureLiftgateNextAction",
    "Liftgate Next Action",
)
.icon("mdi:gesture-tap-button")];
