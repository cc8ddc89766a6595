//! Field Registry
//!
//! Every vehicle state field this integration understands, partitioned by
//! the trim that reports it. Descriptor tables may only read fields listed
//! here; the registry refuses to build otherwise.

/// Fields reported by every trim
pub const R1_FIELDS: &[&str] = &[
    // Battery and charging
    "batteryCapacity",
    "batteryHvThermalEvent",
    "batteryHvThermalEventPropagation",
    "batteryLevel",
    "batteryLimit",
    "chargePortState",
    "chargerDerateStatus",
    "chargerState",
    "chargerStatus",
    "distanceToEmpty",
    "rangeThreshold",
    "remoteChargingAvailable",
    "timeToEndOfCharge",
    "twelveVoltBatteryHealth",
    // Cabin
    "cabinClimateDriverTemperature",
    "cabinClimateInteriorTemperature",
    "cabinPreconditioningStatus",
    "cabinPreconditioningType",
    "defrostDefogStatus",
    "petModeStatus",
    "petModeTemperatureStatus",
    "seatFrontLeftHeat",
    "seatFrontLeftVent",
    "seatFrontRightHeat",
    "seatFrontRightVent",
    "seatRearLeftHeat",
    "seatRearRightHeat",
    "steeringWheelHeat",
    // Closures
    "closureFrunkClosed",
    "closureFrunkLocked",
    "closureTailgateClosed",
    "closureTailgateLocked",
    "doorFrontLeftClosed",
    "doorFrontLeftLocked",
    "doorFrontRightClosed",
    "doorFrontRightLocked",
    "doorRearLeftClosed",
    "doorRearLeftLocked",
    "doorRearRightClosed",
    "doorRearRightLocked",
    "windowFrontLeftCalibrated",
    "windowFrontLeftClosed",
    "windowFrontRightCalibrated",
    "windowFrontRightClosed",
    "windowRearLeftCalibrated",
    "windowRearLeftClosed",
    "windowRearRightCalibrated",
    "windowRearRightClosed",
    "windowsNextAction",
    // Drive
    "brakeFluidLow",
    "carWashMode",
    "driveMode",
    "gearStatus",
    "limitedAccelCold",
    "limitedRegenCold",
    "powerState",
    "serviceMode",
    "trailerStatus",
    "vehicleMileage",
    "wiperFluidState",
    // Location
    "gnssAltitude",
    "gnssBearing",
    "gnssLocation",
    "gnssSpeed",
    // Gear Guard
    "alarmSoundStatus",
    "gearGuardLocked",
    "gearGuardVideoMode",
    "gearGuardVideoStatus",
    "gearGuardVideoTermsAccepted",
    // Software updates
    "otaAvailableVersion",
    "otaAvailableVersionGitHash",
    "otaAvailableVersionNumber",
    "otaAvailableVersionWeek",
    "otaAvailableVersionYear",
    "otaCurrentStatus",
    "otaCurrentVersion",
    "otaCurrentVersionGitHash",
    "otaCurrentVersionNumber",
    "otaCurrentVersionWeek",
    "otaCurrentVersionYear",
    "otaDownloadProgress",
    "otaInstallDuration",
    "otaInstallProgress",
    "otaInstallReady",
    "otaInstallTime",
    "otaInstallType",
    "otaStatus",
    // Tires
    "tirePressureFrontLeft",
    "tirePressureFrontRight",
    "tirePressureRearLeft",
    "tirePressureRearRight",
    "tirePressureStatusFrontLeft",
    "tirePressureStatusFrontRight",
    "tirePressureStatusRearLeft",
    "tirePressureStatusRearRight",
    "tirePressureStatusValidFrontLeft",
    "tirePressureStatusValidFrontRight",
    "tirePressureStatusValidRearLeft",
    "tirePressureStatusValidRearRight",
    // Bluetooth modules
    "btmFfHardwareFailureStatus",
    "btmIcHardwareFailureStatus",
    "btmLfdHardwareFailureStatus",
    "btmRfHardwareFailureStatus",
    "btmRfdHardwareFailureStatus",
];

pub const R1S_FIELDS: &[&str] = &[
    "closureLiftgateClosed",
    "closureLiftgateLocked",
    "closureLiftgateNextAction",
    "seatThirdRowLeftHeat",
    "seatThirdRowRightHeat",
];

pub const R1T_FIELDS: &[&str] = &[
    "closureSideBinLeftClosed",
    "closureSideBinLeftLocked",
    "closureSideBinRightClosed",
    "closureSideBinRightLocked",
    "closureTonneauClosed",
    "closureTonneauLocked",
];

/// Fetched for location and software version reporting, not exposed as sensors
pub const AUXILIARY_FIELDS: &[&str] = &[
    "gnssLocation",
    "otaCurrentVersion",
    "otaCurrentVersionYear",
    "otaCurrentVersionWeek",
    "otaCurrentVersionNumber",
    "otaCurrentVersionGitHash",
    "otaAvailableVersion",
    "otaAvailableVersionYear",
    "otaAvailableVersionWeek",
    "otaAvailableVersionNumber",
    "otaAvailableVersionGitHash",
    "otaInstallProgress",
];

/// Left out when a deployment opts out of tire pressure monitoring
pub const TIRE_PRESSURE_FIELDS: &[&str] = &[
    "tirePressureFrontLeft",
    "tirePressureFrontRight",
    "tirePressureRearLeft",
    "tirePressureRearRight",
];

/// Live charging session fields, queried separately from vehicle state
pub const CHARGING_SESSION_FIELDS: &[&str] = &[
    "currentCurrency",
    "currentPrice",
    "kilometersChargedPerHour",
    "power",
    "rangeAddedThisSession",
    "startTime",
    "timeElapsed",
    "totalChargedEnergy",
];
