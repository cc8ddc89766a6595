//! Demo source that generates synthetic vehicle state for testing
//!
//! Cycles a vehicle through parked, driving and charging phases, one phase
//! step per fetch, and answers with plausible raw values in the same shape
//! the vehicle state API uses. No account or vehicle required.

use anyhow::Result;
use chrono::Utc;
use rivian_core::{FieldValue, VehicleState, VehicleStateSource};
use serde_json::{json, Value};
use std::collections::HashSet;

// =============================================================================
// Phases: what the vehicle is doing during a fetch
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parked,
    Driving,
    Charging,
}

impl Phase {
    const CYCLE: [Phase; 3] = [Phase::Parked, Phase::Driving, Phase::Charging];

    fn at(step: u64) -> Self {
        Self::CYCLE[(step % Self::CYCLE.len() as u64) as usize]
    }
}

/// Battery state of charge for a step: drains while driving, refills while charging
fn battery_level(step: u64) -> f64 {
    let swing = (step % 20) as f64;
    (62.0 + swing * 0.9 - (step % 7) as f64 * 0.4).clamp(5.0, 100.0)
}

/// Raw value for one field, `None` for fields the demo vehicle never reports
fn sample(field: &str, phase: Phase, step: u64) -> Option<Value> {
    let parked = phase == Phase::Parked;
    let driving = phase == Phase::Driving;
    let charging = phase == Phase::Charging;

    let value = match field {
        // === Battery and charging ===
        "batteryLevel" => json!(battery_level(step)),
        "batteryLimit" => json!(85),
        "batteryCapacity" => json!(131.2),
        "batteryHvThermalEvent" => json!("off"),
        "batteryHvThermalEventPropagation" => json!("off"),
        "distanceToEmpty" => json!(battery_level(step) * 4.6),
        "rangeThreshold" => json!("vehicle_range_normal"),
        "remoteChargingAvailable" => json!(1),
        "twelveVoltBatteryHealth" => json!("NORMAL_OPERATION"),
        "chargePortState" => json!(if charging { "open" } else { "closed" }),
        "chargerState" => json!(if charging { "charging_active" } else { "charging_ready" }),
        "chargerStatus" => json!(if charging {
            "chrgr_sts_connected_charging"
        } else {
            "chrgr_sts_not_connected"
        }),
        "chargerDerateStatus" => json!("NONE"),
        "timeToEndOfCharge" => json!(if charging { 95 } else { 0 }),

        // === Drive ===
        "powerState" => json!(match phase {
            Phase::Parked => "sleep",
            Phase::Driving => "go",
            Phase::Charging => "ready",
        }),
        "gearStatus" => json!(if driving { "drive" } else { "park" }),
        "driveMode" => json!(if step % 5 == 4 { "winter" } else { "everyday" }),
        "gnssSpeed" => json!(if driving { 24.6 } else { 0.0 }),
        "gnssAltitude" => json!(212.4),
        "gnssBearing" => json!((step * 37 % 360) as f64),
        "gnssLocation" => return Some(Value::Null),
        "vehicleMileage" => json!(18_452_310 + step * 1_200),
        "brakeFluidLow" => json!("normal"),
        "wiperFluidState" => json!(if step % 4 == 3 { "low" } else { "normal" }),
        "trailerStatus" => json!("TRAILER_NOT_CONNECTED"),
        "serviceMode" => json!("off"),
        "carWashMode" => json!("off"),
        "limitedAccelCold" => json!(0),
        "limitedRegenCold" => json!(0),

        // === Cabin ===
        "cabinClimateInteriorTemperature" => json!(if parked { 14.5 } else { 21.0 }),
        "cabinClimateDriverTemperature" => json!(21.5),
        "cabinPreconditioningStatus" => json!(if charging { "active" } else { "undefined" }),
        "cabinPreconditioningType" => json!("none"),
        "defrostDefogStatus" => json!("Off"),
        "petModeStatus" => json!("Off"),
        "petModeTemperatureStatus" => json!("default"),
        "steeringWheelHeat" => json!(if driving { "Level_1" } else { "Off" }),

        // === Gear Guard ===
        "alarmSoundStatus" => json!("false"),
        "gearGuardLocked" => json!(if parked { "locked" } else { "unlocked" }),
        "gearGuardVideoMode" => json!("away_from_home"),
        "gearGuardVideoStatus" => json!(if parked { "engaged" } else { "enabled" }),
        "gearGuardVideoTermsAccepted" => json!("terms_accepted"),

        // === Software updates ===
        "otaCurrentVersion" => json!("2024.03.1"),
        "otaCurrentVersionYear" => json!(2024),
        "otaCurrentVersionWeek" => json!(3),
        "otaCurrentVersionNumber" => json!(1),
        "otaCurrentVersionGitHash" => json!("4f8d2c1"),
        "otaAvailableVersion" => json!("2024.07.0"),
        "otaAvailableVersionYear" => json!(2024),
        "otaAvailableVersionWeek" => json!(7),
        "otaAvailableVersionNumber" => json!(0),
        "otaAvailableVersionGitHash" => json!("a91e0b7"),
        "otaStatus" => json!(if charging { "ready_to_install" } else { "idle" }),
        "otaCurrentStatus" => json!("install_success"),
        "otaInstallReady" => json!(if charging { "ota_ready" } else { "ota_not_ready" }),
        "otaInstallType" => json!("Convenience"),
        "otaDownloadProgress" => json!(100),
        "otaInstallProgress" => json!(0),
        "otaInstallDuration" => json!(25),
        "otaInstallTime" => json!(0),

        // === Live charging session ===
        "currentCurrency" | "currentPrice" | "kilometersChargedPerHour" | "power"
        | "rangeAddedThisSession" | "startTime" | "timeElapsed" | "totalChargedEnergy"
            if !charging =>
        {
            return None
        }
        "currentCurrency" => json!("USD"),
        "currentPrice" => json!(4.12),
        "kilometersChargedPerHour" => json!(52),
        "power" => json!(11.5),
        "rangeAddedThisSession" => json!(18 + step),
        "startTime" => json!("2024-05-01T18:00:00.000Z"),
        "timeElapsed" => json!(1_500 + step * 60),
        "totalChargedEnergy" => json!(6.7),

        _ => return field_family(field, phase, step),
    };

    Some(value)
}

/// Fields that come in per-corner or per-closure families
fn field_family(field: &str, phase: Phase, step: u64) -> Option<Value> {
    let parked = phase == Phase::Parked;

    let value = if field.starts_with("tirePressureStatusValid") {
        json!("valid")
    } else if field.starts_with("tirePressureStatus") {
        json!("OK")
    } else if field.starts_with("tirePressure") {
        // Rear right sensor drops out every few steps
        if field.ends_with("RearRight") && step % 6 == 5 {
            json!("signal_not_available")
        } else {
            json!(if field.contains("Front") { 3.1 } else { 3.2 })
        }
    } else if field.ends_with("Locked") {
        json!(if parked { "locked" } else { "unlocked" })
    } else if field.ends_with("Calibrated") {
        json!("Calibrated")
    } else if field.ends_with("NextAction") {
        json!("close")
    } else if field.ends_with("Closed") {
        // Frunk left open while charging, everything else shut
        let open = phase == Phase::Charging && field == "closureFrunkClosed";
        json!(if open { "open" } else { "closed" })
    } else if field.ends_with("Heat") || field.ends_with("Vent") {
        json!(if phase == Phase::Driving && field.starts_with("seatFront") {
            "Level_2"
        } else {
            "Off"
        })
    } else if field.starts_with("btm") {
        json!("NO_FAILURE")
    } else {
        return None;
    };

    Some(value)
}

// =============================================================================
// Source
// =============================================================================

/// Demo vehicle producing synthetic state snapshots
pub struct DemoVehicle {
    step: u64,
}

impl DemoVehicle {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    /// Phase the next fetch will report
    pub fn phase(&self) -> Phase {
        Phase::at(self.step)
    }
}

impl Default for DemoVehicle {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleStateSource for DemoVehicle {
    fn name(&self) -> &str {
        "Demo"
    }

    fn fetch(&mut self, fields: &HashSet<&'static str>) -> Result<Option<VehicleState>> {
        let phase = self.phase();
        let step = self.step;
        let now = Utc::now();

        let mut state = VehicleState::new();
        for field in fields {
            if let Some(value) = sample(field, phase, step) {
                state.insert(field, FieldValue::new(value).at(now));
            }
        }

        self.step = self.step.wrapping_add(1);
        Ok(Some(state))
    }
}
