//! Units of measurement reported by the vehicle
//!
//! Every unit serializes as the symbol the host platform recognizes, so a
//! descriptor can be handed over as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit attached to a measurement sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Percentage (0 to 100)
    #[serde(rename = "%")]
    Percent,

    /// Degrees Celsius
    #[serde(rename = "°C")]
    Celsius,

    /// Meters
    #[serde(rename = "m")]
    Meters,

    /// Kilometers
    #[serde(rename = "km")]
    Kilometers,

    /// Miles
    #[serde(rename = "mi")]
    Miles,

    /// Kilowatt hours (energy storage)
    #[serde(rename = "kWh")]
    KilowattHours,

    /// Angular degrees (bearing)
    #[serde(rename = "°")]
    Degrees,

    /// Meters per second
    #[serde(rename = "m/s")]
    MetersPerSecond,

    /// Bar (tire pressure)
    #[serde(rename = "bar")]
    Bar,

    /// Minutes (durations)
    #[serde(rename = "min")]
    Minutes,
}

impl Unit {
    /// Symbol shown next to the value
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Celsius => "°C",
            Unit::Meters => "m",
            Unit::Kilometers => "km",
            Unit::Miles => "mi",
            Unit::KilowattHours => "kWh",
            Unit::Degrees => "°",
            Unit::MetersPerSecond => "m/s",
            Unit::Bar => "bar",
            Unit::Minutes => "min",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Unit::Celsius).unwrap(), "\"°C\"");
        assert_eq!(serde_json::to_string(&Unit::KilowattHours).unwrap(), "\"kWh\"");
    }

    #[test]
    fn test_unit_display_matches_serde() {
        for unit in [Unit::Percent, Unit::Bar, Unit::MetersPerSecond, Unit::Minutes] {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit));
        }
    }
}
