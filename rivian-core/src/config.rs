//! Per-vehicle configuration supplied by the host

use crate::model::Trim;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub trim: Trim,

    /// Skip polling and displaying the tire pressure readings
    #[serde(default)]
    pub exclude_tire_pressure: bool,
}

impl VehicleConfig {
    pub fn new(trim: Trim) -> Self {
        Self {
            trim,
            exclude_tire_pressure: false,
        }
    }
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::new(Trim::R1)
    }
}
