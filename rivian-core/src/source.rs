//! Vehicle state source trait definition

use crate::state::VehicleState;
use anyhow::Result;
use std::collections::HashSet;

/// Anything that can produce vehicle state snapshots
///
/// The cloud API client lives outside this workspace; it plugs in here by
/// returning the raw `field -> value` snapshot for the requested fields.
pub trait VehicleStateSource: Send + Sync {
    /// Get the name of this source (e.g., "Demo")
    fn name(&self) -> &str;

    /// Fetch the current state of the requested fields
    ///
    /// Returns:
    /// - `Ok(Some(state))` when a snapshot is available
    /// - `Ok(None)` when the vehicle has not reported yet
    /// - `Err(_)` if the fetch failed
    fn fetch(&mut self, fields: &HashSet<&'static str>) -> Result<Option<VehicleState>>;
}
