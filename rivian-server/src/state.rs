//! Application state management

use anyhow::Result;
use rivian_core::{Registry, Resolver, VehicleConfig, VehicleState, VehicleStateSource};
use rivian_entities::DemoVehicle;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Descriptor registry, built once at startup
    pub registry: Arc<Registry>,

    /// The vehicle this server reports on
    pub vehicle: VehicleConfig,

    /// Where vehicle state snapshots come from
    pub source: Arc<RwLock<Box<dyn VehicleStateSource>>>,
}

impl AppState {
    pub fn new(registry: Registry, vehicle: VehicleConfig, source: Box<dyn VehicleStateSource>) -> Self {
        Self {
            registry: Arc::new(registry),
            vehicle,
            source: Arc::new(RwLock::new(source)),
        }
    }

    /// State backed by the demo vehicle
    pub fn demo(registry: Registry, vehicle: VehicleConfig) -> Self {
        Self::new(registry, vehicle, Box::new(DemoVehicle::new()))
    }

    /// Resolver for the configured trim
    pub fn resolver(&self) -> Resolver<'_> {
        self.registry.resolver(self.vehicle.trim)
    }

    /// Fetch one snapshot of every field the configured vehicle polls
    pub async fn fetch(&self) -> Result<Option<VehicleState>> {
        self.fetch_fields(&self.registry.api_fields(&self.vehicle)).await
    }

    pub async fn fetch_fields(&self, fields: &HashSet<&'static str>) -> Result<Option<VehicleState>> {
        let mut source = self.source.write().await;
        source.fetch(fields)
    }
}
