//! REST API routes

use crate::config::parse_flag;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use rivian_core::{
    BinarySensorDescription, ResolvedEntity, SensorDescription, Trim, VehicleState,
};
use rivian_entities::fields::CHARGING_SESSION_FIELDS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tower_http::cors::CorsLayer;

type ApiError = (StatusCode, String);

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/source", get(source_info))
        .route("/api/entities", get(list_entities))
        .route("/api/fields", get(list_fields))
        .route("/api/resolve", post(resolve_state))
        .route("/api/state", get(current_state))
        .route("/api/state/:key", get(current_entity))
        .route("/api/charging_session", get(charging_session))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct TrimQuery {
    trim: Option<String>,
}

impl TrimQuery {
    /// Requested trim, falling back to the configured one
    fn resolve(&self, state: &AppState) -> Result<Trim, ApiError> {
        match &self.trim {
            Some(trim) => trim
                .parse()
                .map_err(|e: rivian_core::ParseTrimError| (StatusCode::BAD_REQUEST, e.to_string())),
            None => Ok(state.vehicle.trim),
        }
    }
}

// === Source Endpoint ===

#[derive(Serialize)]
struct SourceInfo {
    name: String,
    trim: Trim,
    exclude_tire_pressure: bool,
}

async fn source_info(State(state): State<AppState>) -> Json<SourceInfo> {
    let source = state.source.read().await;

    Json(SourceInfo {
        name: source.name().to_string(),
        trim: state.vehicle.trim,
        exclude_tire_pressure: state.vehicle.exclude_tire_pressure,
    })
}

// === Descriptor Endpoints ===

#[derive(Serialize)]
struct EntityList {
    trim: Trim,
    sensors: Vec<&'static SensorDescription>,
    binary_sensors: Vec<&'static BinarySensorDescription>,
}

async fn list_entities(
    State(state): State<AppState>,
    Query(query): Query<TrimQuery>,
) -> Result<Json<EntityList>, ApiError> {
    let trim = query.resolve(&state)?;

    Ok(Json(EntityList {
        trim,
        sensors: state.registry.sensors(trim).collect(),
        binary_sensors: state.registry.binary_sensors(trim).collect(),
    }))
}

#[derive(Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum FieldSet {
    #[default]
    Vehicle,
    ChargingSession,
}

#[derive(Deserialize)]
struct FieldsQuery {
    #[serde(default)]
    set: FieldSet,
    exclude_tire_pressure: Option<String>,
}

async fn list_fields(
    State(state): State<AppState>,
    Query(query): Query<FieldsQuery>,
) -> Result<Json<Vec<&'static str>>, ApiError> {
    let mut vehicle = state.vehicle;
    if let Some(value) = query.exclude_tire_pressure {
        vehicle.exclude_tire_pressure = parse_flag(&value).ok_or((
            StatusCode::BAD_REQUEST,
            format!("Invalid exclude_tire_pressure `{}`", value),
        ))?;
    }

    let mut fields: Vec<&'static str> = match query.set {
        FieldSet::Vehicle => state.registry.api_fields(&vehicle).into_iter().collect(),
        FieldSet::ChargingSession => CHARGING_SESSION_FIELDS.to_vec(),
    };
    fields.sort_unstable();
    Ok(Json(fields))
}

// === Resolution Endpoints ===

async fn resolve_state(
    State(state): State<AppState>,
    Query(query): Query<TrimQuery>,
    Json(snapshot): Json<VehicleState>,
) -> Result<Json<Vec<ResolvedEntity>>, ApiError> {
    let trim = query.resolve(&state)?;
    Ok(Json(state.registry.resolver(trim).resolve_all(&snapshot)))
}

#[derive(Serialize)]
struct StateResponse {
    source: String,
    trim: Trim,
    fetched_at: DateTime<Utc>,
    entities: Vec<ResolvedEntity>,
}

/// Map a source answer to a snapshot or an HTTP error
fn into_snapshot(fetched: anyhow::Result<Option<VehicleState>>) -> Result<VehicleState, ApiError> {
    match fetched {
        Ok(Some(snapshot)) => Ok(snapshot),
        Ok(None) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Vehicle has not reported yet".to_string(),
        )),
        Err(e) => {
            tracing::error!("Failed to fetch vehicle state: {}", e);
            Err((StatusCode::BAD_GATEWAY, format!("Failed to fetch vehicle state: {}", e)))
        }
    }
}

async fn fetch_snapshot(state: &AppState) -> Result<VehicleState, ApiError> {
    into_snapshot(state.fetch().await)
}

async fn current_state(State(state): State<AppState>) -> Result<Json<StateResponse>, ApiError> {
    let snapshot = fetch_snapshot(&state).await?;
    let source = state.source.read().await.name().to_string();

    Ok(Json(StateResponse {
        source,
        trim: state.vehicle.trim,
        fetched_at: Utc::now(),
        entities: state.resolver().resolve_all(&snapshot),
    }))
}

async fn current_entity(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ResolvedEntity>, ApiError> {
    let trim = state.vehicle.trim;
    let key = state.registry.current_key(trim, &key).ok_or((
        StatusCode::NOT_FOUND,
        format!("No entity `{}` for trim {}", key, trim),
    ))?;

    let snapshot = fetch_snapshot(&state).await?;
    state
        .resolver()
        .entity(key, &snapshot)
        .map(Json)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))
}

// === Charging Session Endpoint ===

/// Raw live charging session values; 503 while the vehicle is not charging
async fn charging_session(State(state): State<AppState>) -> Result<Json<VehicleState>, ApiError> {
    let fields: HashSet<&'static str> = CHARGING_SESSION_FIELDS.iter().copied().collect();
    let session = into_snapshot(state.fetch_fields(&fields).await)?;
    if session.is_empty() {
        return Err((StatusCode::SERVICE_UNAVAILABLE, "No active charging session".to_string()));
    }
    Ok(Json(session))
}
