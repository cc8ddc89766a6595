//! Server configuration from the environment

use rivian_core::{ParseTrimError, Trim, VehicleConfig};
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND: &str = "0.0.0.0:9100";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid RIVIAN_BIND `{value}`: {source}")]
    Bind {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid RIVIAN_TRIM: {0}")]
    Trim(#[from] ParseTrimError),

    #[error("invalid RIVIAN_EXCLUDE_TPMS `{0}`, expected true/false/1/0/yes/no")]
    Flag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub vehicle: VehicleConfig,

    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; unset variables take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_value = lookup("RIVIAN_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_value
            .trim()
            .parse()
            .map_err(|source| ConfigError::Bind {
                value: bind_value.clone(),
                source,
            })?;

        let trim = match lookup("RIVIAN_TRIM") {
            Some(value) => value.parse()?,
            None => Trim::R1,
        };

        let exclude_tire_pressure = match lookup("RIVIAN_EXCLUDE_TPMS") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Flag(value))?,
            None => false,
        };

        let log_filter = lookup("RIVIAN_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind,
            vehicle: VehicleConfig {
                trim,
                exclude_tire_pressure,
            },
            log_filter,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 9100)),
            vehicle: VehicleConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
