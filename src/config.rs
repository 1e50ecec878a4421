//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::AppError;
use crate::resources::IdPolicy;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString, Default)]
#[serde(try_from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl TryFrom<String> for LogFormat {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface to bind the HTTP server on.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Name reported by the health endpoint.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// What to do with non-numeric path ids: `coerce` or `reject`.
    #[serde(default)]
    pub id_policy: IdPolicy,

    // === Observability ===
    /// Port for the Prometheus exporter. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    /// Log output format: `pretty` or `json`.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_service_name() -> String {
    "gin-app".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            service_name: default_service_name(),
            id_policy: IdPolicy::default(),
            metrics_port: None,
            log_format: LogFormat::default(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.service_name.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "SERVICE_NAME must not be empty".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(AppError::InvalidConfig("PORT must be non-zero".to_string()));
        }

        if self.metrics_port == Some(self.port) {
            return Err(AppError::InvalidConfig(
                "METRICS_PORT must differ from PORT".to_string(),
            ));
        }

        self.ip()?;

        Ok(())
    }

    /// Parsed bind interface.
    pub fn ip(&self) -> Result<IpAddr, AppError> {
        self.host
            .parse()
            .map_err(|_| AppError::InvalidConfig(format!("HOST is not an IP address: {}", self.host)))
    }

    /// Socket address of the HTTP server.
    pub fn http_addr(&self) -> Result<SocketAddr, AppError> {
        Ok(SocketAddr::new(self.ip()?, self.port))
    }

    /// Socket address of the Prometheus exporter, if enabled.
    pub fn metrics_addr(&self) -> Result<Option<SocketAddr>, AppError> {
        let ip = self.ip()?;
        Ok(self.metrics_port.map(|port| SocketAddr::new(ip, port)))
    }
}
