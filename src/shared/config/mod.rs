//! Application configuration module
//!
//! Provides the server configuration and its environment loader.
//!
//! | Variable | Default | |
//! |---|---|---|
//! | `HOST` | `0.0.0.0` | bind address |
//! | `PORT` | `8000` | bind port |
//! | `DATABASE_URL` | unset | PostgreSQL URL, in-memory store when unset |
//! | `COLLAB_KEEP_ALIVE_SECS` | `15` | SSE keep-alive interval |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_KEEP_ALIVE_SECS: u64 = 15;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub host: IpAddr,
    /// Port the HTTP server binds to
    pub port: u16,
    /// Document database URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Interval between SSE keep-alive comments on collaboration streams
    pub keep_alive: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_url: None,
            keep_alive: Duration::from_secs(DEFAULT_KEEP_ALIVE_SECS),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(host) = lookup("HOST") {
            let host = host
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidValue { key: "HOST", value: host })?;
            builder = builder.host(host);
        }

        if let Some(port) = lookup("PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port })?;
            builder = builder.port(port);
        }

        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            builder = builder.database_url(url);
        }

        if let Some(secs) = lookup("COLLAB_KEEP_ALIVE_SECS") {
            let secs = secs.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: "COLLAB_KEEP_ALIVE_SECS",
                value: secs,
            })?;
            builder = builder.keep_alive(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Socket address to bind the HTTP server to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keep_alive.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "COLLAB_KEEP_ALIVE_SECS",
                value: "0".to_string(),
            });
        }
        if let Some(url) = &self.database_url {
            if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    host: Option<IpAddr>,
    port: Option<u16>,
    database_url: Option<String>,
    keep_alive: Option<Duration>,
}

impl AppConfigBuilder {
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn keep_alive(mut self, interval: Duration) -> Self {
        self.keep_alive = Some(interval);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            database_url: self.database_url,
            keep_alive: self.keep_alive.unwrap_or(defaults.keep_alive),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
