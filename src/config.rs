// src/config.rs
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use crate::errors::{PlsError, Result};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BIND_HOST: &str = "127.0.0.1";
pub const DEFAULT_BIND_PORT: u16 = 8080;

/// High-level application configuration.
///
/// Values come from an optional TOML file (pointed to by `PLS_CONFIG`) and
/// are then overridden by environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the summarization API, without a trailing slash.
    pub api_base: String,
    pub bind_host: String,
    pub bind_port: u16,
    /// Connect timeout handed to the HTTP client. `None` keeps the transport default.
    pub connect_timeout: Option<Duration>,
}

/// Shape of the optional TOML config file. Every key may be omitted.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub bind_host: Option<String>,
    #[serde(default)]
    pub bind_port: Option<u16>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            bind_host: DEFAULT_BIND_HOST.to_string(),
            bind_port: DEFAULT_BIND_PORT,
            connect_timeout: None,
        }
    }
}

impl FileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match var("PLS_CONFIG") {
            Some(path) => {
                log::info!("Reading config file {}", path);
                FileConfig::load(&path)?
            }
            None => FileConfig::default(),
        };

        let mut config = Self::default().merge(file);

        if let Some(api_base) = var("PLS_API_BASE") {
            config.api_base = api_base;
        }
        if let Some(host) = var("PLS_BIND_HOST") {
            config.bind_host = host;
        }
        if let Some(port) = var("PLS_BIND_PORT") {
            config.bind_port = port.trim().parse().map_err(|_| {
                PlsError::Config(format!("PLS_BIND_PORT must be a port number, got '{}'", port))
            })?;
        }
        if let Some(secs) = var("PLS_CONNECT_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                PlsError::Config(format!("PLS_CONNECT_TIMEOUT_SECS must be whole seconds, got '{}'", secs))
            })?;
            config.connect_timeout = Some(Duration::from_secs(secs));
        }

        config.validate()
    }

    fn merge(mut self, file: FileConfig) -> Self {
        if let Some(api_base) = file.api_base {
            self.api_base = api_base;
        }
        if let Some(host) = file.bind_host {
            self.bind_host = host;
        }
        if let Some(port) = file.bind_port {
            self.bind_port = port;
        }
        if let Some(secs) = file.connect_timeout_secs {
            self.connect_timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    fn validate(mut self) -> Result<Self> {
        let trimmed = self.api_base.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(PlsError::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                self.api_base
            )));
        }
        self.api_base = trimmed.to_string();
        Ok(self)
    }

    /// The address the page server binds to.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.bind_host.clone(), self.bind_port)
    }
}
