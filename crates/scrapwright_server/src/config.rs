//! Server configuration.

use derive_getters::Getters;
use scrapwright_error::ConfigError;
use scrapwright_models::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use tracing::{debug, instrument};

/// Settings for the generation server.
///
/// The provider API key is not stored here; it is read per request from
/// the variable named by `api_key_var`.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    bind_addr: String,
    /// Path of the generation endpoint
    route: String,
    /// Provider model identifier
    model: String,
    /// Provider API root
    provider_base_url: String,
    /// Environment variable holding the provider API key
    api_key_var: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            route: "/api/generate".to_string(),
            model: DEFAULT_MODEL.to_string(),
            provider_base_url: DEFAULT_BASE_URL.to_string(),
            api_key_var: "GEMINI_API_KEY".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, the TOML is invalid, or the
    /// resulting configuration fails [`ServerConfig::validate`].
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::new(format!("Invalid TOML in {}: {}", path.display(), e)))?;
        config.validate()?;
        debug!(?config, "Loaded configuration file");
        Ok(config)
    }

    /// Replace individual settings, typically from CLI flags.
    pub fn with_overrides(mut self, bind_addr: Option<String>, model: Option<String>) -> Self {
        if let Some(bind_addr) = bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(model) = model {
            self.model = model;
        }
        self
    }

    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns error if `bind_addr` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|e| ConfigError::new(format!("Invalid bind address '{}': {}", self.bind_addr, e)))
    }

    /// Check that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        if !self.route.starts_with('/') {
            return Err(ConfigError::new(format!(
                "Route must start with '/': {}",
                self.route
            )));
        }
        if self.route == "/health" {
            return Err(ConfigError::new("Route '/health' is reserved for the health check"));
        }
        if self.model.is_empty() {
            return Err(ConfigError::new("Model must not be empty"));
        }
        if self.api_key_var.is_empty() {
            return Err(ConfigError::new("API key variable name must not be empty"));
        }
        Ok(())
    }
}
