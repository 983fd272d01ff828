use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ENVIRONMENT, DEFAULT_HOST, DEFAULT_PORT, Environment,
    MIN_PORT,
};

use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// development, test or production
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            environment: String::from(DEFAULT_ENVIRONMENT),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        Environment::from_str(&self.environment)?;

        Ok(())
    }

    /// Parsed environment. Unknown names fall back to development; call
    /// `validate()` first to reject them.
    pub fn environment(&self) -> Environment {
        Environment::from_str(&self.environment).unwrap_or_default()
    }
}
