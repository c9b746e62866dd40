//! Server configuration, built from environment variables.

use crate::error::ConfigError;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind, e.g. "0.0.0.0".
    pub bind: String,
    /// TCP port for the chat API.
    pub port: u16,
}

impl ServerConfig {
    /// Build config from `FLOWBOT_BIND` / `FLOWBOT_PORT`.
    ///
    /// Missing variables fall back to defaults; a set-but-unparsable port
    /// is a hard error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = std::env::var("FLOWBOT_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("FLOWBOT_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "FLOWBOT_PORT".to_string(),
                message: format!("expected a port number, got {raw:?}"),
            })?,
            Err(_) => 5000,
        };

        Ok(Self { bind, port })
    }

    /// Socket address string for the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5000");
    }

    #[test]
    fn custom_addr() {
        let config = ServerConfig {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }
}
