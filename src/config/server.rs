//! HTTP server settings for the team genius binary.

use http::HeaderValue;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest request timeout accepted.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Listener, middleware and logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated browser origins. Unset means any origin.
    pub cors_origins: Option<String>,
}

/// Deployment environment. Production switches logs to JSON lines.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// Address for the TCP listener.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Allowed CORS origins as header values; empty when any origin is allowed.
    ///
    /// # Errors
    ///
    /// `InvalidCorsOrigin` for an entry that is not a valid header value.
    pub fn cors_origins(&self) -> Result<Vec<HeaderValue>, ValidationError> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Ok(Vec::new());
        };

        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ValidationError::InvalidCorsOrigin(origin.to_string()))
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.cors_origins()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,team_genius=debug,tower_http=debug".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.log_level.contains("team_genius=debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unparseable_host_is_rejected() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidHost(_))
        ));
    }

    #[test]
    fn zero_port_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPort)));
    }

    #[test]
    fn timeout_must_be_between_one_and_max() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
        }
    }

    #[test]
    fn production_environment() {
        let config = ServerConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(config.is_production());
        assert!(!ServerConfig::default().is_production());
    }

    #[test]
    fn cors_origins_are_trimmed_and_skip_blanks() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173, ,http://localhost:3000 ".to_string()),
            ..Default::default()
        };
        let origins = config.cors_origins().unwrap();
        assert_eq!(
            origins,
            vec![
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("http://localhost:3000"),
            ]
        );
    }

    #[test]
    fn unset_cors_origins_allow_any() {
        assert!(ServerConfig::default().cors_origins().unwrap().is_empty());
    }

    #[test]
    fn invalid_cors_origin_fails_validation() {
        let config = ServerConfig {
            cors_origins: Some("http://ok.example,bad\norigin".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCorsOrigin(origin)) if origin == "bad\norigin"
        ));
    }
}
