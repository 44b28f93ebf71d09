//! Dev server settings, read from the environment.

use std::net::IpAddr;

use thiserror::Error;

pub const HOST_VAR: &str = "WIDGET_HOST";
pub const PORT_VAR: &str = "WIDGET_PORT";
pub const OPEN_BROWSER_VAR: &str = "WIDGET_OPEN_BROWSER";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostConfigError {
    #[error("{var} must be an IP address, got `{value}`")]
    Host { var: &'static str, value: String },
    #[error("{var} must be a port number, got `{value}`")]
    Port { var: &'static str, value: String },
    #[error("{var} must be true or false, got `{value}`")]
    Flag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 5000,
            open_browser: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from `lookup`; unset or blank variables keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostConfigError> {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(value) = get(HOST_VAR) {
            config.host = value.parse().map_err(|_| HostConfigError::Host {
                var: HOST_VAR,
                value,
            })?;
        }
        if let Some(value) = get(PORT_VAR) {
            config.port = value.parse().map_err(|_| HostConfigError::Port {
                var: PORT_VAR,
                value,
            })?;
        }
        if let Some(value) = get(OPEN_BROWSER_VAR) {
            config.open_browser = match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(HostConfigError::Flag {
                        var: OPEN_BROWSER_VAR,
                        value,
                    })
                }
            };
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
