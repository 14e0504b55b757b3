//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

use formpilot_client::net::api::normalize_base_url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid FORMPILOT_BIND_ADDR: {0:?}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Default copilot API base handed to browsers; empty means "page origin".
    pub api_base_url: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FORMPILOT_BIND_ADDR`: default `0.0.0.0`
    /// - `FORMPILOT_API_BASE_URL`: default empty (page origin)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("FORMPILOT_BIND_ADDR").ok().as_deref(),
            std::env::var("FORMPILOT_API_BASE_URL").ok().as_deref(),
        )
    }

    pub fn from_values(port: Option<&str>, bind_addr: Option<&str>, api_base_url: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: parse_bind_addr(bind_addr)?,
            port: parse_port(port)?,
            api_base_url: api_base_url.map(normalize_base_url).unwrap_or_default(),
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BIND_ADDR);
    value
        .parse()
        .map_err(|_| ConfigError::InvalidBindAddr(value.to_owned()))
}
