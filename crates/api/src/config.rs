//! Process configuration, read from the environment once at startup.

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "ITEMSERVICE_BIND_ADDR";
pub const SEED_VAR: &str = "ITEMSERVICE_SEED";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Whether bootstrap loads the demo items before serving.
    pub seed: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    key: BIND_ADDR_VAR,
                    value: raw.clone(),
                    reason: format!("{e}; expected e.g. {DEFAULT_BIND_ADDR}"),
                }
            })?;
        }

        if let Some(raw) = lookup(SEED_VAR) {
            config.seed = parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                key: SEED_VAR,
                value: raw.clone(),
                reason: "expected true/false".to_string(),
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
