// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const ENV_BIND_ADDR: &str = "ANCHOR_BIND_ADDR";
pub const ENV_CONSENSUS_ENDPOINT: &str = "ANCHOR_CONSENSUS_ENDPOINT";
pub const ENV_BROADCAST_TIMEOUT_SECS: &str = "ANCHOR_BROADCAST_TIMEOUT_SECS";
pub const ENV_MAX_BODY_BYTES: &str = "ANCHOR_MAX_BODY_BYTES";
pub const ENV_STRICT_ENCODING: &str = "ANCHOR_STRICT_ENCODING";

#[derive(Error, Debug, PartialEq, Eq)]
#[error("{var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the consensus node's RPC interface.
    pub consensus_endpoint: String,
    /// Upper bound on a single broadcast, including reading the response body.
    pub broadcast_timeout: Duration,
    pub max_body_bytes: usize,
    /// Abort with 500 when encoding fails instead of broadcasting empty bytes.
    pub strict_encoding: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            consensus_endpoint: "http://127.0.0.1:26657".to_string(),
            broadcast_timeout: Duration::from_secs(30),
            max_body_bytes: 64 * 1024,
            strict_encoding: false,
        }
    }
}

impl NodeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(v) = lookup(ENV_BIND_ADDR) {
            cfg.bind_addr = v.parse().map_err(|e| invalid(ENV_BIND_ADDR, e))?;
        }
        if let Some(v) = lookup(ENV_CONSENSUS_ENDPOINT) {
            cfg.consensus_endpoint = parse_endpoint(&v)?;
        }
        if let Some(v) = lookup(ENV_BROADCAST_TIMEOUT_SECS) {
            let secs: u64 = v.parse().map_err(|e| invalid(ENV_BROADCAST_TIMEOUT_SECS, e))?;
            if secs == 0 {
                return Err(invalid(ENV_BROADCAST_TIMEOUT_SECS, "must be at least 1"));
            }
            cfg.broadcast_timeout = Duration::from_secs(secs);
        }
        if let Some(v) = lookup(ENV_MAX_BODY_BYTES) {
            cfg.max_body_bytes = v.parse().map_err(|e| invalid(ENV_MAX_BODY_BYTES, e))?;
        }
        if let Some(v) = lookup(ENV_STRICT_ENCODING) {
            cfg.strict_encoding = parse_bool(&v).ok_or_else(|| {
                invalid(ENV_STRICT_ENCODING, format!("expected true/false, got {v:?}"))
            })?;
        }

        Ok(cfg)
    }
}

fn invalid(var: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError {
        var,
        reason: reason.to_string(),
    }
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    let url = reqwest::Url::parse(raw).map_err(|e| invalid(ENV_CONSENSUS_ENDPOINT, e))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => Err(invalid(
            ENV_CONSENSUS_ENDPOINT,
            format!("unsupported scheme {other}"),
        )),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
