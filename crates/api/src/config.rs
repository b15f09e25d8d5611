//! Runtime configuration, read once from the environment at startup.

use std::net::SocketAddr;

pub const BIND_ADDR_ENV: &str = "STOCKMGR_BIND_ADDR";
pub const SEED_ENV: &str = "STOCKMGR_SEED";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Start from the demo inventory instead of an empty store.
    pub seed_demo_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_demo_data: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Invalid values fall back to
    /// the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup(BIND_ADDR_ENV) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "{BIND_ADDR_ENV}={raw:?} is not a socket address; using {DEFAULT_BIND_ADDR}"
                );
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let seed_demo_data = match lookup(SEED_ENV) {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                tracing::warn!("{SEED_ENV}={raw:?} is not a boolean; seeding demo data");
                defaults.seed_demo_data
            }),
            None => defaults.seed_demo_data,
        };

        Self {
            bind_addr,
            seed_demo_data,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
