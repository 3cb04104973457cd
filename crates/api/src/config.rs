//! Process configuration read from the environment.

use std::net::SocketAddr;

use tracing::warn;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Run the catalog bootstrap at start.
    pub seed: bool,
    /// Postgres connection string; unset means in-memory stores.
    pub database_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed: true,
            database_url: None,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

impl ApiConfig {
    /// `BURGERSTREAM_BIND_ADDR`, `BURGERSTREAM_SEED` and `DATABASE_URL`;
    /// unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("BURGERSTREAM_BIND_ADDR") {
            match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => warn!(value = %raw, error = %e, default = DEFAULT_BIND_ADDR, "invalid BURGERSTREAM_BIND_ADDR; using default"),
            }
        }

        if let Some(raw) = lookup("BURGERSTREAM_SEED") {
            match parse_bool(&raw) {
                Some(seed) => config.seed = seed,
                None => warn!(value = %raw, "invalid BURGERSTREAM_SEED; seeding stays enabled"),
            }
        }

        config.database_url = lookup("DATABASE_URL")
            .map(|raw| raw.trim().to_string())
            .filter(|url| !url.is_empty());

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
