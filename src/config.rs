//! Process configuration read from the environment (and `.env` via dotenvy in the binary).

use crate::error::ConfigError;
use crate::routes::DEFAULT_BODY_LIMIT;
use std::str::FromStr;

/// Which record store backs the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::Invalid {
                key: "STORE_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub store_backend: StoreBackend,
    pub bind_addr: String,
    pub max_connections: u32,
    pub body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: "postgres://localhost/students".into(),
            store_backend: StoreBackend::Postgres,
            bind_addr: "0.0.0.0:3000".into(),
            max_connections: 5,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();
        if let Some(v) = lookup("DATABASE_URL") {
            config.database_url = v;
        }
        if let Some(v) = lookup("STORE_BACKEND") {
            config.store_backend = v.parse()?;
        }
        if let Some(v) = lookup("BIND_ADDR") {
            config.bind_addr = v;
        }
        if let Some(v) = lookup("DB_MAX_CONNECTIONS") {
            config.max_connections = parse_number("DB_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = lookup("BODY_LIMIT_BYTES") {
            config.body_limit = parse_number("BODY_LIMIT_BYTES", &v)?;
        }
        Ok(config)
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.body_limit, DEFAULT_BODY_LIMIT);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STORE_BACKEND", "Memory"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("BODY_LIMIT_BYTES", "1024"),
        ]))
        .unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.body_limit, 1024);
    }

    #[test]
    fn rejects_bad_values() {
        let err = AppConfig::from_lookup(lookup(&[("STORE_BACKEND", "redis")])).unwrap_err();
        assert!(err.to_string().contains("STORE_BACKEND"));
        assert!(AppConfig::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "many")])).is_err());
    }
}
