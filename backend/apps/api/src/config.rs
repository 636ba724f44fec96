//! Server Configuration
//!
//! Process-level settings read from the environment (after `.env` is loaded).

use anyhow::Context;
use axum::http::HeaderValue;
use multiplication::FactorRange;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL URL; attempts are kept in memory when unset
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// Allowed CORS origins
    pub frontend_origins: Vec<HeaderValue>,
    /// Range random factors are drawn from
    pub factor_range: FactorRange,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid BIND_ADDR: {bind_addr}"))?;

        let frontend_origins = parse_origins(
            &lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let factor_range = parse_factor_range(&lookup)?;

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            factor_range,
        })
    }
}

/// `FACTOR_MIN` / `FACTOR_MAX`, each falling back to the two-digit default
fn parse_factor_range<F>(lookup: &F) -> anyhow::Result<FactorRange>
where
    F: Fn(&str) -> Option<String>,
{
    let bound = |key: &str, default: i32| -> anyhow::Result<i32> {
        match lookup(key) {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .with_context(|| format!("Invalid {key}: {raw}")),
            None => Ok(default),
        }
    };

    let min = bound("FACTOR_MIN", FactorRange::DEFAULT.min())?;
    let max = bound("FACTOR_MAX", FactorRange::DEFAULT.max())?;

    FactorRange::new(min, max)
        .with_context(|| format!("Invalid factor range {min}..={max}: need 1 <= min <= max"))
}

/// Comma-separated origins; unparsable entries are skipped
fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert!(config.database_url.is_none());
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.factor_range, FactorRange::DEFAULT);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/multiplication"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("FRONTEND_ORIGINS", "https://game.example.com, ,https://admin.example.com"),
            ("FACTOR_MIN", "2"),
            ("FACTOR_MAX", "9"),
        ]))
        .unwrap();

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/multiplication")
        );
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.factor_range.min(), 2);
        assert_eq!(config.factor_range.max(), 9);
    }

    #[test]
    fn test_blank_database_url_means_in_memory() {
        let config = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "not-an-addr")])).is_err());
        assert!(
            ServerConfig::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "many")])).is_err()
        );
        assert!(ServerConfig::from_lookup(lookup(&[("FACTOR_MIN", "ten")])).is_err());
    }

    #[test]
    fn test_empty_or_non_positive_factor_range_is_rejected() {
        assert!(
            ServerConfig::from_lookup(lookup(&[("FACTOR_MIN", "50"), ("FACTOR_MAX", "20")]))
                .is_err()
        );
        assert!(ServerConfig::from_lookup(lookup(&[("FACTOR_MIN", "0")])).is_err());

        let config = ServerConfig::from_lookup(lookup(&[("FACTOR_MAX", "11")])).unwrap();
        assert_eq!(config.factor_range.as_range(), 11..=11);
    }
}
