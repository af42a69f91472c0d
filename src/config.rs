use anyhow::Context;
use std::{env, str::FromStr};
use tracing::Level;

const DEFAULT_DATABASE_URL: &str = "booking.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_POOL_SIZE: u32 = 8;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub pool_size: u32,
    pub log_level: Level,
}

impl Settings {
    /// Reads settings from the process environment, after `.env` has been
    /// loaded by the caller.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(size) => parse_var("DB_POOL_SIZE", &size)?,
            None => DEFAULT_POOL_SIZE,
        };
        anyhow::ensure!(pool_size > 0, "DB_POOL_SIZE must be at least 1");
        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => parse_var("LOG_LEVEL", &level)?,
            None => Level::INFO,
        };

        Ok(Self {
            database_url,
            bind_addr,
            pool_size,
            log_level,
        })
    }
}

fn parse_var<T>(key: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value '{}' for {}", value, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, "booking.db");
        assert_eq!(s.bind_addr, "127.0.0.1:8080");
        assert_eq!(s.pool_size, 8);
        assert_eq!(s.log_level, Level::INFO);
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("DATABASE_URL", "/tmp/test.db"),
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("DB_POOL_SIZE", "2"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(s.database_url, "/tmp/test.db");
        assert_eq!(s.bind_addr, "0.0.0.0:9000");
        assert_eq!(s.pool_size, 2);
        assert_eq!(s.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(settings(&[("DB_POOL_SIZE", "many")]).is_err());
        assert!(settings(&[("DB_POOL_SIZE", "0")]).is_err());
        assert!(settings(&[("LOG_LEVEL", "loud")]).is_err());
    }
}
