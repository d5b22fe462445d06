//! Startup configuration, read from the environment.

use std::{
    fmt::{self, Debug, Formatter},
    net::SocketAddr,
    str::FromStr,
    time::Duration,
};

use bookshelf_auth::BcryptHasher;
use thiserror::Error;

pub const DEV_JWT_SECRET: &str = "dev-secret";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {key}={value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Clone)]
pub struct AppConfig {
    /// `BOOKSHELF_BIND`
    pub bind_addr: SocketAddr,
    /// `JWT_SECRET`
    pub jwt_secret: String,
    /// `TOKEN_TTL_SECS`
    pub token_ttl: chrono::Duration,
    /// `BCRYPT_COST`
    pub bcrypt_cost: u32,
    /// `ASYNC_DELAY_MS`
    pub async_delay: Duration,
}

impl Debug for AppConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("async_delay", &self.async_delay)
            .finish_non_exhaustive()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl: chrono::Duration::hours(1),
            bcrypt_cost: BcryptHasher::DEFAULT_COST,
            async_delay: Duration::from_millis(500),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!("JWT_SECRET not set; using insecure dev default");
                defaults.jwt_secret
            }
        };

        let ttl_secs: i64 = parse(&lookup, "TOKEN_TTL_SECS")?.unwrap_or(3600);
        if ttl_secs <= 0 {
            return Err(ConfigError {
                key: "TOKEN_TTL_SECS",
                value: ttl_secs.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            bind_addr: parse(&lookup, "BOOKSHELF_BIND")?.unwrap_or(defaults.bind_addr),
            jwt_secret,
            token_ttl: chrono::Duration::seconds(ttl_secs),
            bcrypt_cost: parse(&lookup, "BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost),
            async_delay: parse(&lookup, "ASYNC_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.async_delay),
        })
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|e: T::Err| ConfigError {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.jwt_secret, DEV_JWT_SECRET);
        assert_eq!(cfg.token_ttl, chrono::Duration::hours(1));
        assert_eq!(cfg.bcrypt_cost, 10);
        assert_eq!(cfg.async_delay, Duration::from_millis(500));
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("BOOKSHELF_BIND", "127.0.0.1:8080"),
            ("JWT_SECRET", "s3cret"),
            ("TOKEN_TTL_SECS", "60"),
            ("BCRYPT_COST", "4"),
            ("ASYNC_DELAY_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(cfg.jwt_secret, "s3cret");
        assert_eq!(cfg.token_ttl, chrono::Duration::seconds(60));
        assert_eq!(cfg.bcrypt_cost, 4);
        assert_eq!(cfg.async_delay, Duration::ZERO);
    }

    #[test]
    fn rejects_garbage() {
        let err = AppConfig::from_lookup(lookup(&[("BCRYPT_COST", "ten")])).unwrap_err();
        assert_eq!(err.key, "BCRYPT_COST");

        let err = AppConfig::from_lookup(lookup(&[("TOKEN_TTL_SECS", "0")])).unwrap_err();
        assert_eq!(err.key, "TOKEN_TTL_SECS");
    }

    #[test]
    fn debug_hides_secret() {
        let cfg = AppConfig {
            jwt_secret: "hunter2".into(),
            ..AppConfig::default()
        };
        assert!(!format!("{cfg:?}").contains("hunter2"));
    }
}
