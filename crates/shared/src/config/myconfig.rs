use crate::errors::ConfigError;

pub const DATABASE_DSN_VAR: &str = "DATABASE_DSN";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub is_dev: bool,
}

impl Config {
    /// Reads every setting up front so a bad environment stops the process
    /// before any connection attempt.
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = require_env(&lookup, DATABASE_DSN_VAR)?;

        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10u32)?;
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("") | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "RUN_MIGRATIONS".into(),
                    value: other.into(),
                });
            }
        };

        let is_dev = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            database_max_connections,
            run_migrations,
            port,
            request_timeout_secs,
            is_dev,
        })
    }
}

fn require_env<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVariable(name.to_string())),
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_dsn_fails_fast() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVariable(ref name) if name == DATABASE_DSN_VAR));
    }

    #[test]
    fn defaults_apply_when_optional_values_are_absent() {
        let config =
            Config::from_lookup(lookup_from(&[(DATABASE_DSN_VAR, "postgres://localhost/subs")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/subs");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.run_migrations);
        assert!(!config.is_dev);
    }

    #[test]
    fn invalid_values_are_reported_with_their_name() {
        let err = Config::from_lookup(lookup_from(&[
            (DATABASE_DSN_VAR, "postgres://localhost/subs"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref name, ref value } if name == "PORT" && value == "eighty")
        );

        let err = Config::from_lookup(lookup_from(&[
            (DATABASE_DSN_VAR, "postgres://localhost/subs"),
            ("RUN_MIGRATIONS", "yes"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "RUN_MIGRATIONS"));
    }

    #[test]
    fn reads_explicit_settings() {
        let config = Config::from_lookup(lookup_from(&[
            (DATABASE_DSN_VAR, "postgres://db/subs"),
            ("PORT", "9090"),
            ("RUN_MIGRATIONS", "true"),
            ("DEV_MODE", "1"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("DATABASE_MAX_CONNECTIONS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9090);
        assert!(config.run_migrations);
        assert!(config.is_dev);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.database_max_connections, 3);
    }
}
