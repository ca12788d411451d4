use std::env;

use crate::errors::AppError;

const DATABASE_URL: &str = "DATABASE_URL";
const SEED_MAX_CONNECTIONS: &str = "SEED_MAX_CONNECTIONS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or(AppError::MissingConfig(DATABASE_URL))?;
        let max_connections = match lookup(SEED_MAX_CONNECTIONS) {
            None => 1,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::InvalidConfig {
                        key: SEED_MAX_CONNECTIONS,
                        value,
                    });
                }
            },
        };
        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite://app.db")]))
            .expect("failed to read config");
        assert_eq!(
            config,
            Config {
                database_url: "sqlite://app.db".to_string(),
                max_connections: 1,
            }
        );
    }

    #[test]
    fn test_max_connections_override() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://app.db"),
            ("SEED_MAX_CONNECTIONS", "4"),
        ]))
        .expect("failed to read config");
        assert_eq!(config.max_connections, 4);
    }

    #[test]
    fn test_missing_database_url() {
        let err = Config::from_lookup(lookup(&[])).expect_err("config without url");
        assert!(matches!(err, AppError::MissingConfig("DATABASE_URL")));

        let err = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")]))
            .expect_err("config with blank url");
        assert_eq!(err.code(), "MissingConfig");
    }

    #[test]
    fn test_invalid_max_connections() {
        for bad in ["zero", "0", "-1"] {
            let err = Config::from_lookup(lookup(&[
                ("DATABASE_URL", "sqlite://app.db"),
                ("SEED_MAX_CONNECTIONS", bad),
            ]))
            .expect_err("accepted invalid pool size");
            assert_eq!(err.code(), "InvalidConfig");
        }
    }
}
