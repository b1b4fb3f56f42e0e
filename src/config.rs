//! Environment-driven configuration

use thiserror::Error;

/// Where categories are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    Postgres { database_url: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: Storage,
    pub server_address: String,
    pub server_port: u16,
    pub run_migrations: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let storage = match get("CATALOG_STORAGE", "postgres").to_lowercase().as_str() {
            "postgres" => Storage::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            "memory" => Storage::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    key: "CATALOG_STORAGE",
                    value: other.to_string(),
                });
            }
        };

        let server_address = get("SERVER_ADDRESS", "0.0.0.0");

        let port = get("SERVER_PORT", "3000");
        let server_port = port.parse().map_err(|_| ConfigError::Invalid {
            key: "SERVER_PORT",
            value: port.clone(),
        })?;

        let migrations = get("RUN_MIGRATIONS", "true");
        let run_migrations = match migrations.to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => {
                return Err(ConfigError::Invalid {
                    key: "RUN_MIGRATIONS",
                    value: migrations,
                });
            }
        };

        Ok(Self {
            storage,
            server_address,
            server_port,
            run_migrations,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_address, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_database_url() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/catalog")]).unwrap();
        assert_eq!(
            config.storage,
            Storage::Postgres {
                database_url: "postgres://localhost/catalog".to_string()
            }
        );
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert!(config.run_migrations);
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn test_memory_storage_needs_no_database() {
        let config = config_from(&[
            ("CATALOG_STORAGE", "memory"),
            ("SERVER_PORT", "8080"),
            ("RUN_MIGRATIONS", "false"),
        ])
        .unwrap();
        assert_eq!(config.storage, Storage::Memory);
        assert_eq!(config.server_port, 8080);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            config_from(&[("CATALOG_STORAGE", "redis")]),
            Err(ConfigError::Invalid { key: "CATALOG_STORAGE", .. })
        ));
        assert!(matches!(
            config_from(&[("CATALOG_STORAGE", "memory"), ("SERVER_PORT", "http")]),
            Err(ConfigError::Invalid { key: "SERVER_PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("CATALOG_STORAGE", "memory"), ("RUN_MIGRATIONS", "maybe")]),
            Err(ConfigError::Invalid { key: "RUN_MIGRATIONS", .. })
        ));
    }
}
