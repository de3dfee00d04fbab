//! Configuration management for the contacts server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honoured if present; `dotenvy` does not print to stdout, which MCP
//! uses for communication.

use crate::error::{ConfigError, ConfigResult};
use crate::validation::DEFAULT_ALLOWED_TLDS;
use std::env;
use std::path::PathBuf;

/// Default location of the contact collection.
pub const DEFAULT_DB_PATH: &str = "db/contacts.json";

/// Configuration for the contacts server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the collection
    pub db_path: PathBuf,

    /// Top-level domains accepted in email addresses (lower-case)
    pub allowed_tlds: Vec<String>,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DB_PATH`: collection file (default: `db/contacts.json`)
    /// - `CONTACTS_ALLOWED_TLDS`: comma-separated TLD allow-list (default: `com,net,ua`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let db_path = match env::var("CONTACTS_DB_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_DB_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_DB_PATH),
        };

        let allowed_tlds = match env::var("CONTACTS_ALLOWED_TLDS") {
            Ok(val) => Self::parse_tld_list("CONTACTS_ALLOWED_TLDS", &val)?,
            Err(_) => Self::default_tlds(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            db_path,
            allowed_tlds,
            log_level,
        })
    }

    /// Parse a comma-separated TLD list, trimming and lower-casing entries.
    fn parse_tld_list(var_name: &str, value: &str) -> ConfigResult<Vec<String>> {
        let tlds: Vec<String> = value
            .split(',')
            .map(|t| t.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        if tlds.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must list at least one top-level domain".to_string(),
            });
        }

        if let Some(bad) = tlds
            .iter()
            .find(|t| !t.chars().all(|c| c.is_ascii_alphanumeric()))
        {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Not a top-level domain: {}", bad),
            });
        }

        Ok(tlds)
    }

    fn default_tlds() -> Vec<String> {
        DEFAULT_ALLOWED_TLDS.iter().map(|t| t.to_string()).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            allowed_tlds: Self::default_tlds(),
            log_level: "error".to_string(),
        }
    }
}
