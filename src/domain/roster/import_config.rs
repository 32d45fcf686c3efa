// ============================================================
// IMPORT CONFIGURATION
// ============================================================
// File locations for the roster import, with env overrides

use serde::{Deserialize, Serialize};

/// Env var overriding the source CSV path.
pub const ENV_ROSTER_CSV_PATH: &str = "ROSTER_CSV_PATH";

/// Env var overriding the destination database path.
pub const ENV_ROSTER_DB_PATH: &str = "ROSTER_DB_PATH";

const DEFAULT_CSV_PATH: &str = "data/employees.csv";
const DEFAULT_DB_PATH: &str = "employees.db";

/// Configuration for one import run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Source roster CSV (headerless, 21 positional columns).
    pub csv_path: String,

    /// Destination SQLite database file.
    pub db_path: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
            db_path: DEFAULT_DB_PATH.to_string(),
        }
    }
}

impl ImportConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Build config from the environment, falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            csv_path: std::env::var(ENV_ROSTER_CSV_PATH)
                .unwrap_or_else(|_| DEFAULT_CSV_PATH.to_string()),
            db_path: std::env::var(ENV_ROSTER_DB_PATH)
                .unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.csv_path.trim().is_empty() {
            return Err("csv_path must not be empty".to_string());
        }
        if self.db_path.trim().is_empty() {
            return Err("db_path must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ImportConfig::new();
        assert_eq!(config.csv_path, "data/employees.csv");
        assert_eq!(config.db_path, "employees.db");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_fails_validation() {
        let config = ImportConfig {
            csv_path: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
