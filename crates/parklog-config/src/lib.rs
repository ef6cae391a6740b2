//! # parklog-config
//!
//! Layered configuration loading for parklog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PARKLOG_*` prefix, `__` as separator)
//! 2. Project-level `.parklog/config.toml`
//! 3. User-level `~/.config/parklog/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PARKLOG_DATABASE__PATH` -> `database.path`,
//! `PARKLOG_PAGINATION__PARKS_PER_PAGE` -> `pagination.parks_per_page`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use parklog_config::ParkConfig;
//!
//! let config = ParkConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod auth;
mod database;
mod error;
mod pagination;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use pagination::PaginationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding project-local parklog state.
pub const PROJECT_DIR: &str = ".parklog";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ParkConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl ParkConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for_project(Path::new("."))
    }

    /// Load configuration, reading the project file under `project_root`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is out of range.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for_project(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        Self::figment_for_project(Path::new("."))
    }

    /// Provider chain with the project-local file taken from `project_root`.
    pub fn figment_for_project(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PARKLOG_").split("__"))
    }

    /// Reject values the rest of the system cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.parks_per_page == 0 {
            return Err(invalid("pagination.parks_per_page", "must be at least 1"));
        }
        if self.pagination.visits_per_page == 0 {
            return Err(invalid("pagination.visits_per_page", "must be at least 1"));
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(invalid("auth.bcrypt_cost", "must be between 4 and 31"));
        }
        if self.database.path.is_empty() && !self.database.is_remote() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("parklog").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ParkConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.database.is_remote());
        assert_eq!(config.pagination.parks_per_page, 5);
        assert_eq!(config.pagination.visits_per_page, 3);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = ParkConfig::default();
        config.pagination.visits_per_page = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pagination.visits_per_page"));
    }

    #[test]
    fn bcrypt_cost_out_of_range_is_rejected() {
        let mut config = ParkConfig::default();
        config.auth.bcrypt_cost = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_local_path_without_remote_is_not_configured() {
        let mut config = ParkConfig::default();
        config.database.path = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }
}
