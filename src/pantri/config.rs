use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{PantriError, Result};

const CONFIG_FILENAME: &str = "config.json";

/// The deployed row table this client was written against.
pub const DEFAULT_ENDPOINT: &str = "https://v1.appbackend.io/v1/rows/6lqd5EErN0qA";

/// Environment override, useful for pointing a single invocation at another
/// table without touching the config file.
pub const ENDPOINT_ENV: &str = "PANTRI_ENDPOINT";

/// Configuration for pantri, stored as config.json in the user config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PantriConfig {
    /// Base URL of the row-storage table holding the inventory
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for PantriConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl PantriConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PantriError::Io)?;
        let config: PantriConfig =
            serde_json::from_str(&content).map_err(PantriError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PantriError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PantriError::Serialization)?;
        fs::write(config_path, content).map_err(PantriError::Io)?;
        Ok(())
    }

    /// The endpoint to use, with the environment override applied.
    pub fn resolve_endpoint(&self) -> String {
        std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.endpoint.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_points_at_the_deployed_table() {
        let config = PantriConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = PantriConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, PantriConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();

        let config = PantriConfig {
            endpoint: "https://v1.appbackend.io/v1/rows/other".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = PantriConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn garbage_config_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        let err = PantriConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, PantriError::Serialization(_)));
    }
}
