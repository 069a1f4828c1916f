/// User configuration
///
/// Read once at startup from `config.json` in the user's config directory
/// (or the file named by `FILE_ARCHIVER_CONFIG`). Every field is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ArchiveError, Result};
use crate::state::tracker::ArchiveStore;

/// Environment variable that points at an alternate config file
pub const CONFIG_ENV: &str = "FILE_ARCHIVER_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Where the archive timestamp database lives
    pub database_path: PathBuf,
    /// Starting folder of the source pane (working directory if unset)
    pub source_dir: Option<PathBuf>,
    /// Starting folder of the destination pane (working directory if unset)
    pub destination_dir: Option<PathBuf>,
    /// Ask before closing the window
    pub confirm_exit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: ArchiveStore::default_db_path(),
            source_dir: None,
            destination_dir: None,
            confirm_exit: true,
        }
    }
}

impl AppConfig {
    /// Location of the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("file-archiver").join("config.json"))
    }

    /// Load the config, falling back to defaults if it is missing or broken
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(Some(config)) => {
                log::info!("⚙️  Loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("⚠️  {} - using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse `path`; `Ok(None)` if the file does not exist
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ArchiveError::Config {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| ArchiveError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}
