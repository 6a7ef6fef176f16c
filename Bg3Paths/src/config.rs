//! Persisted settings for path resolution

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::platform::{HomeOverride, HostPlatform};

/// Persistable configuration (saved to disk)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedConfig {
    /// Home directory to resolve from instead of the current user's
    #[serde(default)]
    pub home_dir: Option<PathBuf>,
}

impl PersistedConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bg3paths").join("config.json"))
    }

    /// Load config from `path`, or return default.
    ///
    /// A missing file is expected; an unreadable or corrupt one is a warning,
    /// since any home override it held is being ignored.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a specific file, creating its parent directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Set the home override, made absolute against the current directory
    pub fn set_home_dir(&mut self, path: &Path) -> Result<&Path> {
        let home = std::path::absolute(path)?;
        Ok(self.home_dir.insert(home).as_path())
    }

    /// The host platform with this config's home override applied
    pub fn platform(&self) -> Result<HomeOverride<HostPlatform>> {
        HomeOverride::new(HostPlatform, self.home_dir.clone())
    }
}
