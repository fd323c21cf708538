//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::HotswapConfig;

/// File name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "hotswap.yaml";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "HOTSWAP_CONFIG";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
pub struct YamlConfigStore {
    project_dir: PathBuf,
    path_override: Option<PathBuf>,
}

impl YamlConfigStore {
    /// Store reading `hotswap.yaml` from `project_dir`. The environment is
    /// not consulted.
    #[must_use]
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            path_override: None,
        }
    }

    /// Like [`new`](Self::new), but honours `HOTSWAP_CONFIG` when it is set.
    #[must_use]
    pub fn from_env(project_dir: impl Into<PathBuf>) -> Self {
        let store = Self::new(project_dir);
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => store.with_path_override(path),
            _ => store,
        }
    }

    /// Read the config from `path` instead of the project directory.
    #[must_use]
    pub fn with_path_override(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_override = Some(path.into());
        self
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<HotswapConfig> {
        let path = self.path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(HotswapConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: HotswapConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config in {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(self
            .path_override
            .clone()
            .unwrap_or_else(|| self.project_dir.join(CONFIG_FILE_NAME)))
    }
}
