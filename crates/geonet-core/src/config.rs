use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::GraphError;
use crate::graph::algorithms::Strategy;
use crate::graph::centrality::CentralityKind;
use crate::result::GraphResult;

/// Defaults for analyses whose options are not given explicitly
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub default_strategy: Strategy,
    #[serde(default)]
    pub default_centrality: CentralityKind,
    #[serde(default)]
    pub contraction_workers: Option<usize>,
}

impl AnalysisConfig {
    /// Location of `config.toml` for the current platform
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/geonet/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("geonet/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("geonet\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user configuration, falling back to defaults
    ///
    /// A missing file is silent; an unreadable or invalid one is logged.
    pub fn load() -> Self {
        let Some(config_path) = Self::config_path() else {
            return Self::default();
        };
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }

    /// Read a config file, failing on IO or TOML errors
    pub fn load_from(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Worker threads for contraction; never less than one
    pub fn effective_contraction_workers(&self) -> usize {
        self.contraction_workers.unwrap_or(1).max(1)
    }
}
