use crate::tab::TabId;
use lifeline::impl_storage_clone;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Which ephemeral state buckets are dropped when a single tab closes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PurgePolicy {
    /// Every bucket, for every tab.  The legacy behavior.
    All,
    /// Only the bucket of the closed tab
    Tab,
}

impl Default for PurgePolicy {
    fn default() -> Self {
        PurgePolicy::All
    }
}

/// User-facing config for workspace behavior
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// The path portion of every location written to the navigation stack
    pub base_path: String,
    pub closed_history_limit: usize,
    /// The reserved tab activated when a navigation event names no open tab
    pub fallback_tab: TabId,
    pub purge_on_close: PurgePolicy,
    /// The ephemeral state key which holds a tab's scroll offset
    pub scroll_key: String,
    pub scroll_restore_delay_ms: u64,
}

impl_storage_clone!(WorkspaceConfig);

pub const DEFAULT_CLOSED_HISTORY_LIMIT: usize = 20;
pub const DEFAULT_FALLBACK_TAB: &str = "dashboard";

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            closed_history_limit: DEFAULT_CLOSED_HISTORY_LIMIT,
            fallback_tab: TabId::from(DEFAULT_FALLBACK_TAB),
            purge_on_close: PurgePolicy::default(),
            scroll_key: "scrollTop".to_string(),
            scroll_restore_delay_ms: 50,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("home_dir not found")]
    HomeNotFound,
    #[error("Failed to access config at path: {0} - error: {1}")]
    IoError(PathBuf, std::io::Error),
    #[error("Failed to deserialize config at path: {0} - error: {1}")]
    SerdeError(PathBuf, serde_yaml::Error),
}

pub fn dotdir_path() -> Result<PathBuf, ConfigError> {
    let mut dir = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
    dir.push(".tabstrip");
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let mut path = dotdir_path()?;
    path.push("tabstrip.yml");
    Ok(path)
}

pub fn log_path() -> Result<PathBuf, ConfigError> {
    let mut path = dotdir_path()?;
    path.push("tabstrip.log");
    Ok(path)
}

/// Loads the user config, writing the default config if none exists
pub fn load_config() -> Result<WorkspaceConfig, ConfigError> {
    let path = config_path()?;

    if !path.is_file() {
        let config = WorkspaceConfig::default();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| ConfigError::IoError(parent.to_path_buf(), err))?;
        }

        write_config(path.as_path(), &config)?;
        return Ok(config);
    }

    load_config_from(path.as_path())
}

/// Reads the config at the path.  An empty file is the default config.
pub fn load_config_from(path: &Path) -> Result<WorkspaceConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| ConfigError::IoError(path.to_path_buf(), err))?;

    if contents.trim().is_empty() {
        return Ok(WorkspaceConfig::default());
    }

    let config = serde_yaml::from_str(contents.as_str())
        .map_err(|err| ConfigError::SerdeError(path.to_path_buf(), err))?;

    Ok(config)
}

pub fn write_config(path: &Path, config: &WorkspaceConfig) -> Result<(), ConfigError> {
    let file = File::create(path).map_err(|err| ConfigError::IoError(path.to_path_buf(), err))?;
    let writer = BufWriter::new(file);
    serde_yaml::to_writer(writer, config)
        .map_err(|err| ConfigError::SerdeError(path.to_path_buf(), err))?;
    Ok(())
}
