use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{MmaDocError, Result};

/// Name of the configuration file.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Name of the directory, under the user config dir, holding mma-doc files.
pub const CONFIG_DIR: &str = "mma-doc";

/// Executable used when nothing else is configured.
pub const DEFAULT_EXECUTABLE: &str = "wolframscript";

/// Configuration for the engine invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MmaDocConfig {
    /// Name or path of the engine executable.
    pub executable: String,
    /// Arguments passed to the executable ahead of `-code <script>`.
    pub extra_args: Vec<String>,
}

impl Default for MmaDocConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Returns the default config file location, e.g.
/// `~/.config/mma-doc/config.toml` on Linux.
///
/// Falls back to the current directory when the platform has no config dir.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILENAME)
}

/// Loads the configuration from `path`.
///
/// A missing file yields the default configuration.
pub fn load_config(path: &Path) -> Result<MmaDocConfig> {
    if !path.exists() {
        return Ok(MmaDocConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| MmaDocError::Config {
        message: format!("failed to read config file: {}", e),
        path: path.display().to_string(),
    })?;

    toml::from_str(&contents).map_err(|e| MmaDocError::Config {
        message: format!("failed to parse config file: {}", e),
        path: path.display().to_string(),
    })
}

/// Saves the configuration to `path` using an atomic write.
///
/// Parent directories are created as needed. The file is written next to its
/// destination first and renamed into place afterwards.
pub fn save_config(path: &Path, config: &MmaDocConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MmaDocError::Config {
            message: format!("failed to create config directory: {}", e),
            path: parent.display().to_string(),
        })?;
    }

    let tmp_path = path.with_extension("tmp");
    let contents = toml::to_string_pretty(config)?;

    fs::write(&tmp_path, contents).map_err(|e| MmaDocError::Config {
        message: format!("failed to write temporary config file: {}", e),
        path: tmp_path.display().to_string(),
    })?;

    fs::rename(&tmp_path, path).map_err(|e| MmaDocError::Config {
        message: format!(
            "failed to rename temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
        path: path.display().to_string(),
    })?;

    Ok(())
}
