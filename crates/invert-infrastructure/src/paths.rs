//! Path management for invert configuration files.
//!
//! ```text
//! ~/.config/invert/            # Config directory (platform config dir)
//! └── config.toml              # Board rules and draw settings
//! ```
//!
//! `INVERT_CONFIG_DIR` overrides the directory, mainly for tests and
//! portable installs.

use std::path::PathBuf;
use thiserror::Error;

const APP_DIR_NAME: &str = "invert";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "INVERT_CONFIG_DIR";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Platform config directory could not be determined.
    #[error("Cannot find the platform configuration directory")]
    ConfigDirNotFound,
}

/// Path resolution for invert.
pub struct InvertPaths;

impl InvertPaths {
    /// Returns the invert configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: `$INVERT_CONFIG_DIR`, or e.g. `~/.config/invert/`
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }
}
