//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` (see [`InvertPaths`])
//! and caches it for the lifetime of the service.

use crate::dto::ConfigRootDTO;
use crate::paths::InvertPaths;
use crate::storage::AtomicTomlFile;
use invert_core::config::RootConfig;
use invert_core::{InvertError, Result};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file location; resolved from [`InvertPaths`] when `None`.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service backed by the platform config file.
    ///
    /// Nothing is read until the first [`get_config`](Self::get_config).
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service backed by a specific file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Location of the configuration file.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => InvertPaths::config_file().map_err(|e| InvertError::config(e.to_string())),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing file is created with default values.
    pub fn get_config(&self) -> Result<RootConfig> {
        if let Some(cached) = *self.read_cache() {
            return Ok(cached);
        }

        let loaded = self.load_config()?;
        *self.write_cache() = Some(loaded);
        Ok(loaded)
    }

    /// Applies `f` to the stored configuration and saves it.
    ///
    /// The result is validated before anything is written.
    pub fn update<F>(&self, f: F) -> Result<RootConfig>
    where
        F: FnOnce(&mut RootConfig),
    {
        let file = self.file()?;
        let dto = file.update(ConfigRootDTO::default(), |dto| {
            let mut config = RootConfig::try_from(dto.clone())?;
            f(&mut config);
            config.validate()?;
            *dto = config.into();
            Ok::<(), InvertError>(())
        })?;

        let config = RootConfig::try_from(dto)?;
        *self.write_cache() = Some(config);
        tracing::info!(path = %file.path().display(), "Configuration updated");
        Ok(config)
    }

    /// Writes a default configuration file.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the file exists and `force` is false.
    pub fn init(&self, force: bool) -> Result<PathBuf> {
        let file = self.file()?;
        if file.path().exists() && !force {
            return Err(InvertError::config(format!(
                "{} already exists",
                file.path().display()
            )));
        }

        let config = RootConfig::default();
        file.save(&config.into())?;
        *self.write_cache() = Some(config);
        Ok(file.path().to_path_buf())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.write_cache() = None;
    }

    fn load_config(&self) -> Result<RootConfig> {
        let file = self.file()?;

        match file.load()? {
            Some(dto) => RootConfig::try_from(dto),
            None => {
                let config = RootConfig::default();
                file.save(&config.into())?;
                tracing::info!(
                    path = %file.path().display(),
                    "Created default configuration"
                );
                Ok(config)
            }
        }
    }

    fn file(&self) -> Result<AtomicTomlFile<ConfigRootDTO>> {
        Ok(AtomicTomlFile::new(self.config_path()?))
    }

    fn read_cache(&self) -> std::sync::RwLockReadGuard<'_, Option<RootConfig>> {
        self.config.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_cache(&self) -> std::sync::RwLockWriteGuard<'_, Option<RootConfig>> {
        self.config.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
