use std::io::ErrorKind;
use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use log::{debug, info, warn};

use super::error::ConfigLoadError;
use super::loader;
use super::types::ConfigMap;

static GLOBAL: OnceLock<ConfigManager> = OnceLock::new();

/// Holds the loaded configuration as an immutable snapshot.
///
/// Reloads swap the whole snapshot under the write lock, so readers see
/// either the old map or the new one.
pub struct ConfigManager {
    current: RwLock<Arc<ConfigMap>>,
}

impl ConfigManager {
    pub fn from_map(config: ConfigMap) -> Self {
        Self {
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Process-wide instance. The first call loads the default config file;
    /// a missing or unreadable file leaves it empty.
    pub fn global() -> &'static ConfigManager {
        GLOBAL.get_or_init(Self::load_default)
    }

    /// The process-wide instance if something has already initialized it.
    pub fn try_global() -> Option<&'static ConfigManager> {
        GLOBAL.get()
    }

    fn load_default() -> Self {
        let Some(path) = loader::default_path() else {
            debug!("no config directory available; starting with empty configuration");
            return Self::from_map(ConfigMap::new());
        };

        match loader::load_file(&path) {
            Ok(config) => {
                info!("loaded configuration from {}", path.display());
                Self::from_map(config)
            }
            Err(ConfigLoadError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!("no config at {}; starting with empty configuration", path.display());
                Self::from_map(ConfigMap::new())
            }
            Err(e) => {
                warn!("{}; starting with empty configuration", e);
                Self::from_map(ConfigMap::new())
            }
        }
    }

    /// Current snapshot. Cheap to clone and safe to hold across reloads.
    pub fn properties(&self) -> Arc<ConfigMap> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the snapshot with the contents of `path`. On error the old snapshot stays.
    pub fn load_file(&self, path: &Path) -> Result<(), ConfigLoadError> {
        let config = loader::load_file(path)?;
        info!("reloaded configuration from {}", path.display());
        self.load_map(config);
        Ok(())
    }

    pub fn load_map(&self, config: ConfigMap) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
    }
}
