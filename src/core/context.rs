//! Application context handed to every subcommand.

use crate::core::config::Config;
use crate::core::directory::Directory;
use crate::core::registry::Registry;
use crate::core::storage::Storage;
use crate::error::Result;

/// Configuration plus both opened backends.
///
/// A `Context` only exists once the directory and the storage were both
/// constructed.
pub struct Context {
    config: Config,
    directory: Box<dyn Directory>,
    storage: Box<dyn Storage>,
}

impl Context {
    /// Run the pre-run phase: open the directory, then the storage.
    ///
    /// Storage is not touched if the directory fails.
    ///
    /// # Errors
    ///
    /// Returns the first selection, credential or construction error.
    pub fn open(config: Config, registry: &Registry) -> Result<Self> {
        let directory =
            registry.open_directory(&config.directory_backend, &config.directory_params())?;
        let storage = registry.open_storage(&config.storage_backend)?;

        Ok(Self {
            config,
            directory,
            storage,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn directory(&self) -> &dyn Directory {
        self.directory.as_ref()
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Organization as seen by the directory.
    pub fn org(&self) -> &str {
        self.directory.org()
    }
}
