//! Invocation configuration.
//!
//! Built once from the parsed command line and never mutated afterwards.

use crate::core::constants;
use crate::core::directory::DirectoryParams;

/// Settings for one psst invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Organization the directory resolves.
    pub org: String,
    /// Directory backend selector (e.g. `github`).
    pub directory_backend: String,
    /// Storage backend selector (e.g. `vault`).
    pub storage_backend: String,
    /// Force a refresh of cached membership data.
    pub update_cache: bool,
    /// Verbose error output.
    pub debug: bool,
}

impl Config {
    /// Arguments for the directory constructor.
    pub fn directory_params(&self) -> DirectoryParams {
        DirectoryParams {
            org: self.org.clone(),
            update_cache: self.update_cache,
        }
    }
}

impl Default for Config {
    /// The defaults compiled into the binary.
    fn default() -> Self {
        Self {
            org: constants::COMPILED_ORG.to_string(),
            directory_backend: constants::COMPILED_DIRECTORY.to_string(),
            storage_backend: constants::COMPILED_STORAGE.to_string(),
            update_cache: false,
            debug: false,
        }
    }
}
