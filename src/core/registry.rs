//! Backend selection.
//!
//! Maps selector strings (`--directory-backend`, `--storage-backend`) to
//! factories. The set of backends is fixed at compile time; tests register
//! fakes through the same API.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::constants;
use crate::core::directory::{Directory, DirectoryParams, GitHub, GitHubOptions};
use crate::core::storage::{Storage, Vault, VaultOptions};
use crate::error::{DirectoryError, Error, Result, StorageError};

/// Builds a directory from its parameters and the checked credential, if
/// the backend declared one.
pub type DirectoryFactory = Box<
    dyn Fn(&DirectoryParams, Option<String>) -> std::result::Result<Box<dyn Directory>, DirectoryError>,
>;

/// Builds a storage client. Credentials are the factory's own business.
pub type StorageFactory = Box<dyn Fn() -> std::result::Result<Box<dyn Storage>, StorageError>>;

/// Environment lookup used for credential checks.
pub type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

struct DirectoryEntry {
    credential: Option<&'static str>,
    factory: DirectoryFactory,
}

/// Named backend factories.
pub struct Registry {
    directories: BTreeMap<String, DirectoryEntry>,
    storages: BTreeMap<String, StorageFactory>,
    env: EnvLookup,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Empty registry reading credentials from the process environment.
    pub fn new() -> Self {
        Self {
            directories: BTreeMap::new(),
            storages: BTreeMap::new(),
            env: Box::new(|name: &str| std::env::var(name).ok().filter(|v| !v.is_empty())),
        }
    }

    /// Registry with the backends compiled into psst.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register_directory(
            constants::GITHUB,
            Some(constants::GITHUB_TOKEN_VAR),
            Box::new(
                |params: &DirectoryParams,
                 token: Option<String>|
                 -> std::result::Result<Box<dyn Directory>, DirectoryError> {
                    let options = GitHubOptions::from_env(token.unwrap_or_default())?;
                    Ok(Box::new(GitHub::new(params, options)?))
                },
            ),
        );

        registry.register_storage(
            constants::VAULT,
            Box::new(|| -> std::result::Result<Box<dyn Storage>, StorageError> {
                let options = VaultOptions::from_env()?;
                Ok(Box::new(Vault::new(options)?))
            }),
        );

        registry
    }

    /// Replace the environment lookup used for credential checks.
    pub fn with_env(mut self, env: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Register a directory backend under `name`.
    ///
    /// If `credential` is set, that environment variable must be non-empty
    /// before the factory runs; its value is handed to the factory.
    pub fn register_directory(
        &mut self,
        name: &str,
        credential: Option<&'static str>,
        factory: DirectoryFactory,
    ) {
        self.directories
            .insert(name.to_string(), DirectoryEntry { credential, factory });
    }

    /// Register a storage backend under `name`.
    pub fn register_storage(&mut self, name: &str, factory: StorageFactory) {
        self.storages.insert(name.to_string(), factory);
    }

    /// Registered directory selectors, sorted.
    pub fn directory_names(&self) -> Vec<&str> {
        self.directories.keys().map(String::as_str).collect()
    }

    /// Registered storage selectors, sorted.
    pub fn storage_names(&self) -> Vec<&str> {
        self.storages.keys().map(String::as_str).collect()
    }

    /// Construct the directory named by `selector`.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownDirectory` if nothing is registered under `selector`
    /// - `Error::MissingCredential` if the declared credential is unset;
    ///   the factory is not called
    /// - `Error::DirectoryClient` if the factory fails
    pub fn open_directory(
        &self,
        selector: &str,
        params: &DirectoryParams,
    ) -> Result<Box<dyn Directory>> {
        let entry = self
            .directories
            .get(selector)
            .ok_or_else(|| Error::UnknownDirectory(selector.to_string()))?;

        let credential = match entry.credential {
            Some(var) => Some((self.env)(var).ok_or(Error::MissingCredential(var))?),
            None => None,
        };

        eprintln!("Checking members and teams cache...\n");
        debug!(
            backend = selector,
            org = %params.org,
            update_cache = params.update_cache,
            "opening directory"
        );

        (entry.factory)(params, credential).map_err(|source| Error::DirectoryClient { source })
    }

    /// Construct the storage named by `selector`.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownStorage` if nothing is registered under `selector`
    /// - `Error::StorageClient` if the factory fails
    pub fn open_storage(&self, selector: &str) -> Result<Box<dyn Storage>> {
        let factory = self
            .storages
            .get(selector)
            .ok_or_else(|| Error::UnknownStorage(selector.to_string()))?;

        debug!(backend = selector, "opening storage");
        factory().map_err(|source| Error::StorageClient { source })
    }
}
