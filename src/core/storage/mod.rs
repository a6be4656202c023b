//! Storage backends.
//!
//! Storage holds secret material at slash-separated paths. Who may read a
//! path is enforced by the backend itself, not by psst.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Storage` trait
//! 2. Add the implementation in a new file (e.g., `aws.rs`)
//! 3. Register a factory in `Registry::builtin`

use crate::core::types::{SecretPath, SecretValue};
use crate::error::Result;

mod vault;

pub use vault::{Vault, VaultOptions};

/// Secret storage capability.
pub trait Storage {
    /// Write (or overwrite) the secret at `path`.
    fn write(&self, path: &SecretPath, value: &SecretValue) -> Result<()>;

    /// Read the secret at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if nothing is stored there.
    fn read(&self, path: &SecretPath) -> Result<SecretValue>;

    /// Names stored directly under `prefix`, sorted. Empty if none.
    fn list(&self, prefix: &str) -> Result<Vec<String>>;

    /// Delete the secret at `path`.
    fn delete(&self, path: &SecretPath) -> Result<()>;
}
