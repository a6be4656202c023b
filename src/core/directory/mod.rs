//! Directory backends.
//!
//! A directory answers who belongs to the organization and to which teams.
//!
//! ## Adding a New Directory
//!
//! 1. Implement the `Directory` trait
//! 2. Add the implementation in a new file (e.g., `gitlab.rs`)
//! 3. Register a factory in `Registry::builtin`

use crate::core::types::{Login, TeamSlug};
use crate::error::Result;

mod cache;
mod github;

pub use cache::Cache;
pub use github::{GitHub, GitHubOptions};

/// Parameters handed to every directory constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryParams {
    /// Organization whose members and teams are resolved.
    pub org: String,
    /// Refresh cached membership data instead of reusing a snapshot.
    pub update_cache: bool,
}

/// Membership directory capability.
pub trait Directory {
    /// Organization this client resolves.
    fn org(&self) -> &str;

    /// Login of the user the credentials belong to.
    fn whoami(&self) -> Result<Login>;

    /// All organization members, sorted.
    fn members(&self) -> Result<Vec<Login>>;

    /// All team slugs, sorted.
    fn teams(&self) -> Result<Vec<TeamSlug>>;

    /// Members of one team, sorted.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::UnknownTeam` if the team does not exist.
    fn team_members(&self, team: &str) -> Result<Vec<Login>>;
}
