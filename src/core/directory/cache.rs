//! On-disk membership cache.
//!
//! Stores one JSON snapshot per organization in `~/.psst/cache/<org>.json`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::core::types::Membership;
use crate::error::DirectoryError;

/// Membership snapshots on the local filesystem.
#[derive(Debug, Clone)]
pub struct Cache {
    dir: PathBuf,
}

impl Cache {
    /// Cache rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache under the user's home directory (`~/.psst/cache`).
    pub fn in_home() -> Result<Self, DirectoryError> {
        let home = dirs::home_dir().ok_or(DirectoryError::NoHome)?;
        Ok(Self::new(home.join(constants::CACHE_DIR)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, org: &str) -> PathBuf {
        self.dir.join(format!("{}.json", org))
    }

    /// Load the snapshot for `org`, if one was saved.
    pub fn load(&self, org: &str) -> Result<Option<Membership>, DirectoryError> {
        let path = self.path(org);
        if !path.exists() {
            debug!(path = %path.display(), "no membership cache");
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|source| DirectoryError::CacheIo {
            path: path.display().to_string(),
            source,
        })?;
        let snapshot: Membership =
            serde_json::from_str(&contents).map_err(|source| DirectoryError::CacheParse {
                path: path.display().to_string(),
                source,
            })?;

        debug!(
            path = %path.display(),
            members = snapshot.members.len(),
            teams = snapshot.teams.len(),
            "membership cache loaded"
        );
        Ok(Some(snapshot))
    }

    /// Persist a snapshot, replacing any previous one for the same org.
    pub fn save(&self, snapshot: &Membership) -> Result<(), DirectoryError> {
        let io_err = |path: &Path| {
            let path = path.display().to_string();
            move |source: std::io::Error| DirectoryError::CacheIo { path, source }
        };

        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        let path = self.path(&snapshot.org);
        let contents = serde_json::to_string_pretty(snapshot).map_err(|source| {
            DirectoryError::CacheParse {
                path: path.display().to_string(),
                source,
            }
        })?;
        fs::write(&path, contents).map_err(io_err(&path))?;

        // Restrict permissions on cache file (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(io_err(&path))?;
        }

        debug!(path = %path.display(), "membership cache saved");
        Ok(())
    }
}
