//! Domain types shared by the backends and the sharing layer.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::core::constants;

/// A member login in the directory (e.g., a GitHub username).
pub type Login = String;

/// A team identifier in the directory (e.g., a GitHub team slug).
pub type TeamSlug = String;

/// Location of one recipient's copy of a secret.
///
/// Rendered as `psst/<org>/<owner>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretPath {
    pub org: String,
    pub owner: Login,
    pub name: String,
}

impl SecretPath {
    pub fn new(org: &str, owner: &str, name: &str) -> Self {
        Self {
            org: org.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// Prefix under which every secret shared with `owner` lives.
    pub fn owner_prefix(org: &str, owner: &str) -> String {
        format!("{}/{}/{}", constants::SECRET_PREFIX, org, owner)
    }
}

impl fmt::Display for SecretPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            Self::owner_prefix(&self.org, &self.owner),
            self.name
        )
    }
}

/// Plaintext secret material. Wiped from memory on drop.
#[derive(Clone)]
pub struct SecretValue(Zeroizing<String>);

impl SecretValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretValue(***)")
    }
}

/// Snapshot of an organization's members and teams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Membership {
    pub org: String,
    pub fetched_at: DateTime<Utc>,
    #[serde(default)]
    pub members: BTreeSet<Login>,
    #[serde(default)]
    pub teams: BTreeMap<TeamSlug, BTreeSet<Login>>,
}

impl Membership {
    pub fn new(org: &str) -> Self {
        Self {
            org: org.to_string(),
            fetched_at: Utc::now(),
            members: BTreeSet::new(),
            teams: BTreeMap::new(),
        }
    }

    /// Whether the snapshot is older than `ttl_hours`.
    pub fn is_stale(&self, now: DateTime<Utc>, ttl_hours: i64) -> bool {
        now.signed_duration_since(self.fetched_at) > chrono::Duration::hours(ttl_hours)
    }
}
