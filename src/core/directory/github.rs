//! GitHub organization directory.
//!
//! Members and teams come from the GitHub REST API and are kept in a
//! [`Cache`] snapshot so most invocations never touch the network.

use std::time::Duration;

use chrono::Utc;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, trace};

use super::{Cache, Directory, DirectoryParams};
use crate::core::constants;
use crate::core::types::{Login, Membership, TeamSlug};
use crate::error::{DirectoryError, Result};

/// Connection settings for [`GitHub`].
#[derive(Debug, Clone)]
pub struct GitHubOptions {
    /// Personal access token with `read:org`.
    pub token: String,
    /// API base, e.g. `https://api.github.com`.
    pub api_url: String,
    /// Where membership snapshots are kept.
    pub cache: Cache,
}

impl GitHubOptions {
    /// Options from the process environment and the home cache directory.
    pub fn from_env(token: String) -> std::result::Result<Self, DirectoryError> {
        let api_url = std::env::var(constants::GITHUB_API_URL_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| constants::GITHUB_API_URL.to_string());
        Ok(Self {
            token,
            api_url,
            cache: Cache::in_home()?,
        })
    }
}

#[derive(Deserialize)]
struct User {
    login: Login,
}

#[derive(Deserialize)]
struct Team {
    slug: TeamSlug,
}

/// Authenticated GitHub REST client.
struct Api {
    client: Client,
    base: String,
    token: String,
}

impl Api {
    fn new(options: &GitHubOptions) -> std::result::Result<Self, DirectoryError> {
        let client = Client::builder()
            .user_agent(concat!("psst/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(DirectoryError::Client)?;
        Ok(Self {
            client,
            base: options.api_url.trim_end_matches('/').to_string(),
            token: options.token.clone(),
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, DirectoryError> {
        let url = format!("{}{}", self.base, path);
        trace!(url = %url, "GET");

        let http = |source| DirectoryError::Http {
            url: url.clone(),
            source,
        };
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DirectoryError::Status {
                url,
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }
        response.json::<T>().map_err(http)
    }

    /// Follow `page=N` until a short page comes back.
    fn get_paged<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<Vec<T>, DirectoryError> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let batch: Vec<T> = self.get(&format!(
                "{}?per_page={}&page={}",
                path,
                constants::GITHUB_PAGE_SIZE,
                page
            ))?;
            let done = batch.len() < constants::GITHUB_PAGE_SIZE;
            items.extend(batch);
            if done {
                return Ok(items);
            }
            page += 1;
        }
    }

    fn fetch_membership(&self, org: &str) -> std::result::Result<Membership, DirectoryError> {
        let mut snapshot = Membership::new(org);

        let members: Vec<User> = self.get_paged(&format!("/orgs/{}/members", org))?;
        snapshot.members = members.into_iter().map(|u| u.login).collect();

        let teams: Vec<Team> = self.get_paged(&format!("/orgs/{}/teams", org))?;
        for team in teams {
            let members: Vec<User> =
                self.get_paged(&format!("/orgs/{}/teams/{}/members", org, team.slug))?;
            snapshot
                .teams
                .insert(team.slug, members.into_iter().map(|u| u.login).collect());
        }

        Ok(snapshot)
    }
}

/// GitHub-backed [`Directory`].
pub struct GitHub {
    api: Api,
    membership: Membership,
}

impl GitHub {
    /// Open the directory for `params.org`.
    ///
    /// Reuses the cached snapshot unless `params.update_cache` is set, the
    /// snapshot is missing, or it is older than the cache TTL.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` if the org is empty, the API rejects the
    /// token, or the cache cannot be read or written.
    pub fn new(
        params: &DirectoryParams,
        options: GitHubOptions,
    ) -> std::result::Result<Self, DirectoryError> {
        if params.org.is_empty() {
            return Err(DirectoryError::EmptyOrg);
        }

        let api = Api::new(&options)?;
        let cached = if params.update_cache {
            debug!("cache update forced");
            None
        } else {
            options
                .cache
                .load(&params.org)?
                .filter(|s| !s.is_stale(Utc::now(), constants::CACHE_TTL_HOURS))
        };

        let membership = match cached {
            Some(snapshot) => snapshot,
            None => {
                info!(org = %params.org, "refreshing membership from github");
                let snapshot = api.fetch_membership(&params.org)?;
                options.cache.save(&snapshot)?;
                snapshot
            }
        };

        Ok(Self { api, membership })
    }

    /// Snapshot this client answers from.
    pub fn membership(&self) -> &Membership {
        &self.membership
    }
}

impl Directory for GitHub {
    fn org(&self) -> &str {
        &self.membership.org
    }

    fn whoami(&self) -> Result<Login> {
        let user: User = self.api.get("/user")?;
        Ok(user.login)
    }

    fn members(&self) -> Result<Vec<Login>> {
        Ok(self.membership.members.iter().cloned().collect())
    }

    fn teams(&self) -> Result<Vec<TeamSlug>> {
        Ok(self.membership.teams.keys().cloned().collect())
    }

    fn team_members(&self, team: &str) -> Result<Vec<Login>> {
        let members = self
            .membership
            .teams
            .get(team)
            .ok_or_else(|| DirectoryError::UnknownTeam(team.to_string()))?;
        Ok(members.iter().cloned().collect())
    }
}
