//! HashiCorp Vault storage over the KV v2 HTTP API.
//!
//! Each secret is a KV entry with a single `value` field. Access control is
//! left to Vault policies on the `psst/<org>/<member>/` prefixes.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::Storage;
use crate::core::constants;
use crate::core::types::{SecretPath, SecretValue};
use crate::error::{Result, StorageError};

/// Connection settings for [`Vault`].
#[derive(Debug, Clone)]
pub struct VaultOptions {
    pub addr: String,
    pub token: String,
    /// KV v2 mount point, e.g. `secret`.
    pub mount: String,
}

impl VaultOptions {
    /// Options resolved the way the vault CLI resolves them.
    ///
    /// The token comes from `VAULT_TOKEN`, falling back to `~/.vault-token`.
    pub fn from_env() -> std::result::Result<Self, StorageError> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let token = match var(constants::VAULT_TOKEN_VAR) {
            Some(token) => token,
            None => Self::token_file()?.ok_or(StorageError::MissingToken)?,
        };

        Ok(Self {
            addr: var(constants::VAULT_ADDR_VAR).unwrap_or_else(|| constants::VAULT_ADDR.to_string()),
            token,
            mount: var(constants::VAULT_MOUNT_VAR)
                .unwrap_or_else(|| constants::VAULT_MOUNT.to_string()),
        })
    }

    fn token_file() -> std::result::Result<Option<String>, StorageError> {
        let Some(path) = dirs::home_dir().map(|h| h.join(constants::VAULT_TOKEN_FILE)) else {
            return Ok(None);
        };
        read_token(&path)
    }
}

fn read_token(path: &Path) -> std::result::Result<Option<String>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }
    let token = std::fs::read_to_string(path).map_err(StorageError::TokenFile)?;
    let token = token.trim();
    Ok((!token.is_empty()).then(|| token.to_string()))
}

#[derive(Serialize)]
struct WriteBody<'a> {
    data: Fields<&'a str>,
}

#[derive(Serialize, Deserialize)]
struct Fields<T> {
    value: T,
}

#[derive(Deserialize)]
struct ReadBody {
    data: ReadData,
}

#[derive(Deserialize)]
struct ReadData {
    data: Fields<String>,
}

#[derive(Deserialize)]
struct ListBody {
    data: ListData,
}

#[derive(Deserialize)]
struct ListData {
    #[serde(default)]
    keys: Vec<String>,
}

/// Vault-backed [`Storage`].
pub struct Vault {
    client: Client,
    base: Url,
    token: String,
    mount: String,
}

impl Vault {
    /// Build a client for the given server.
    ///
    /// No request is made here; a bad token surfaces on first use.
    pub fn new(options: VaultOptions) -> std::result::Result<Self, StorageError> {
        let base = Url::parse(&options.addr)
            .map_err(|_| StorageError::InvalidAddress(options.addr.clone()))?;
        if base.cannot_be_a_base() {
            return Err(StorageError::InvalidAddress(options.addr));
        }

        let client = Client::builder()
            .user_agent(concat!("psst/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(StorageError::Client)?;

        debug!(addr = %base, mount = %options.mount, "vault client ready");
        Ok(Self {
            client,
            base,
            token: options.token,
            mount: options.mount.trim_matches('/').to_string(),
        })
    }

    fn url(&self, kind: &str, path: &str) -> String {
        format!(
            "{}/v1/{}/{}/{}",
            self.base.as_str().trim_end_matches('/'),
            self.mount,
            kind,
            path.trim_matches('/')
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        trace!(%method, url = %url, "vault request");
        self.client
            .request(method, url)
            .header("X-Vault-Token", &self.token)
    }

    fn send(&self, url: &str, request: RequestBuilder) -> std::result::Result<Response, StorageError> {
        request.send().map_err(|source| StorageError::Http {
            url: url.to_string(),
            source,
        })
    }

    fn status_error(url: &str, response: Response) -> StorageError {
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        StorageError::Status {
            url: url.to_string(),
            status,
            body: body.trim().to_string(),
        }
    }
}

impl Storage for Vault {
    fn write(&self, path: &SecretPath, value: &SecretValue) -> Result<()> {
        let url = self.url("data", &path.to_string());
        let body = WriteBody {
            data: Fields {
                value: value.expose(),
            },
        };
        let response = self.send(&url, self.request(Method::POST, &url).json(&body))?;
        if !response.status().is_success() {
            return Err(Self::status_error(&url, response).into());
        }
        debug!(path = %path, "secret written");
        Ok(())
    }

    fn read(&self, path: &SecretPath) -> Result<SecretValue> {
        let url = self.url("data", &path.to_string());
        let response = self.send(&url, self.request(Method::GET, &url))?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(StorageError::NotFound(path.to_string()).into()),
            s if s.is_success() => {
                let body: ReadBody = response
                    .json()
                    .map_err(|_| StorageError::Malformed(path.to_string()))?;
                Ok(SecretValue::new(body.data.data.value))
            }
            _ => Err(Self::status_error(&url, response).into()),
        }
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let url = format!("{}?list=true", self.url("metadata", prefix));
        let response = self.send(&url, self.request(Method::GET, &url))?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            s if s.is_success() => {
                let body: ListBody = response
                    .json()
                    .map_err(|_| StorageError::Malformed(prefix.to_string()))?;
                let mut names: Vec<String> = body
                    .data
                    .keys
                    .into_iter()
                    .filter(|k| !k.ends_with('/'))
                    .collect();
                names.sort();
                Ok(names)
            }
            _ => Err(Self::status_error(&url, response).into()),
        }
    }

    fn delete(&self, path: &SecretPath) -> Result<()> {
        let url = self.url("metadata", &path.to_string());
        let response = self.send(&url, self.request(Method::DELETE, &url))?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(StorageError::NotFound(path.to_string()).into()),
            s if s.is_success() => {
                debug!(path = %path, "secret deleted");
                Ok(())
            }
            _ => Err(Self::status_error(&url, response).into()),
        }
    }
}
