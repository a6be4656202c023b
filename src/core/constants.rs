//! Constants used throughout psst.
//!
//! Centralizes environment variable names, compiled-in defaults and paths.

/// Directory backend compiled into the binary (`PSST_DEFAULT_DIRECTORY` at build time).
pub const COMPILED_DIRECTORY: &str = match option_env!("PSST_DEFAULT_DIRECTORY") {
    Some(v) => v,
    None => "",
};

/// Storage backend compiled into the binary (`PSST_DEFAULT_STORAGE` at build time).
pub const COMPILED_STORAGE: &str = match option_env!("PSST_DEFAULT_STORAGE") {
    Some(v) => v,
    None => "",
};

/// Organization compiled into the binary (`PSST_DEFAULT_ORG` at build time).
pub const COMPILED_ORG: &str = match option_env!("PSST_DEFAULT_ORG") {
    Some(v) => v,
    None => "",
};

/// Selector for the GitHub directory backend.
pub const GITHUB: &str = "github";

/// Selector for the Vault storage backend.
pub const VAULT: &str = "vault";

/// Token required by the GitHub directory backend.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Override for the GitHub API base URL.
pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";

/// Default GitHub API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Vault server address.
pub const VAULT_ADDR_VAR: &str = "VAULT_ADDR";

/// Vault token.
pub const VAULT_TOKEN_VAR: &str = "VAULT_TOKEN";

/// KV v2 mount used for secrets.
pub const VAULT_MOUNT_VAR: &str = "PSST_VAULT_MOUNT";

/// Default Vault address, matching the vault CLI.
pub const VAULT_ADDR: &str = "https://127.0.0.1:8200";

/// Default KV v2 mount.
pub const VAULT_MOUNT: &str = "secret";

/// Token file written by `vault login`, relative to HOME.
pub const VAULT_TOKEN_FILE: &str = ".vault-token";

/// Root of every secret path in storage.
pub const SECRET_PREFIX: &str = "psst";

/// Membership cache directory relative to HOME (~/.psst/cache).
pub const CACHE_DIR: &str = ".psst/cache";

/// Age after which the membership cache is refreshed even without --update-cache.
pub const CACHE_TTL_HOURS: i64 = 24;

/// Page size for paginated GitHub requests.
pub const GITHUB_PAGE_SIZE: usize = 100;

/// Timeout applied to every backend HTTP request.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Log filter override.
pub const LOG_VAR: &str = "PSST_LOG";
