//! Error types for psst.
//!
//! Every failure in the crate is an [`Error`]. Backend failures keep their
//! cause in the `source` chain so `--debug` can print all of it while the
//! default output stays a single line.

use std::error::Error as StdError;
use std::fmt::Write as _;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("you must provide a valid directory backend (got {0:?})")]
    UnknownDirectory(String),

    #[error("you must provide a valid storage backend (got {0:?})")]
    UnknownStorage(String),

    #[error("you must set the {0} environment variable")]
    MissingCredential(&'static str),

    #[error("unable to get directory client")]
    DirectoryClient {
        #[source]
        source: DirectoryError,
    },

    #[error("unable to get storage client")]
    StorageClient {
        #[source]
        source: StorageError,
    },

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no recipients: pass at least one --user or --team")]
    NoRecipients,

    #[error("failed to read secret value")]
    Prompt(#[source] dialoguer::Error),

    #[error("failed to serialize output")]
    Json(#[from] serde_json::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Directory backend errors.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("organization name is empty: pass --org")]
    EmptyOrg,

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),

    #[error("failed to access membership cache at {path}")]
    CacheIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("membership cache at {path} is corrupt (rerun with --update-cache)")]
    CacheParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("home directory not found")]
    NoHome,

    #[error("{0} is not a member of the organization")]
    NotMember(String),

    #[error("team not found: {0}")]
    UnknownTeam(String),
}

/// Storage backend errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("no vault token: set VAULT_TOKEN or log in with `vault login`")]
    MissingToken,

    #[error("invalid vault address: {0}")]
    InvalidAddress(String),

    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("unexpected response for {0}")]
    Malformed(String),

    #[error("failed to read vault token file")]
    TokenFile(#[source] std::io::Error),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("secret value for '{0}' cannot be empty")]
    EmptyValue(String),
}

impl Error {
    /// Format the error for the terminal.
    ///
    /// The terse form is the top-level message only. The verbose form appends
    /// one `caused by:` line per error in the source chain.
    pub fn render(&self, verbose: bool) -> String {
        let mut out = self.to_string();
        if !verbose {
            return out;
        }
        let mut source = self.source();
        while let Some(cause) = source {
            let _ = write!(out, "\n  caused by: {}", cause);
            source = cause.source();
        }
        out
    }
}

pub type Result<T> = std::result::Result<T, Error>;
