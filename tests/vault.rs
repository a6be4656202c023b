//! Vault storage tests against a mocked KV v2 API.

use mockito::{Matcher, Server};
use psst::core::storage::{Storage, Vault, VaultOptions};
use psst::core::types::{SecretPath, SecretValue};
use psst::error::{Error, StorageError};
use serde_json::json;

fn vault(server: &Server) -> Vault {
    Vault::new(VaultOptions {
        addr: server.url(),
        token: "s.test".to_string(),
        mount: "secret".to_string(),
    })
    .unwrap()
}

fn path() -> SecretPath {
    SecretPath::new("acme", "alice", "db-password")
}

#[test]
fn test_write_posts_value_field() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v1/secret/data/psst/acme/alice/db-password")
        .match_header("x-vault-token", "s.test")
        .match_body(Matcher::Json(json!({ "data": { "value": "hunter2" } })))
        .with_status(200)
        .with_body(json!({ "data": { "version": 1 } }).to_string())
        .create();

    vault(&server)
        .write(&path(), &SecretValue::new("hunter2"))
        .unwrap();
    mock.assert();
}

#[test]
fn test_write_permission_denied() {
    let mut server = Server::new();
    server
        .mock("POST", "/v1/secret/data/psst/acme/alice/db-password")
        .with_status(403)
        .with_body(r#"{"errors":["permission denied"]}"#)
        .create();

    let err = vault(&server)
        .write(&path(), &SecretValue::new("x"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Storage(StorageError::Status { status: 403, .. })
    ));
    assert!(err.to_string().contains("permission denied"));
}

#[test]
fn test_read_returns_value() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/secret/data/psst/acme/alice/db-password")
        .match_header("x-vault-token", "s.test")
        .with_body(
            json!({
                "data": {
                    "data": { "value": "hunter2" },
                    "metadata": { "version": 3 }
                }
            })
            .to_string(),
        )
        .create();

    let value = vault(&server).read(&path()).unwrap();
    assert_eq!(value.expose(), "hunter2");
}

#[test]
fn test_read_missing() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/secret/data/psst/acme/alice/db-password")
        .with_status(404)
        .with_body(r#"{"errors":[]}"#)
        .create();

    let err = vault(&server).read(&path()).unwrap_err();
    assert!(matches!(err, Error::Storage(StorageError::NotFound(_))));
}

#[test]
fn test_read_unexpected_shape() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/secret/data/psst/acme/alice/db-password")
        .with_body(json!({ "data": { "data": { "password": "x" } } }).to_string())
        .create();

    let err = vault(&server).read(&path()).unwrap_err();
    assert!(matches!(err, Error::Storage(StorageError::Malformed(_))));
}

#[test]
fn test_list_skips_folders() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/secret/metadata/psst/acme/alice")
        .match_query(Matcher::UrlEncoded("list".into(), "true".into()))
        .with_body(json!({ "data": { "keys": ["zeta", "nested/", "alpha"] } }).to_string())
        .create();

    let names = vault(&server).list("psst/acme/alice").unwrap();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

#[test]
fn test_list_missing_prefix_is_empty() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/secret/metadata/psst/acme/alice")
        .match_query(Matcher::Any)
        .with_status(404)
        .create();

    assert!(vault(&server).list("psst/acme/alice").unwrap().is_empty());
}

#[test]
fn test_delete_removes_metadata() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/v1/secret/metadata/psst/acme/alice/db-password")
        .match_header("x-vault-token", "s.test")
        .with_status(204)
        .create();

    vault(&server).delete(&path()).unwrap();
    mock.assert();
}
