//! Test harness utilities for psst integration tests.
//!
//! Provides an isolated environment for running the binary, output
//! assertions, and in-process fake backends.

#![allow(dead_code)]

pub mod fakes;

use assert_cmd::Command;
use std::process::Output;
use tempfile::TempDir;

/// Variables that would leak the developer's real setup into a test.
const SCRUBBED_VARS: &[&str] = &[
    "GITHUB_TOKEN",
    "GITHUB_API_URL",
    "VAULT_ADDR",
    "VAULT_TOKEN",
    "PSST_ORG",
    "PSST_LOG",
    "PSST_VAULT_MOUNT",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary home directory (membership cache, vault token file)
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("failed to create temp home"),
        }
    }

    /// Create a psst command with a clean environment.
    ///
    /// - HOME set to the temporary home directory
    /// - credentials and overrides removed
    /// - colors disabled
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("psst").expect("failed to find psst binary");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// A psst command with both backend selectors set.
    pub fn cmd_with_backends(&self, directory: &str, storage: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.args([
            "--org",
            "acme",
            "--directory-backend",
            directory,
            "--storage-backend",
            storage,
        ]);
        cmd
    }
}

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command exited with code 1.
pub fn assert_exit_one(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(1),
        "expected exit code 1, stderr: {}",
        stderr(output)
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
