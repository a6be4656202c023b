//! In-process fake backends.
//!
//! Fakes are registered under the real selector names (`github`, `vault`)
//! so dispatch behaves exactly as it does with the builtin registry.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use psst::core::directory::{Directory, DirectoryParams};
use psst::core::registry::Registry;
use psst::core::storage::Storage;
use psst::core::types::{Login, SecretPath, SecretValue, TeamSlug};
use psst::error::{DirectoryError, Result, StorageError};

/// Fake organization: alice, bob, carol, dave.
/// Teams: `ops` (bob, carol), `dev` (alice, carol), `ghosts` (empty).
pub struct FakeDirectory {
    org: String,
    me: Login,
    members: BTreeSet<Login>,
    teams: BTreeMap<TeamSlug, BTreeSet<Login>>,
}

impl FakeDirectory {
    pub fn new(org: &str, me: &str) -> Self {
        let set = |names: &[&str]| -> BTreeSet<Login> { names.iter().map(|n| n.to_string()).collect() };
        let mut teams = BTreeMap::new();
        teams.insert("ops".to_string(), set(&["bob", "carol"]));
        teams.insert("dev".to_string(), set(&["alice", "carol"]));
        teams.insert("ghosts".to_string(), BTreeSet::new());
        Self {
            org: org.to_string(),
            me: me.to_string(),
            members: set(&["alice", "bob", "carol", "dave"]),
            teams,
        }
    }
}

impl Directory for FakeDirectory {
    fn org(&self) -> &str {
        &self.org
    }

    fn whoami(&self) -> Result<Login> {
        Ok(self.me.clone())
    }

    fn members(&self) -> Result<Vec<Login>> {
        Ok(self.members.iter().cloned().collect())
    }

    fn teams(&self) -> Result<Vec<TeamSlug>> {
        Ok(self.teams.keys().cloned().collect())
    }

    fn team_members(&self, team: &str) -> Result<Vec<Login>> {
        self.teams
            .get(team)
            .map(|m| m.iter().cloned().collect())
            .ok_or_else(|| DirectoryError::UnknownTeam(team.to_string()).into())
    }
}

/// In-memory storage keyed by rendered path.
#[derive(Clone, Default)]
pub struct FakeStorage {
    pub data: Rc<RefCell<BTreeMap<String, String>>>,
}

impl Storage for FakeStorage {
    fn write(&self, path: &SecretPath, value: &SecretValue) -> Result<()> {
        self.data
            .borrow_mut()
            .insert(path.to_string(), value.expose().to_string());
        Ok(())
    }

    fn read(&self, path: &SecretPath) -> Result<SecretValue> {
        self.data
            .borrow()
            .get(&path.to_string())
            .map(|v| SecretValue::new(v.clone()))
            .ok_or_else(|| StorageError::NotFound(path.to_string()).into())
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let prefix = format!("{}/", prefix);
        Ok(self
            .data
            .borrow()
            .keys()
            .filter_map(|k| k.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(str::to_string)
            .collect())
    }

    fn delete(&self, path: &SecretPath) -> Result<()> {
        self.data
            .borrow_mut()
            .remove(&path.to_string())
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(path.to_string()).into())
    }
}

/// How the fake constructors behave.
#[derive(Clone, Copy)]
pub enum Outcome {
    Succeed,
    Fail,
}

/// Records constructor calls and arguments across fake factories.
#[derive(Clone, Default)]
pub struct Fakes {
    /// Constructor names in call order (`"directory"`, `"storage"`).
    pub calls: Rc<RefCell<Vec<&'static str>>>,
    /// Parameters the directory constructor received.
    pub params: Rc<RefCell<Option<DirectoryParams>>>,
    /// Credential the directory constructor received.
    pub credential: Rc<RefCell<Option<String>>>,
    /// Backing map of the fake storage.
    pub storage: FakeStorage,
}

impl Fakes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with fake `github` and `vault` that both succeed.
    ///
    /// `token` is what the credential check sees for GITHUB_TOKEN.
    pub fn registry(&self, token: Option<&str>) -> Registry {
        self.registry_with(token, Outcome::Succeed, Outcome::Succeed)
    }

    pub fn registry_with(
        &self,
        token: Option<&str>,
        directory: Outcome,
        storage: Outcome,
    ) -> Registry {
        let token = token.map(str::to_string);
        let mut registry = Registry::new().with_env(move |name| {
            if name == "GITHUB_TOKEN" {
                token.clone()
            } else {
                None
            }
        });

        let calls = Rc::clone(&self.calls);
        let seen_params = Rc::clone(&self.params);
        let seen_credential = Rc::clone(&self.credential);
        registry.register_directory(
            "github",
            Some("GITHUB_TOKEN"),
            Box::new(
                move |params: &DirectoryParams,
                      credential: Option<String>|
                      -> std::result::Result<Box<dyn Directory>, DirectoryError> {
                    calls.borrow_mut().push("directory");
                    *seen_params.borrow_mut() = Some(params.clone());
                    *seen_credential.borrow_mut() = credential;
                    match directory {
                        Outcome::Succeed => {
                            Ok(Box::new(FakeDirectory::new(&params.org, "alice")))
                        }
                        Outcome::Fail => Err(DirectoryError::Status {
                            url: "https://github.test/orgs/acme/members".to_string(),
                            status: 401,
                            body: "Bad credentials".to_string(),
                        }),
                    }
                },
            ),
        );

        let calls = Rc::clone(&self.calls);
        let backing = self.storage.clone();
        registry.register_storage(
            "vault",
            Box::new(move || -> std::result::Result<Box<dyn Storage>, StorageError> {
                calls.borrow_mut().push("storage");
                match storage {
                    Outcome::Succeed => Ok(Box::new(backing.clone())),
                    Outcome::Fail => Err(StorageError::MissingToken),
                }
            }),
        );

        registry
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    /// Stored value at a rendered path, if any.
    pub fn stored(&self, path: &str) -> Option<String> {
        self.storage.data.borrow().get(path).cloned()
    }
}
