//! Secret sharing.
//!
//! A shared secret is written once per recipient, under that recipient's
//! prefix (`psst/<org>/<member>/<name>`). Reading, listing and removing only
//! ever touch the caller's own prefix.

use std::collections::BTreeSet;

use tracing::info;

use crate::core::context::Context;
use crate::core::directory::Directory;
use crate::core::types::{Login, SecretPath, SecretValue};
use crate::core::validation;
use crate::error::{DirectoryError, Error, Result};

/// Expand users and teams into a de-duplicated set of member logins.
///
/// # Errors
///
/// - `DirectoryError::NotMember` if a user is not in the organization
/// - `DirectoryError::UnknownTeam` if a team does not exist
/// - `Error::NoRecipients` if nothing was requested or the teams are empty
pub fn resolve_recipients(
    directory: &dyn Directory,
    users: &[String],
    teams: &[String],
) -> Result<BTreeSet<Login>> {
    let members: BTreeSet<Login> = directory.members()?.into_iter().collect();

    let mut recipients = BTreeSet::new();
    for user in users {
        if !members.contains(user) {
            return Err(DirectoryError::NotMember(user.clone()).into());
        }
        recipients.insert(user.clone());
    }
    for team in teams {
        recipients.extend(directory.team_members(team)?);
    }

    if recipients.is_empty() {
        return Err(Error::NoRecipients);
    }
    Ok(recipients)
}

/// Store `value` as `name` for every recipient.
///
/// Returns the paths written, in recipient order.
///
/// # Errors
///
/// Returns `ValidationError` for a bad name or empty value, or the first
/// storage error. Copies written before the failure are left in place.
pub fn share(
    ctx: &Context,
    name: &str,
    value: &SecretValue,
    recipients: &BTreeSet<Login>,
) -> Result<Vec<SecretPath>> {
    validation::validate_name(name)?;
    validation::validate_value(name, value.expose())?;
    if recipients.is_empty() {
        return Err(Error::NoRecipients);
    }

    let mut written = Vec::with_capacity(recipients.len());
    for recipient in recipients {
        let path = SecretPath::new(ctx.org(), recipient, name);
        ctx.storage().write(&path, value)?;
        written.push(path);
    }

    info!(name, recipients = written.len(), "secret shared");
    Ok(written)
}

/// Read a secret shared with the caller.
pub fn fetch(ctx: &Context, name: &str) -> Result<SecretValue> {
    validation::validate_name(name)?;
    let me = ctx.directory().whoami()?;
    ctx.storage().read(&SecretPath::new(ctx.org(), &me, name))
}

/// Names of all secrets shared with the caller.
pub fn inbox(ctx: &Context) -> Result<Vec<String>> {
    let me = ctx.directory().whoami()?;
    ctx.storage().list(&SecretPath::owner_prefix(ctx.org(), &me))
}

/// Delete the caller's copy of a secret.
pub fn remove(ctx: &Context, name: &str) -> Result<()> {
    validation::validate_name(name)?;
    let me = ctx.directory().whoami()?;
    ctx.storage().delete(&SecretPath::new(ctx.org(), &me, name))?;
    info!(name, "secret removed");
    Ok(())
}
