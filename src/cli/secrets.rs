//! Secret commands.
//!
//! Implements share, get, list and rm on top of `core::share`.

use std::io::Read;

use tracing::debug;

use crate::cli::output;
use crate::core::context::Context;
use crate::core::share;
use crate::core::types::SecretValue;
use crate::error::{Error, Result};

/// Resolve the secret value: flag, then piped stdin, then a hidden prompt.
fn read_value(name: &str, value: Option<String>) -> Result<SecretValue> {
    if let Some(value) = value {
        output::warn("--value is visible in shell history and process lists; prefer stdin");
        return Ok(SecretValue::new(value));
    }

    if !atty::is(atty::Stream::Stdin) {
        debug!("reading secret value from stdin");
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(SecretValue::new(strip_newline(buf)));
    }

    let value = dialoguer::Password::new()
        .with_prompt(format!("Value for {}", name))
        .interact()
        .map_err(Error::Prompt)?;
    Ok(SecretValue::new(value))
}

/// Drop one trailing newline, as added by `echo` or a text editor.
fn strip_newline(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}

/// Share a secret with users and teams.
pub fn share(
    ctx: &Context,
    name: &str,
    users: &[String],
    teams: &[String],
    value: Option<String>,
) -> Result<()> {
    let recipients = share::resolve_recipients(ctx.directory(), users, teams)?;
    let value = read_value(name, value)?;
    let written = share::share(ctx, name, &value, &recipients)?;

    output::success(&format!(
        "shared {} with {} member{}",
        output::name(name),
        written.len(),
        if written.len() == 1 { "" } else { "s" }
    ));
    for recipient in &recipients {
        output::list_item(recipient);
    }
    Ok(())
}

/// Print a secret shared with the caller.
pub fn get(ctx: &Context, name: &str) -> Result<()> {
    let value = share::fetch(ctx, name)?;
    // Plain output for scripting - no decoration
    output::data(value.expose());
    Ok(())
}

/// List the secrets shared with the caller.
pub fn list(ctx: &Context, json: bool) -> Result<()> {
    let names = share::inbox(ctx)?;

    if json {
        let result = serde_json::json!({
            "secrets": names,
            "count": names.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if names.is_empty() {
        output::dimmed("no secrets shared with you");
    } else {
        output::header(&format!("{} secrets", names.len()));
        for name in &names {
            output::list_item(name);
        }
    }

    Ok(())
}

/// Delete the caller's copy of a secret.
pub fn rm(ctx: &Context, name: &str) -> Result<()> {
    share::remove(ctx, name)?;
    output::success(&format!("removed: {}", output::name(name)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_newline() {
        assert_eq!(strip_newline("abc\n".to_string()), "abc");
        assert_eq!(strip_newline("abc\r\n".to_string()), "abc");
        assert_eq!(strip_newline("abc\n\n".to_string()), "abc\n");
        assert_eq!(strip_newline("abc".to_string()), "abc");
    }

    #[test]
    fn test_flag_value_wins() {
        let value = read_value("db", Some("from-flag".to_string())).unwrap();
        assert_eq!(value.expose(), "from-flag");
    }
}
