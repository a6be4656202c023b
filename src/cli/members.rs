//! Members command.
//!
//! List everyone a secret can be shared with.

use crate::cli::output;
use crate::core::context::Context;
use crate::error::Result;

/// List organization members.
pub fn execute(ctx: &Context, json: bool) -> Result<()> {
    let members = ctx.directory().members()?;

    if json {
        let result = serde_json::json!({
            "org": ctx.org(),
            "members": members,
            "count": members.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if members.is_empty() {
        output::dimmed("no members");
    } else {
        output::header(&format!("{} members of {}", members.len(), ctx.org()));
        for member in &members {
            output::list_item(member);
        }
    }

    Ok(())
}
