//! Teams command.
//!
//! Without an argument, list team slugs. With one, list that team's members.

use crate::cli::output;
use crate::core::context::Context;
use crate::error::Result;

/// List teams, or the members of `team`.
pub fn execute(ctx: &Context, team: Option<&str>, json: bool) -> Result<()> {
    let (title, names) = match team {
        Some(team) => (format!("members of {}", team), ctx.directory().team_members(team)?),
        None => (format!("teams in {}", ctx.org()), ctx.directory().teams()?),
    };

    if json {
        let result = match team {
            Some(team) => serde_json::json!({
                "team": team,
                "members": names,
                "count": names.len()
            }),
            None => serde_json::json!({
                "org": ctx.org(),
                "teams": names,
                "count": names.len()
            }),
        };
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if names.is_empty() {
        output::dimmed(&format!("no {}", title));
    } else {
        output::header(&format!("{} {}", names.len(), title));
        for name in &names {
            output::list_item(name);
        }
    }

    Ok(())
}
