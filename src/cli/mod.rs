//! Command-line interface.

pub mod completions;
pub mod members;
pub mod output;
pub mod secrets;
pub mod teams;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants;
use crate::core::context::Context;
use crate::core::registry::Registry;
use crate::error::Result;

/// psst - securely share secrets inside your organization.
#[derive(Parser, Debug)]
#[command(
    name = "psst",
    about = "Psst is a tool for securely sharing secrets inside of your organization",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Organization for the directory
    #[arg(long, global = true, env = "PSST_ORG")]
    pub org: Option<String>,

    /// Directory to use to find members and teams (e.g. github)
    #[arg(long, global = true)]
    pub directory_backend: Option<String>,

    /// Storage backend to use for secrets (e.g. vault)
    #[arg(long, global = true)]
    pub storage_backend: Option<String>,

    /// Force an update of the directory cache
    #[arg(long, global = true)]
    pub update_cache: bool,

    /// Produce more debugging output
    #[arg(long, global = true)]
    pub debug: bool,
}

impl GlobalArgs {
    /// Resolve flags against the defaults compiled into the binary.
    pub fn into_config(self) -> Config {
        Config {
            org: self.org.unwrap_or_else(|| constants::COMPILED_ORG.to_string()),
            directory_backend: self
                .directory_backend
                .unwrap_or_else(|| constants::COMPILED_DIRECTORY.to_string()),
            storage_backend: self
                .storage_backend
                .unwrap_or_else(|| constants::COMPILED_STORAGE.to_string()),
            update_cache: self.update_cache,
            debug: self.debug,
        }
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the members of the organization
    Members {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List teams, or the members of one team
    Teams {
        /// Team slug
        team: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Share a secret with users and teams
    Share {
        /// Secret name (e.g. db-password)
        name: String,
        /// Member to share with (repeatable)
        #[arg(short, long = "user", value_name = "USER")]
        users: Vec<String>,
        /// Team to share with (repeatable)
        #[arg(short, long = "team", value_name = "TEAM")]
        teams: Vec<String>,
        /// Secret value (read from stdin or prompted if omitted)
        #[arg(long)]
        value: Option<String>,
    },

    /// Print a secret shared with you
    Get {
        /// Secret name
        name: String,
    },

    /// List the secrets shared with you
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete your copy of a secret
    Rm {
        /// Secret name
        name: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command line.
///
/// Backends are opened once, directory first, before the subcommand runs.
/// `completions` needs no backends and skips that step.
pub fn execute(cli: Cli, registry: &Registry) -> Result<()> {
    let config = cli.global.into_config();

    match cli.command {
        Command::Completions { shell } => completions::execute(shell),
        command => {
            let ctx = Context::open(config, registry)?;
            run(&ctx, command)
        }
    }
}

/// Run a subcommand against opened backends.
pub fn run(ctx: &Context, command: Command) -> Result<()> {
    use Command::*;

    match command {
        Members { json } => members::execute(ctx, json),
        Teams { team, json } => teams::execute(ctx, team.as_deref(), json),
        Share {
            name,
            users,
            teams,
            value,
        } => secrets::share(ctx, &name, &users, &teams, value),
        Get { name } => secrets::get(ctx, &name),
        List { json } => secrets::list(ctx, json),
        Rm { name } => secrets::rm(ctx, &name),
        Completions { shell } => completions::execute(shell),
    }
}
