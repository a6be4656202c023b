//! psst - securely share secrets inside your organization.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use psst::cli::output;
use psst::cli::{execute, Cli};
use psst::core::constants;
use psst::core::registry::Registry;
use psst::error::Error;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };
    let debug = cli.global.debug;

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_VAR).unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("psst=debug")
        } else {
            EnvFilter::new("psst=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let registry = Registry::builtin();
    if let Err(e) = execute(cli, &registry) {
        let suggestion = match &e {
            Error::MissingCredential(var) => Some(format!("run: export {}=<token>", var)),
            Error::UnknownDirectory(_) => Some(format!(
                "pass --directory-backend (one of: {})",
                registry.directory_names().join(", ")
            )),
            Error::UnknownStorage(_) => Some(format!(
                "pass --storage-backend (one of: {})",
                registry.storage_names().join(", ")
            )),
            Error::DirectoryClient { .. } | Error::StorageClient { .. } if !debug => {
                Some("rerun with --debug for details".to_string())
            }
            _ => None,
        };

        output::error(&e.render(debug));
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
