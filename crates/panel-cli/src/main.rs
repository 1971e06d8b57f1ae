mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use panel_api::AdminClient;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a server connection
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "panelctl", &mut std::io::stdout());
            Ok(())
        }

        // Redeem commands require a connected admin client
        Command::Redeem(args) => {
            let client = build_client(&cli.global)?;
            tracing::debug!(command = ?args.command, "dispatching redeem command");
            commands::redeem::handle(&client, args, &cli.global).await
        }
    }
}

/// Build an `AdminClient` from the config file, profile, and CLI overrides.
fn build_client(global: &cli::GlobalOpts) -> Result<AdminClient, CliError> {
    let cfg = config::load_config_or_default();
    let profile_name = config::active_profile_name(global, &cfg);

    let connection = if let Some(profile) = cfg.profiles.get(&profile_name) {
        config::resolve_profile(profile, &profile_name, global)?
    } else {
        config::resolve_from_flags(&profile_name, global)?
    };

    AdminClient::from_token(
        &connection.server,
        &connection.token,
        &connection.transport,
    )
    .map_err(CliError::from)
}
