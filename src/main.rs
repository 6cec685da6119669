//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ff_trade_wizard::{
    cli::{Commands, FfTradeWizard},
    commands::{
        common::CommandContext, players::handle_players, rankings::handle_rankings,
        trade::handle_trade,
    },
};

/// Logs go to stderr so `--json` output on stdout stays machine-readable.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ff_trade_wizard=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = FfTradeWizard::parse();
    init_tracing()?;

    let ctx = CommandContext::new(&app.source)
        .await
        .context("failed to set up the player source")?;

    match app.command {
        Commands::Rankings {
            position,
            limit,
            json,
        } => handle_rankings(&ctx, position, limit, json)?,

        Commands::Players { position, json } => handle_players(&ctx, position, json)?,

        Commands::Trade {
            team_a,
            team_b,
            json,
        } => {
            if let Err(e) = handle_trade(&ctx, team_a, team_b, json) {
                if e.is_validation() {
                    eprintln!("Error: {}", e);
                    std::process::exit(2);
                }
                return Err(e.into());
            }
        }
    }

    Ok(())
}
