use clap::Parser;
use std::process;

mod cli;
mod commands;
mod exit_codes;
mod logging;
mod render;

use cli::{Cli, Commands};
use commands::drop::DropArgs;
use commands::generate::GenerateStatus;
use exit_codes::{EXIT_ERROR, EXIT_INTERRUPTED, EXIT_SUCCESS, EXIT_USAGE};
use kanban_engine::{KanbanConfig, KanbanError};

/// Load configuration, honouring `--config` when given
fn load_cli_configuration(explicit: Option<&std::path::Path>) -> anyhow::Result<KanbanConfig> {
    let cwd = std::env::current_dir()?;
    let config = KanbanConfig::load_from(&cwd, explicit)?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = load_cli_configuration(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { prompt } => {
            commands::analyze::execute_analyze_command(&prompt, cli.format)?;
        }
        Commands::Generate {
            prompt,
            simulate_latency,
        } => {
            let status = commands::generate::execute_generate_command(
                &prompt,
                simulate_latency,
                config,
                cli.format,
            )
            .await?;
            if status == GenerateStatus::Cancelled {
                return Ok(EXIT_INTERRUPTED);
            }
        }
        Commands::Demo => commands::demo::execute_demo_command(cli.format)?,
        Commands::Drop {
            board,
            from,
            to,
            item,
            column,
        } => {
            let args = DropArgs {
                board,
                from,
                to,
                item,
                column,
            };
            commands::drop::execute_drop_command(&args, cli.format)?;
        }
    }
    Ok(EXIT_SUCCESS)
}

/// Map an error to an exit code. Malformed drops and bad config are usage errors.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<KanbanError>() {
        Some(
            KanbanError::IndexOutOfRange { .. }
            | KanbanError::DraggedItemMismatch { .. }
            | KanbanError::Config { .. },
        ) => EXIT_USAGE,
        _ => EXIT_ERROR,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::configure_logging(cli.verbose, cli.debug, cli.quiet);

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    };
    process::exit(code);
}
