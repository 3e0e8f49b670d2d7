//! `kanban generate`

use super::print_board;
use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use kanban_engine::{BoardSession, KanbanConfig};
use tracing::info;

/// How a generate command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateStatus {
    Committed,
    Cancelled,
}

pub async fn execute_generate_command(
    prompt: &str,
    simulate_latency: bool,
    mut config: KanbanConfig,
    format: OutputFormat,
) -> Result<GenerateStatus> {
    if simulate_latency {
        config.generator.simulate_latency = true;
    }
    let mut session = BoardSession::new(&config);

    let analysis = tokio::select! {
        result = session.generate(prompt) => {
            Some(result.context("generation failed")?)
        }
        _ = tokio::signal::ctrl_c() => None,
    };

    let Some(analysis) = analysis else {
        session.cancel_generation();
        info!("generation interrupted");
        eprintln!("{}", "Generation cancelled".yellow());
        return Ok(GenerateStatus::Cancelled);
    };

    if format == OutputFormat::Table {
        println!(
            "{} {} tasks for a {} ({} complexity)",
            "Generated".bold(),
            session.board().tasks.len(),
            analysis.project_type,
            analysis.complexity
        );
    }
    print_board(session.board(), format)?;
    Ok(GenerateStatus::Committed)
}
