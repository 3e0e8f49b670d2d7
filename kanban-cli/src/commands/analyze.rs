//! `kanban analyze`

use crate::cli::OutputFormat;
use crate::render;
use anyhow::Result;
use kanban_engine::analyze_prompt;

pub fn execute_analyze_command(prompt: &str, format: OutputFormat) -> Result<()> {
    let analysis = analyze_prompt(prompt);
    match format {
        OutputFormat::Table => println!("{}", render::analysis_table(&analysis)),
        other => println!("{}", render::to_structured(&analysis, other)?),
    }
    Ok(())
}
