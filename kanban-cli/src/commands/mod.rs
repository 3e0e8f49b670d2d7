//! Command handlers

pub mod analyze;
pub mod demo;
pub mod drop;
pub mod generate;

use crate::cli::OutputFormat;
use crate::render;
use anyhow::Result;
use kanban_engine::Board;

/// Print a board in the requested format
pub(crate) fn print_board(board: &Board, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render::board_table(board)),
        other => println!("{}", render::to_structured(board, other)?),
    }
    Ok(())
}
