//! `kanban demo`

use super::print_board;
use crate::cli::OutputFormat;
use anyhow::Result;
use kanban_engine::Board;

pub fn execute_demo_command(format: OutputFormat) -> Result<()> {
    print_board(&Board::sample(), format)
}
