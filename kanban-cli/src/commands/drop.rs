//! `kanban drop`

use crate::cli::OutputFormat;
use crate::render;
use anyhow::{Context, Result};
use kanban_engine::{Board, DragLocation, DraggableKind, DropOutcome, DropResult};
use serde::Serialize;
use std::io::Read;

/// Arguments of one drop, as given on the command line
#[derive(Debug, Clone)]
pub struct DropArgs {
    pub board: String,
    pub from: DragLocation,
    pub to: Option<DragLocation>,
    pub item: String,
    pub column: bool,
}

#[derive(Serialize)]
struct DropReport<'a> {
    outcome: &'a DropOutcome,
    board: &'a Board,
}

/// Read a board snapshot from a file, or from stdin for `-`
pub fn read_board(source: &str) -> Result<Board> {
    let text = if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read board from stdin")?;
        text
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read board from {}", source))?
    };

    Board::from_json(&text).context("invalid board snapshot")
}

impl DropArgs {
    fn to_drop_result(&self) -> DropResult {
        DropResult {
            draggable_id: self.item.clone(),
            kind: if self.column {
                DraggableKind::Column
            } else {
                DraggableKind::Task
            },
            source: self.from.clone(),
            destination: self.to.clone(),
        }
    }
}

pub fn execute_drop_command(args: &DropArgs, format: OutputFormat) -> Result<()> {
    let mut board = read_board(&args.board)?;
    let outcome = board
        .apply_drop(&args.to_drop_result())
        .with_context(|| format!("cannot drop '{}'", args.item))?;

    match format {
        OutputFormat::Table => {
            println!("{}", render::outcome_line(&outcome));
            println!("{}", render::board_table(&board));
        }
        other => {
            let report = DropReport {
                outcome: &outcome,
                board: &board,
            };
            println!("{}", render::to_structured(&report, other)?);
        }
    }
    Ok(())
}
