//! Output rendering for boards, analyses and drop outcomes

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use kanban_engine::{Board, DropOutcome, Priority, PromptAnalysis, Task};
use serde::Serialize;

/// Serialize `value` in a machine-readable format
pub fn to_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(value).context("failed to encode YAML"),
        _ => serde_json::to_string_pretty(value).context("failed to encode JSON"),
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

fn task_cell(task: &Task) -> Cell {
    let mut lines = vec![task.title.clone()];

    let mut meta = vec![task.priority.to_string()];
    if let Some(assignee) = &task.assignee {
        meta.push(format!("@{}", assignee.initials()));
    }
    if let Some(due) = task.due_date {
        meta.push(format!("due {}", due));
    }
    lines.push(meta.join("  "));

    if !task.tags.is_empty() {
        lines.push(
            task.tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" "),
        );
    }

    Cell::new(lines.join("\n")).fg(priority_color(task.priority))
}

/// Render the board's columns side by side, in column order
pub fn board_table(board: &Board) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let columns: Vec<_> = board.ordered_columns().collect();
    table.set_header(
        columns
            .iter()
            .map(|c| format!("{} ({})", c.title, c.len()))
            .collect::<Vec<_>>(),
    );

    let depth = columns.iter().map(|c| c.len()).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(columns.iter().map(|column| {
            column
                .task_ids
                .get(row)
                .and_then(|id| board.find_task(id))
                .map(task_cell)
                .unwrap_or_else(|| Cell::new(""))
        }));
    }
    table
}

/// Render an analysis as a two-column table
pub fn analysis_table(analysis: &PromptAnalysis) -> Table {
    let features = if analysis.features.is_empty() {
        "(none)".to_string()
    } else {
        analysis
            .features
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Property", "Value"]);
    table.add_row(vec![
        Cell::new("Project type"),
        Cell::new(analysis.project_type.to_string()),
    ]);
    table.add_row(vec![Cell::new("Features"), Cell::new(features)]);
    table.add_row(vec![
        Cell::new("Complexity"),
        Cell::new(analysis.complexity.to_string()),
    ]);
    table
}

/// One-line summary of a drop
pub fn outcome_line(outcome: &DropOutcome) -> String {
    match outcome {
        DropOutcome::Cancelled => "Drop cancelled: nothing changed".dimmed().to_string(),
        DropOutcome::Unchanged => "Dropped in place: nothing changed".dimmed().to_string(),
        DropOutcome::ColumnsReordered => "Columns reordered".green().to_string(),
        DropOutcome::Reordered { column } => {
            format!("{} {}", "Reordered within".green(), column)
        }
        DropOutcome::Moved { from, to } => {
            format!("{} {} -> {}", "Moved".green(), from, to)
        }
    }
}
