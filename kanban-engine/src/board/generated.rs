//! Build a fresh board from a generated task batch

use crate::types::{Board, Task};
use tracing::info;

impl Board {
    /// Build a new default board with every task in the first column.
    ///
    /// Task records and their column entries are inserted together, so the
    /// result always validates. A task whose id repeats an earlier one in the
    /// batch is skipped.
    pub fn from_generated(tasks: Vec<Task>) -> Self {
        Self::from_generated_with_columns(Self::default(), tasks)
    }

    /// Like [`Board::from_generated`], but starting from `template`'s columns.
    ///
    /// Any tasks already in `template` are discarded.
    pub fn from_generated_with_columns(template: Board, tasks: Vec<Task>) -> Self {
        let mut board = template;
        board.tasks.clear();
        for column in board.columns.values_mut() {
            column.task_ids.clear();
        }

        let Some(first) = board.column_order.first().cloned() else {
            info!("board has no columns; generated tasks were not placed");
            return board;
        };

        let mut placed = Vec::with_capacity(tasks.len());
        for task in tasks {
            if board.tasks.contains_key(&task.id) {
                continue;
            }
            placed.push(task.id.clone());
            board.tasks.insert(task.id.clone(), task);
        }

        if let Some(column) = board.columns.get_mut(&first) {
            info!(count = placed.len(), column = %column.title, "placed generated tasks");
            column.task_ids = placed;
        }
        board
    }
}
