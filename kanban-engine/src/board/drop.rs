//! Apply a finished drag gesture to the board

use crate::error::{KanbanError, Result};
use crate::reorder::{
    check_dragged, move_across_columns, reorder_column_order, reorder_within_column,
};
use crate::types::{Board, Column, ColumnId, DraggableKind, DropResult, TaskId};
use serde::Serialize;
use tracing::debug;

/// What a drop did to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DropOutcome {
    /// Dropped outside any droppable
    Cancelled,
    /// Dropped back where it started
    Unchanged,
    /// A column moved within the column order
    ColumnsReordered,
    /// A task moved within its column
    Reordered { column: ColumnId },
    /// A task moved to another column
    Moved { from: ColumnId, to: ColumnId },
}

impl DropOutcome {
    /// Check if the board changed
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Cancelled | Self::Unchanged)
    }
}

impl Board {
    fn column_or_err(&self, id: &ColumnId) -> Result<&Column> {
        self.find_column(id)
            .ok_or_else(|| KanbanError::ColumnNotFound { id: id.to_string() })
    }

    /// Apply a drop result to the board.
    ///
    /// The board is only mutated once the reorder succeeds, so an error leaves
    /// it untouched.
    pub fn apply_drop(&mut self, drop: &DropResult) -> Result<DropOutcome> {
        let Some(destination) = &drop.destination else {
            return Ok(DropOutcome::Cancelled);
        };
        if drop.is_noop() {
            return Ok(DropOutcome::Unchanged);
        }

        if drop.kind == DraggableKind::Column {
            let column_id = ColumnId::from_string(drop.draggable_id.as_str());
            self.column_order = reorder_column_order(
                &self.column_order,
                drop.source.index,
                destination.index,
                &column_id,
            )?;
            debug!(column = %column_id, to = destination.index, "column dropped");
            return Ok(DropOutcome::ColumnsReordered);
        }

        let task_id = TaskId::from_string(drop.draggable_id.as_str());
        let start = self.column_or_err(&drop.source.droppable_id)?;
        let finish = self.column_or_err(&destination.droppable_id)?;

        if start.id == finish.id {
            if let Some(found) = start.task_ids.get(drop.source.index) {
                check_dragged(found, &task_id)?;
            }
            let column = reorder_within_column(start, drop.source.index, destination.index)?;
            let outcome = DropOutcome::Reordered {
                column: column.id.clone(),
            };
            self.columns.insert(column.id.clone(), column);
            debug!(task = %task_id, ?outcome, "task dropped");
            return Ok(outcome);
        }

        let (new_start, new_finish) = move_across_columns(
            start,
            finish,
            drop.source.index,
            destination.index,
            &task_id,
        )?;
        let outcome = DropOutcome::Moved {
            from: new_start.id.clone(),
            to: new_finish.id.clone(),
        };
        self.columns.insert(new_start.id.clone(), new_start);
        self.columns.insert(new_finish.id.clone(), new_finish);
        debug!(task = %task_id, ?outcome, "task dropped");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DragLocation;

    fn task_ids(board: &Board, column: &str) -> Vec<String> {
        board.columns[&ColumnId::from(column)]
            .task_ids
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_cancelled_drop_changes_nothing() {
        let mut board = Board::sample();
        let before = board.clone();
        let drop = DropResult::task("task-3", DragLocation::new("column-1", 0), None);
        let outcome = board.apply_drop(&drop).unwrap();
        assert_eq!(outcome, DropOutcome::Cancelled);
        assert!(!outcome.changed());
        assert_eq!(board, before);
    }

    #[test]
    fn test_same_slot_drop_changes_nothing() {
        let mut board = Board::sample();
        let before = board.clone();
        let slot = DragLocation::new("column-2", 1);
        let drop = DropResult::task("task-4", slot.clone(), Some(slot));
        assert_eq!(board.apply_drop(&drop).unwrap(), DropOutcome::Unchanged);
        assert_eq!(board, before);
    }

    #[test]
    fn test_reorder_within_column() {
        let mut board = Board::sample();
        let drop = DropResult::task(
            "task-3",
            DragLocation::new("column-1", 0),
            Some(DragLocation::new("column-1", 1)),
        );
        let outcome = board.apply_drop(&drop).unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Reordered {
                column: "column-1".into()
            }
        );
        assert_eq!(task_ids(&board, "column-1"), ["task-6", "task-3"]);
        board.validate().unwrap();
    }

    #[test]
    fn test_move_between_columns() {
        let mut board = Board::sample();
        let drop = DropResult::task(
            "task-1",
            DragLocation::new("column-2", 0),
            Some(DragLocation::new("column-3", 2)),
        );
        let outcome = board.apply_drop(&drop).unwrap();
        assert!(matches!(outcome, DropOutcome::Moved { .. }));
        assert_eq!(task_ids(&board, "column-2"), ["task-4"]);
        assert_eq!(task_ids(&board, "column-3"), ["task-2", "task-5", "task-1"]);
        board.validate().unwrap();
    }

    #[test]
    fn test_column_drop() {
        let mut board = Board::sample();
        let drop = DropResult::column("column-3", 2, 0);
        assert_eq!(board.apply_drop(&drop).unwrap(), DropOutcome::ColumnsReordered);
        let order: Vec<_> = board.column_order.iter().map(|c| c.as_str()).collect();
        assert_eq!(order, ["column-3", "column-1", "column-2"]);
    }

    #[test]
    fn test_unknown_column_leaves_board_untouched() {
        let mut board = Board::sample();
        let before = board.clone();
        let drop = DropResult::task(
            "task-1",
            DragLocation::new("column-2", 0),
            Some(DragLocation::new("column-9", 0)),
        );
        assert!(matches!(
            board.apply_drop(&drop),
            Err(KanbanError::ColumnNotFound { .. })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_mismatched_task_leaves_board_untouched() {
        let mut board = Board::sample();
        let before = board.clone();
        let drop = DropResult::task(
            "task-4",
            DragLocation::new("column-2", 0),
            Some(DragLocation::new("column-1", 0)),
        );
        assert!(board.apply_drop(&drop).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_same_column_mismatched_task_leaves_board_untouched() {
        let mut board = Board::sample();
        let before = board.clone();
        let drop = DropResult::task(
            "task-1",
            DragLocation::new("column-1", 0),
            Some(DragLocation::new("column-1", 1)),
        );
        assert!(matches!(
            board.apply_drop(&drop),
            Err(KanbanError::DraggedItemMismatch { .. })
        ));
        assert_eq!(board, before);
    }
}
