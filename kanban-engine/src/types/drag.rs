//! Drop results reported by the drag gesture layer

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// What kind of item was dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraggableKind {
    #[default]
    Task,
    Column,
}

/// A slot in a droppable list: which list, and the index within it.
///
/// For task drags the droppable is a column. For column drags the droppable is
/// the board itself and `droppable_id` is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    pub droppable_id: ColumnId,
    pub index: usize,
}

impl DragLocation {
    pub fn new(droppable_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// The outcome of a finished drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    pub draggable_id: String,
    #[serde(default, rename = "type")]
    pub kind: DraggableKind,
    pub source: DragLocation,
    /// `None` when the item was dropped outside any droppable
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

impl DropResult {
    /// A task dragged from `source` to `destination`
    pub fn task(
        task_id: impl Into<String>,
        source: DragLocation,
        destination: Option<DragLocation>,
    ) -> Self {
        Self {
            draggable_id: task_id.into(),
            kind: DraggableKind::Task,
            source,
            destination,
        }
    }

    /// A whole column dragged from one position in the column order to another
    pub fn column(column_id: impl Into<String>, source_index: usize, dest_index: usize) -> Self {
        Self {
            draggable_id: column_id.into(),
            kind: DraggableKind::Column,
            source: DragLocation::new(BOARD_DROPPABLE_ID, source_index),
            destination: Some(DragLocation::new(BOARD_DROPPABLE_ID, dest_index)),
        }
    }

    /// Check if the item was dropped back exactly where it started
    pub fn is_noop(&self) -> bool {
        self.destination.as_ref().is_some_and(|dest| dest == &self.source)
    }
}

/// Droppable id used for the board-level list of columns
pub const BOARD_DROPPABLE_ID: &str = "all-columns";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_noop() {
        let drop = DropResult::task(
            "task-1",
            DragLocation::new("column-1", 0),
            Some(DragLocation::new("column-1", 0)),
        );
        assert!(drop.is_noop());

        let cancelled = DropResult::task("task-1", DragLocation::new("column-1", 0), None);
        assert!(!cancelled.is_noop());
    }

    #[test]
    fn test_deserialize_gesture_payload() {
        let json = r#"{
            "draggableId": "column-2",
            "type": "column",
            "source": {"droppableId": "all-columns", "index": 1},
            "destination": {"droppableId": "all-columns", "index": 0}
        }"#;
        let drop: DropResult = serde_json::from_str(json).unwrap();
        assert_eq!(drop.kind, DraggableKind::Column);
        assert_eq!(drop, DropResult::column("column-2", 1, 0));
    }

    #[test]
    fn test_kind_defaults_to_task() {
        let json = r#"{
            "draggableId": "task-1",
            "source": {"droppableId": "column-1", "index": 0}
        }"#;
        let drop: DropResult = serde_json::from_str(json).unwrap();
        assert_eq!(drop.kind, DraggableKind::Task);
        assert!(drop.destination.is_none());
    }
}
