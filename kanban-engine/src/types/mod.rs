//! Core types for the kanban engine

mod board;
mod drag;
mod ids;
mod task;

// Re-export all types
pub use board::{Board, Column, DEFAULT_COLUMN_TITLES};
pub use drag::{DragLocation, DraggableKind, DropResult, BOARD_DROPPABLE_ID};
pub use ids::{AssigneeId, ColumnId, TaskId};
pub use task::{Assignee, Priority, Task};
