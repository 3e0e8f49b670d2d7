//! In-memory kanban board engine
//!
//! This crate holds the core of a single-user kanban board: the board model,
//! the reorder engine behind drag-and-drop, and a keyword-driven generator
//! that turns a free-text project description into a starter set of tasks.
//!
//! ## Overview
//!
//! - **Columns own ordering** - A [`Column`] is an ordered list of task ids; task
//!   records live once in the [`Board`]
//! - **Pure reorders** - [`reorder`] functions take lists and return new lists,
//!   never touching their inputs
//! - **Drops are checked** - [`Board::apply_drop`] validates indices and the
//!   dragged id before it changes anything
//! - **Deterministic generation** - The same prompt on the same day yields the
//!   same tasks, apart from their ids
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_engine::{Board, DragLocation, DropOutcome, DropResult};
//!
//! let mut board = Board::sample();
//!
//! // Drag task-6 from "To Do" to the top of "In Progress"
//! let drop = DropResult::task(
//!     "task-6",
//!     DragLocation::new("column-1", 1),
//!     Some(DragLocation::new("column-2", 0)),
//! );
//! let outcome = board.apply_drop(&drop).unwrap();
//! assert!(matches!(outcome, DropOutcome::Moved { .. }));
//! ```
//!
//! Generating a board from a prompt:
//!
//! ```rust
//! use kanban_engine::{generate_tasks, Board};
//!
//! let tasks = generate_tasks("Build an e-commerce website with cart and checkout");
//! let board = Board::from_generated(tasks);
//! assert!(board.validate().is_ok());
//! ```

pub mod board;
pub mod config;
mod error;
pub mod generate;
pub mod reorder;
pub mod session;
pub mod types;

pub use board::DropOutcome;
pub use config::{BoardConfig, GeneratorConfig, KanbanConfig};
pub use error::{KanbanError, Result};
pub use generate::{
    analyze_prompt, classify_project_type, extract_features, generate_tasks, Complexity,
    Feature, ProjectType, PromptAnalysis, TaskGenerator,
};
pub use reorder::{move_across_columns, reorder_column_order, reorder_within_column};
pub use session::{BoardSession, GenerationTicket};

// Re-export commonly used types
pub use types::{
    Assignee, AssigneeId, Board, Column, ColumnId, DragLocation, DraggableKind, DropResult,
    Priority, Task, TaskId, BOARD_DROPPABLE_ID, DEFAULT_COLUMN_TITLES,
};
