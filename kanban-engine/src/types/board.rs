//! Board-level types: Board, Column

use super::ids::{ColumnId, TaskId};
use super::task::{Assignee, Priority, Task};
use crate::error::{KanbanError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Titles of the columns every new board starts with
pub const DEFAULT_COLUMN_TITLES: &[&str] = &["To Do", "In Progress", "Done"];

/// A column is a named, ordered bucket of task references.
///
/// The column owns the ordering, not the tasks themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Set the task ids
    pub fn with_task_ids<I, T>(mut self, task_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        self.task_ids = task_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Number of tasks in the column
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Check if the column has no tasks
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Check if the column references a task
    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_ids.contains(id)
    }
}

/// The full board: task records, columns, and the order columns are shown in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default)]
    pub tasks: BTreeMap<TaskId, Task>,
    #[serde(default)]
    pub columns: BTreeMap<ColumnId, Column>,
    #[serde(default)]
    pub column_order: Vec<ColumnId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_column_titles(DEFAULT_COLUMN_TITLES.iter().copied())
    }
}

impl Board {
    /// Create a board with no columns and no tasks
    pub fn empty() -> Self {
        Self {
            tasks: BTreeMap::new(),
            columns: BTreeMap::new(),
            column_order: Vec::new(),
        }
    }

    /// Create an empty board with one column per title.
    ///
    /// Columns get positional ids `column-1`, `column-2`, ...
    pub fn with_column_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut board = Self::empty();
        for (index, title) in titles.into_iter().enumerate() {
            let column = Column::new(format!("column-{}", index + 1), title);
            board.column_order.push(column.id.clone());
            board.columns.insert(column.id.clone(), column);
        }
        board
    }

    /// The demo board: six tasks spread over the three default columns.
    pub fn sample() -> Self {
        let date = |m: u32, d: u32| NaiveDate::from_ymd_opt(2023, m, d);
        let john = Assignee::new("user-1", "John Doe");
        let alice = Assignee::new("user-2", "Alice Smith");
        let bob = Assignee::new("user-3", "Bob Johnson");
        let emily = Assignee::new("user-4", "Emily Chen");

        let mut tasks = vec![
            Task::new("Create login page", Priority::High)
                .with_id("task-1")
                .with_description("Implement UI components for the login screen")
                .with_tags(["feature", "ui"])
                .with_assignee(john.clone()),
            Task::new("Setup authentication API", Priority::High)
                .with_id("task-2")
                .with_description("Integrate with backend authentication service")
                .with_tags(["api", "security"])
                .with_assignee(alice.clone()),
            Task::new("Design system documentation", Priority::Medium)
                .with_id("task-3")
                .with_description("Create comprehensive documentation for UI components")
                .with_tags(["documentation", "design"])
                .with_assignee(bob),
            Task::new("User profile page", Priority::Medium)
                .with_id("task-4")
                .with_description("Implement user profile page with settings")
                .with_tags(["feature", "ui"])
                .with_assignee(john),
            Task::new("Fix navigation bug", Priority::High)
                .with_id("task-5")
                .with_description("Resolve issue with navigation menu on mobile")
                .with_tags(["bug", "ui"])
                .with_assignee(emily),
            Task::new("Implement dark mode", Priority::Low)
                .with_id("task-6")
                .with_description("Add dark mode support and theme toggle")
                .with_tags(["improvement", "ui"])
                .with_assignee(alice),
        ];
        let due = [date(5, 20), date(5, 18), date(5, 25), date(5, 22), None, date(5, 30)];
        for (task, due) in tasks.iter_mut().zip(due) {
            task.due_date = due;
        }

        let mut board = Self::default();
        board.tasks = tasks.into_iter().map(|t| (t.id.clone(), t)).collect();
        for (column, ids) in [
            ("column-1", ["task-3", "task-6"]),
            ("column-2", ["task-1", "task-4"]),
            ("column-3", ["task-2", "task-5"]),
        ] {
            if let Some(column) = board.columns.get_mut(&ColumnId::from(column)) {
                column.task_ids = ids.iter().map(|id| TaskId::from(*id)).collect();
            }
        }
        board
    }

    /// Find a column by ID
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Find a task by ID
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// The first column in display order ("To Do" on a default board)
    pub fn first_column(&self) -> Option<&Column> {
        self.column_order.first().and_then(|id| self.columns.get(id))
    }

    /// Columns in display order
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order.iter().filter_map(|id| self.columns.get(id))
    }

    /// The column currently holding a task
    pub fn column_of(&self, task: &TaskId) -> Option<&Column> {
        self.ordered_columns().find(|c| c.contains(task))
    }

    /// Resolve a column's task ids to task records, in display order
    pub fn column_tasks(&self, id: &ColumnId) -> Result<Vec<&Task>> {
        let column = self
            .find_column(id)
            .ok_or_else(|| KanbanError::ColumnNotFound { id: id.to_string() })?;
        column
            .task_ids
            .iter()
            .map(|task_id| {
                self.tasks.get(task_id).ok_or_else(|| KanbanError::TaskNotFound {
                    id: task_id.to_string(),
                })
            })
            .collect()
    }

    /// Check the board's referential invariants.
    ///
    /// Every referenced task exists, every column is stored under its own id
    /// and appears in the order exactly once, and no task sits in two columns.
    pub fn validate(&self) -> Result<()> {
        let mut seen_columns = HashSet::new();
        for id in &self.column_order {
            if !self.columns.contains_key(id) {
                return Err(KanbanError::invariant(format!(
                    "column order references unknown column '{}'",
                    id
                )));
            }
            if !seen_columns.insert(id) {
                return Err(KanbanError::duplicate_id("column", id.to_string()));
            }
        }

        let mut placed: HashSet<&TaskId> = HashSet::new();
        for (key, column) in &self.columns {
            if key != &column.id {
                return Err(KanbanError::invariant(format!(
                    "column stored under '{}' has id '{}'",
                    key, column.id
                )));
            }
            if !seen_columns.contains(key) {
                return Err(KanbanError::invariant(format!(
                    "column '{}' is missing from the column order",
                    key
                )));
            }
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(KanbanError::invariant(format!(
                        "column '{}' references unknown task '{}'",
                        column.id, task_id
                    )));
                }
                if !placed.insert(task_id) {
                    return Err(KanbanError::duplicate_id("task", task_id.to_string()));
                }
            }
        }
        Ok(())
    }
}
