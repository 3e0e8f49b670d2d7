//! Column and task management on an in-memory board

use crate::error::{KanbanError, Result};
use crate::types::{Board, Column, ColumnId, Task, TaskId};
use tracing::debug;

impl Board {
    /// Append a new, empty column with the given title.
    ///
    /// The title is trimmed; a blank title is rejected.
    pub fn add_column(&mut self, title: &str) -> Result<ColumnId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(KanbanError::invalid_value(
                "title",
                "column title cannot be empty",
            ));
        }

        let column = Column::new(ColumnId::new(), title);
        let id = column.id.clone();
        self.columns.insert(id.clone(), column);
        self.column_order.push(id.clone());
        debug!(column = %id, title, "added column");
        Ok(id)
    }

    /// Add a task record to the end of a column.
    pub fn add_task(&mut self, column_id: &ColumnId, task: Task) -> Result<TaskId> {
        let title = task.title.trim();
        if title.is_empty() {
            return Err(KanbanError::invalid_value("title", "task title cannot be empty"));
        }
        if self.tasks.contains_key(&task.id) {
            return Err(KanbanError::duplicate_id("task", task.id.to_string()));
        }
        let column = self
            .columns
            .get_mut(column_id)
            .ok_or_else(|| KanbanError::ColumnNotFound {
                id: column_id.to_string(),
            })?;

        let id = task.id.clone();
        column.task_ids.push(id.clone());
        self.tasks.insert(id.clone(), task);
        debug!(task = %id, column = %column_id, "added task");
        Ok(id)
    }

    /// Remove a task from the board, returning its record.
    pub fn remove_task(&mut self, id: &TaskId) -> Result<Task> {
        let task = self
            .tasks
            .remove(id)
            .ok_or_else(|| KanbanError::TaskNotFound { id: id.to_string() })?;
        for column in self.columns.values_mut() {
            column.task_ids.retain(|t| t != id);
        }
        debug!(task = %id, "removed task");
        Ok(task)
    }
}
