//! Drag-and-drop reordering of task and column lists.
//!
//! Every function here is pure: inputs are borrowed and new values are returned.
//! Committing the result into a [`Board`](crate::Board) is the caller's job.
//!
//! All three operations are the same remove-then-insert splice applied to a
//! different list: a column's task ids, a pair of columns, or the board's
//! column order.

use crate::error::{KanbanError, Result};
use crate::types::{Column, ColumnId, TaskId};
use tracing::trace;

/// Move the element at `from` to `to` within one list.
///
/// Both indices address the list as it is before the move, so both must be
/// `< len`. `label` names the list in errors.
fn splice_within<T: Clone>(items: &[T], from: usize, to: usize, label: &str) -> Result<Vec<T>> {
    let len = items.len();
    if from >= len {
        return Err(KanbanError::index_out_of_range(label, from, len));
    }
    if to >= len {
        return Err(KanbanError::index_out_of_range(label, to, len));
    }

    let mut result = items.to_vec();
    let item = result.remove(from);
    result.insert(to, item);
    Ok(result)
}

pub(crate) fn check_dragged<T: AsRef<str>>(found: &T, dragged: &T) -> Result<()> {
    if found.as_ref() != dragged.as_ref() {
        return Err(KanbanError::DraggedItemMismatch {
            dragged: dragged.as_ref().to_string(),
            found: found.as_ref().to_string(),
        });
    }
    Ok(())
}

/// Move a task to a new index within the same column.
///
/// Equal indices return an identical list.
pub fn reorder_within_column(
    column: &Column,
    source_index: usize,
    dest_index: usize,
) -> Result<Column> {
    let label = format!("column '{}'", column.id);
    let task_ids = splice_within(&column.task_ids, source_index, dest_index, &label)?;
    trace!(column = %column.id, source_index, dest_index, "reordered column");

    Ok(Column {
        task_ids,
        ..column.clone()
    })
}

/// Move a task from one column to another.
///
/// `task_id` must be the id at `source_index` in `source`. `dest_index` may be
/// equal to the destination's length to append at the end. Returns the new
/// source and destination columns; the task is in exactly one of them.
pub fn move_across_columns(
    source: &Column,
    dest: &Column,
    source_index: usize,
    dest_index: usize,
    task_id: &TaskId,
) -> Result<(Column, Column)> {
    if source.id == dest.id {
        return Err(KanbanError::invalid_value(
            "destination",
            format!("column '{}' is both source and destination", source.id),
        ));
    }

    let found = source.task_ids.get(source_index).ok_or_else(|| {
        KanbanError::index_out_of_range(
            format!("column '{}'", source.id),
            source_index,
            source.len(),
        )
    })?;
    check_dragged(found, task_id)?;

    if dest_index > dest.len() {
        return Err(KanbanError::index_out_of_range(
            format!("column '{}'", dest.id),
            dest_index,
            dest.len(),
        ));
    }
    if dest.contains(task_id) {
        return Err(KanbanError::duplicate_id("task", task_id.to_string()));
    }

    let mut source_ids = source.task_ids.clone();
    source_ids.remove(source_index);

    let mut dest_ids = dest.task_ids.clone();
    dest_ids.insert(dest_index, task_id.clone());

    trace!(
        task = %task_id,
        from = %source.id,
        to = %dest.id,
        source_index,
        dest_index,
        "moved task across columns"
    );

    Ok((
        Column {
            task_ids: source_ids,
            ..source.clone()
        },
        Column {
            task_ids: dest_ids,
            ..dest.clone()
        },
    ))
}

/// Move a whole column to a new position in the board's column order.
///
/// `column_id` must be the id at `source_index`.
pub fn reorder_column_order(
    order: &[ColumnId],
    source_index: usize,
    dest_index: usize,
    column_id: &ColumnId,
) -> Result<Vec<ColumnId>> {
    let found = order
        .get(source_index)
        .ok_or_else(|| KanbanError::index_out_of_range("column order", source_index, order.len()))?;
    check_dragged(found, column_id)?;

    let result = splice_within(order, source_index, dest_index, "column order")?;
    trace!(column = %column_id, source_index, dest_index, "reordered columns");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(id: &str, ids: &[&str]) -> Column {
        Column::new(id, id.to_uppercase()).with_task_ids(ids.iter().copied())
    }

    fn ids(column: &Column) -> Vec<&str> {
        column.task_ids.iter().map(|t| t.as_str()).collect()
    }

    #[test]
    fn test_reorder_forward() {
        let col = column("todo", &["a", "b", "c", "d"]);
        let result = reorder_within_column(&col, 0, 2).unwrap();
        assert_eq!(ids(&result), ["b", "c", "a", "d"]);
        assert_eq!(result.title, col.title);
    }

    #[test]
    fn test_reorder_backward() {
        let col = column("todo", &["a", "b", "c", "d"]);
        let result = reorder_within_column(&col, 3, 1).unwrap();
        assert_eq!(ids(&result), ["a", "d", "b", "c"]);
    }

    #[test]
    fn test_reorder_same_index_is_identity() {
        let col = column("todo", &["a", "b", "c"]);
        let result = reorder_within_column(&col, 1, 1).unwrap();
        assert_eq!(result, col);
    }

    #[test]
    fn test_reorder_does_not_touch_input() {
        let col = column("todo", &["a", "b"]);
        let _ = reorder_within_column(&col, 0, 1).unwrap();
        assert_eq!(ids(&col), ["a", "b"]);
    }

    #[test]
    fn test_reorder_out_of_range() {
        let col = column("todo", &["a", "b"]);
        assert!(matches!(
            reorder_within_column(&col, 2, 0),
            Err(KanbanError::IndexOutOfRange { index: 2, len: 2, .. })
        ));
        assert!(matches!(
            reorder_within_column(&col, 0, 2),
            Err(KanbanError::IndexOutOfRange { index: 2, .. })
        ));
        assert!(reorder_within_column(&column("empty", &[]), 0, 0).is_err());
    }

    #[test]
    fn test_move_across_columns() {
        let todo = column("todo", &["a", "b", "c"]);
        let done = column("done", &["x", "y"]);

        let (new_todo, new_done) =
            move_across_columns(&todo, &done, 1, 1, &TaskId::from("b")).unwrap();

        assert_eq!(ids(&new_todo), ["a", "c"]);
        assert_eq!(ids(&new_done), ["x", "b", "y"]);
        assert_eq!(new_todo.id, todo.id);
        assert_eq!(new_done.id, done.id);
    }

    #[test]
    fn test_move_into_empty_column_and_append() {
        let todo = column("todo", &["a"]);
        let done = column("done", &[]);
        let (new_todo, new_done) =
            move_across_columns(&todo, &done, 0, 0, &TaskId::from("a")).unwrap();
        assert!(new_todo.is_empty());
        assert_eq!(ids(&new_done), ["a"]);

        let doing = column("doing", &["p", "q"]);
        let (_, appended) =
            move_across_columns(&new_done, &doing, 0, 2, &TaskId::from("a")).unwrap();
        assert_eq!(ids(&appended), ["p", "q", "a"]);
    }

    #[test]
    fn test_move_rejects_mismatched_task() {
        let todo = column("todo", &["a", "b"]);
        let done = column("done", &[]);
        assert!(matches!(
            move_across_columns(&todo, &done, 0, 0, &TaskId::from("b")),
            Err(KanbanError::DraggedItemMismatch { .. })
        ));
    }

    #[test]
    fn test_move_rejects_bad_indices() {
        let todo = column("todo", &["a"]);
        let done = column("done", &["x"]);
        let a = TaskId::from("a");
        assert!(move_across_columns(&todo, &done, 1, 0, &a).is_err());
        assert!(move_across_columns(&todo, &done, 0, 2, &a).is_err());
    }

    #[test]
    fn test_move_rejects_same_column_and_duplicates() {
        let todo = column("todo", &["a"]);
        assert!(move_across_columns(&todo, &todo, 0, 0, &TaskId::from("a")).is_err());

        let done = column("done", &["a"]);
        assert!(matches!(
            move_across_columns(&todo, &done, 0, 0, &TaskId::from("a")),
            Err(KanbanError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_reorder_column_order() {
        let order: Vec<ColumnId> = ["c1", "c2", "c3"].into_iter().map(ColumnId::from).collect();
        let result = reorder_column_order(&order, 2, 0, &ColumnId::from("c3")).unwrap();
        let result: Vec<_> = result.iter().map(|c| c.as_str()).collect();
        assert_eq!(result, ["c3", "c1", "c2"]);

        assert!(matches!(
            reorder_column_order(&order, 0, 1, &ColumnId::from("c2")),
            Err(KanbanError::DraggedItemMismatch { .. })
        ));
    }
}
