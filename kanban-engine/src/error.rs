//! Error types for the kanban engine

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// A drag index falls outside the list it addresses
    #[error("index {index} out of range for {list} of length {len}")]
    IndexOutOfRange {
        list: String,
        index: usize,
        len: usize,
    },

    /// The dragged item is not the item found at the source index
    #[error("dragged item '{dragged}' does not match '{found}' at the source index")]
    DraggedItemMismatch { dragged: String, found: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Board structure no longer holds one of its invariants
    #[error("board invariant violated: {message}")]
    InvariantViolated { message: String },

    /// A generation finished after it was cancelled or superseded
    #[error("generation {ticket} is stale (current generation is {current})")]
    StaleGeneration { ticket: u64, current: u64 },

    /// Configuration could not be loaded or failed validation
    #[error("configuration error: {message}")]
    Config { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(list: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            list: list.into(),
            index,
            len,
        }
    }

    /// Create an invariant violation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolated {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if the caller can simply discard this result and carry on.
    ///
    /// Stale generations are superseded by newer state, so they are not failures
    /// from the user's point of view.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Self::StaleGeneration { .. })
    }
}

impl From<figment::Error> for KanbanError {
    fn from(err: figment::Error) -> Self {
        Self::config(err.to_string())
    }
}
