//! Newtype identifiers for board entities.
//!
//! Ids are opaque strings. Freshly minted ids carry a short prefix and a ULID
//! (`task-01J...`), but ids read from a board snapshot can be anything
//! (`task-1`, `column-2`), so nothing may parse them.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh, unique id
            pub fn new() -> Self {
                Self(format!("{}-{}", $prefix, ulid::Ulid::new()))
            }

            /// Wrap an existing id string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a task card
    TaskId,
    "task"
);

define_id!(
    /// Identifier of a board column
    ColumnId,
    "column"
);

define_id!(
    /// Identifier of a person tasks can be assigned to
    AssigneeId,
    "user"
);
