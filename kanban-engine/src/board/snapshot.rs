//! JSON snapshots of a board

use crate::error::Result;
use crate::types::Board;

impl Board {
    /// Parse a board snapshot and check its invariants
    pub fn from_json(text: &str) -> Result<Self> {
        let board: Board = serde_json::from_str(text)?;
        board.validate()?;
        Ok(board)
    }

    /// Pretty-printed JSON snapshot
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
