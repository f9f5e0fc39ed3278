//! Saved game records.
//!
//! A record is the move log plus a timestamp, written as pretty JSON so it
//! stays readable in a shell.

use anyhow::{Context, Result};
use chess_core::{Board, MoveRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub saved_at: String,
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    /// Snapshot the board's log under the current local time.
    pub fn from_board(board: &Board) -> Self {
        Self {
            saved_at: chrono::Local::now().to_rfc3339(),
            moves: board.move_history().to_vec(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serializing game record")?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&contents).context("parsing game record")
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
