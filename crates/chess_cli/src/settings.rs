//! Front-end settings, optionally read from a TOML file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw pieces with Unicode chess glyphs (ASCII letters otherwise)
    pub unicode_pieces: bool,
    /// Frame the board with file letters and rank numbers
    pub show_coordinates: bool,
    /// Where `save` and `load` look when no file is given
    pub record_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unicode_pieces: true,
            show_coordinates: true,
            record_path: "chess_game.json".to_string(),
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing file just means defaults; a
    /// malformed one is reported.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
