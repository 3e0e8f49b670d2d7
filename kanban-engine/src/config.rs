//! Configuration for the kanban engine, loaded with Figment.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. A config file: the explicit path if given, otherwise the first
//!    `config.{toml,yaml,yml,json}` found in a `.kanban` directory at or above
//!    the starting directory
//! 3. `KANBAN_` environment variables, `__` separating nested keys
//!    (`KANBAN_GENERATOR__MIN_TASKS=5`)

use crate::error::{KanbanError, Result};
use crate::types::{Board, DEFAULT_COLUMN_TITLES};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, trace};

/// Name of the per-project directory holding the config file
pub const CONFIG_DIR: &str = ".kanban";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "KANBAN_";

const CONFIG_FILE_NAMES: &[&str] = &["config.toml", "config.yaml", "config.yml", "config.json"];

/// Task generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Batches smaller than this get the generic fallback tasks appended
    pub min_tasks: usize,
    /// Pause between stages as if a remote service were thinking
    pub simulate_latency: bool,
    /// Length of each simulated stage, in milliseconds
    pub stage_delays_ms: Vec<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_tasks: 3,
            simulate_latency: false,
            stage_delays_ms: vec![800, 800, 600],
        }
    }
}

impl GeneratorConfig {
    /// Simulated stage delays; empty when latency simulation is off
    pub fn stage_delays(&self) -> Vec<Duration> {
        if !self.simulate_latency {
            return Vec::new();
        }
        self.stage_delays_ms
            .iter()
            .map(|ms| Duration::from_millis(*ms))
            .collect()
    }
}

/// Board layout settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Titles of the columns a new board starts with, left to right
    pub column_titles: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            column_titles: DEFAULT_COLUMN_TITLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanConfig {
    pub generator: GeneratorConfig,
    pub board: BoardConfig,
}

impl KanbanConfig {
    /// Load configuration, discovering a config file from `start` unless
    /// `explicit` names one.
    pub fn load_from(start: &Path, explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(KanbanError::config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => discover_config_file(start),
        };

        let config: Self = build_figment(file.as_deref()).extract()?;
        config.validate()?;
        debug!(?file, "loaded configuration");
        Ok(config)
    }

    /// Check the values make sense together
    pub fn validate(&self) -> Result<()> {
        if self.generator.min_tasks == 0 {
            return Err(KanbanError::config("generator.min_tasks must be at least 1"));
        }
        if self.board.column_titles.is_empty() {
            return Err(KanbanError::config(
                "board.column_titles must name at least one column",
            ));
        }
        if let Some(blank) = self
            .board
            .column_titles
            .iter()
            .position(|t| t.trim().is_empty())
        {
            return Err(KanbanError::config(format!(
                "board.column_titles[{}] is blank",
                blank
            )));
        }
        Ok(())
    }

    /// An empty board with the configured columns
    pub fn board_template(&self) -> Board {
        Board::with_column_titles(self.board.column_titles.iter().map(|t| t.trim()))
    }
}

fn build_figment(file: Option<&Path>) -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(KanbanConfig::default()));

    if let Some(path) = file {
        trace!("Loading config file: {}", path.display());
        figment = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            _ => figment.merge(Toml::file(path)),
        };
    }

    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Walk up from `start` looking for `.kanban/config.*`
fn discover_config_file(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        let config_dir = dir.join(CONFIG_DIR);
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| config_dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
