//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use lexgraph_builder::{Direction, DisplayFilters};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Default display filters for the graph command
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Default display filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Layout direction
    #[serde(default)]
    pub direction: Direction,

    /// Show entity nodes and participation edges
    #[serde(default = "default_true")]
    pub show_entities: bool,

    /// Show sequential edges between consecutive events
    #[serde(default = "default_true")]
    pub show_sequential_edges: bool,

    /// Minimum distinct events an entity must appear in
    #[serde(default = "default_min_appearances")]
    pub min_entity_appearances: usize,
}

impl DisplaySettings {
    /// The filters these settings describe.
    pub fn filters(&self) -> DisplayFilters {
        DisplayFilters {
            direction: self.direction,
            show_entities: self.show_entities,
            show_sequential_edges: self.show_sequential_edges,
            min_entity_appearances: self.min_entity_appearances,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".lexgraph").join("config.toml"))
    }

    /// Load configuration from the default path or create the default.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a specific path; missing files yield the
    /// default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            direction: Direction::TopToBottom,
            show_entities: true,
            show_sequential_edges: true,
            min_entity_appearances: 1,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_min_appearances() -> usize {
    1
}
