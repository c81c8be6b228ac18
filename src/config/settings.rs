//! Configuration settings for the Life board

use crate::animation::GenerationsPerMinute;
use crate::game_of_life::{load_grid_auto, patterns, Grid, DEFAULT_GRID_SIZE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub animation: AnimationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub generations_per_minute: GenerationsPerMinute,
    /// Stop on its own after this many generations; run until interrupted if unset
    #[serde(default)]
    pub max_generations: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Text or snapshot file holding the initial state; takes precedence over `pattern`
    #[serde(default)]
    pub initial_state_file: Option<PathBuf>,
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub snapshot_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl OutputFormat {
    /// File extension used when saving a grid in this format
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text | OutputFormat::Visual => "txt",
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                rows: DEFAULT_GRID_SIZE,
                cols: DEFAULT_GRID_SIZE,
            },
            animation: AnimationConfig {
                generations_per_minute: GenerationsPerMinute::default(),
                max_generations: None,
            },
            input: InputConfig {
                initial_state_file: None,
                pattern: "glider".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                snapshot_directory: PathBuf::from("output/snapshots"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.board.rows == 0 || self.board.cols == 0 {
            anyhow::bail!(
                "Board dimensions must be positive, got {}x{}",
                self.board.rows,
                self.board.cols
            );
        }

        if self.animation.max_generations == Some(0) {
            anyhow::bail!("Maximum generations must be positive when set");
        }

        match &self.input.initial_state_file {
            Some(file) if !file.exists() => {
                anyhow::bail!("Initial state file does not exist: {}", file.display());
            }
            Some(_) => {}
            None => {
                if patterns::cells(&self.input.pattern).is_none() {
                    anyhow::bail!("Unknown pattern: {}", self.input.pattern);
                }
            }
        }

        Ok(())
    }

    /// Build the first generation from the configured file or pattern
    pub fn initial_grid(&self) -> Result<Grid> {
        match &self.input.initial_state_file {
            Some(file) => load_grid_auto(file)
                .with_context(|| format!("Failed to load initial state from {}", file.display())),
            None => patterns::named(&self.input.pattern, self.board.rows, self.board.cols),
        }
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.board.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.board.cols = cols;
        }
        if let Some(rate) = cli_overrides.generations_per_minute {
            self.animation.generations_per_minute = rate;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.animation.max_generations = Some(max_generations);
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.input.pattern = pattern.clone();
            // An explicit pattern beats a file named in the config
            if cli_overrides.initial_state_file.is_none() {
                self.input.initial_state_file = None;
            }
        }
        if let Some(ref file) = cli_overrides.initial_state_file {
            self.input.initial_state_file = Some(file.clone());
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.snapshot_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub generations_per_minute: Option<GenerationsPerMinute>,
    pub max_generations: Option<u64>,
    pub initial_state_file: Option<PathBuf>,
    pub pattern: Option<String>,
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.board.rows, 19);
        assert_eq!(settings.initial_grid().unwrap().dimensions(), (19, 19));
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.board.rows = 12;
        settings.animation.generations_per_minute = GenerationsPerMinute::new(200).unwrap();
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.board.rows, 12);
        assert_eq!(loaded.animation.generations_per_minute.get(), 200);
        assert_eq!(loaded.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_rate_out_of_range_is_rejected() {
        let yaml = r#"
board: { rows: 19, cols: 19 }
animation: { generations_per_minute: 400 }
input: { pattern: glider }
output: { format: text, snapshot_directory: out }
"#;
        assert!(serde_yaml::from_str::<Settings>(yaml).is_err());
    }

    #[test]
    fn test_validation_errors() {
        let mut settings = Settings::default();
        settings.board.cols = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.input.pattern = "spaceship".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.input.initial_state_file = Some(PathBuf::from("/does/not/exist.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        settings.input.initial_state_file = Some(PathBuf::from("board.txt"));

        settings.merge_with_cli(&CliOverrides {
            rows: Some(30),
            generations_per_minute: Some(GenerationsPerMinute::new(10).unwrap()),
            pattern: Some("beacon".to_string()),
            ..Default::default()
        });

        assert_eq!(settings.board.rows, 30);
        assert_eq!(settings.board.cols, 19);
        assert_eq!(settings.animation.generations_per_minute.get(), 10);
        assert_eq!(settings.input.pattern, "beacon");
        assert!(settings.input.initial_state_file.is_none());
    }
}
