use crate::case::Case;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".casify.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub case: Case,
    pub format: OutputFormat,
    pub color: bool,
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: Case::Snake,
            format: OutputFormat::Text,
            color: true,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

/// On-disk form; anything left out keeps the value from the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub case: Option<Case>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub parallel_threshold: Option<usize>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        case: Option<Case>,
        format: Option<OutputFormat>,
        no_color: bool,
    ) -> Result<Self> {
        let mut config =
            Self::load_layers(Self::global_config_path(), Some(PathBuf::from(LOCAL_CONFIG_FILE)))?;

        if let Some(case) = case {
            config.case = case;
        }
        if let Some(format) = format {
            config.format = format;
        }
        if no_color {
            config.color = false;
        }

        log::debug!("effective config: {:?}", config);
        Ok(config)
    }

    /// Apply the global then the local file on top of the defaults. Missing files are skipped.
    pub fn load_layers(global: Option<PathBuf>, local: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                log::debug!("loading config from {}", path.display());
                config = config.merge(Self::from_file(&path)?);
            } else {
                log::debug!("no config at {}", path.display());
            }
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(case) = other.case {
            self.case = case;
        }
        if let Some(format) = other.format {
            self.format = format;
        }
        if let Some(color) = other.color {
            self.color = color;
        }
        if let Some(threshold) = other.parallel_threshold {
            self.parallel_threshold = threshold;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casify").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
