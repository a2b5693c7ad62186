use crate::{
    constants::{DEFAULT_OUTPUT_DIR, ENV_OUTPUT_DIR},
    error::{LayoutError, Result},
    export::ReportFormat,
    placement::Placement,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Starting layout as a slot sequence, e.g. "1,2,3,4,5,6"
    #[serde(default)]
    pub initial: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub format: ReportFormat,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: ReportFormat::default(),
        }
    }
}

impl Config {
    /// Reads, parses and validates a TOML config file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LayoutError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LayoutError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Config file if given and present, defaults otherwise; env overrides applied last
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let config = Self::load_from_file(path)?;
                info!("Loaded configuration from {}", path.display());
                config
            }
            Some(path) => {
                warn!(
                    "Config file not found: {}, using default settings",
                    path.display()
                );
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_output_dir_override(env::var(ENV_OUTPUT_DIR).ok())?;
        Ok(config)
    }

    /// Blank values are ignored; an existing non-directory path is rejected
    pub fn apply_output_dir_override(&mut self, value: Option<String>) -> Result<()> {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            return Ok(());
        };

        let path = PathBuf::from(value);
        if path.exists() && !path.is_dir() {
            return Err(LayoutError::Config(format!(
                "Output path is not a directory: {}",
                path.display()
            )));
        }
        self.export.output_dir = path;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.export.output_dir.as_os_str().is_empty() {
            return Err(LayoutError::Config(
                "export.output_dir cannot be empty".to_string(),
            ));
        }

        if let Some(initial) = &self.layout.initial {
            Placement::from_slot_sequence(initial)
                .map_err(|e| LayoutError::Config(format!("layout.initial: {e}")))?;
        }

        Ok(())
    }

    /// Starting layout from `layout.initial`, if configured
    pub fn initial_placement(&self) -> Result<Option<Placement>> {
        self.layout
            .initial
            .as_deref()
            .map(Placement::from_slot_sequence)
            .transpose()
    }
}
