//! Configuration loading and parsing

use anyhow::{Context, Result};
use coef_report::{OutputFormat, ReportConfig, StepNames};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub steps: StepNames,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// Pipeline document (JSON)
    pub pipeline: Option<PathBuf>,
    /// Feature names in the order the preprocessor emitted them
    #[serde(default)]
    pub feature_names: Vec<String>,
}

/// Missing keys fall back to the library's [`ReportConfig`] defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub precision: usize,
    pub escape: bool,
    /// Write the report here instead of stdout
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let defaults = ReportConfig::default();
        Self {
            format: defaults.format,
            precision: defaults.precision,
            escape: defaults.escape,
            file: None,
        }
    }
}

impl AppConfig {
    /// Library configuration for this run
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_steps(self.steps.clone())
            .with_format(self.output.format)
            .with_precision(self.output.precision)
            .with_escape(self.output.escape)
    }

    /// Make relative paths relative to `base` (the config file's directory)
    fn resolve_paths(&mut self, base: &Path) {
        if let Some(pipeline) = self.input.pipeline.as_mut() {
            if pipeline.is_relative() {
                *pipeline = base.join(&*pipeline);
            }
        }
        if let Some(file) = self.output.file.as_mut() {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }

    Ok(config)
}
