//! Reporter configuration types
//!
//! This module defines the knobs the reporter exposes: which pipeline steps
//! hold the fitted components, and how tables are rendered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the pipeline components the reporter looks up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepNames {
    /// Pipeline step holding the linear classifier
    #[serde(default = "default_classifier_step")]
    pub classifier: String,

    /// Pipeline step holding the column preprocessor
    #[serde(default = "default_preprocessor_step")]
    pub preprocessor: String,

    /// Transformer inside the preprocessor that standardizes numeric features
    #[serde(default = "default_numeric_transformer")]
    pub numeric_transformer: String,
}

fn default_classifier_step() -> String {
    "logreg".to_string()
}

fn default_preprocessor_step() -> String {
    "preprocessor".to_string()
}

fn default_numeric_transformer() -> String {
    "num".to_string()
}

impl Default for StepNames {
    fn default() -> Self {
        Self {
            classifier: default_classifier_step(),
            preprocessor: default_preprocessor_step(),
            numeric_transformer: default_numeric_transformer(),
        }
    }
}

/// Table markup to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// booktabs `tabular` environment
    #[default]
    Latex,
    /// Plain aligned text
    Txt,
}

impl OutputFormat {
    /// Name used in table banners
    pub fn banner_name(&self) -> &'static str {
        match self {
            OutputFormat::Latex => "LaTeX",
            OutputFormat::Txt => "Text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Latex => write!(f, "latex"),
            OutputFormat::Txt => write!(f, "txt"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latex" | "tex" => Ok(OutputFormat::Latex),
            "txt" | "text" => Ok(OutputFormat::Txt),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Configuration for a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Component names used when reading a pipeline document
    #[serde(default)]
    pub steps: StepNames,

    /// Output markup
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places for every value (default: 4)
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Escape LaTeX special characters in labels (default: true)
    #[serde(default = "default_true")]
    pub escape: bool,
}

fn default_precision() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            steps: StepNames::default(),
            format: OutputFormat::default(),
            precision: default_precision(),
            escape: default_true(),
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method: set the number of decimal places
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: enable or disable LaTeX escaping
    pub fn with_escape(mut self, enabled: bool) -> Self {
        self.escape = enabled;
        self
    }

    /// Builder method: replace all step names
    pub fn with_steps(mut self, steps: StepNames) -> Self {
        self.steps = steps;
        self
    }

    /// Builder method: set the classifier step name
    pub fn with_classifier_step(mut self, name: impl Into<String>) -> Self {
        self.steps.classifier = name.into();
        self
    }

    /// Builder method: set the preprocessor step name
    pub fn with_preprocessor_step(mut self, name: impl Into<String>) -> Self {
        self.steps.preprocessor = name.into();
        self
    }

    /// Builder method: set the numeric transformer name
    pub fn with_numeric_transformer(mut self, name: impl Into<String>) -> Self {
        self.steps.numeric_transformer = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::new();
        assert_eq!(config.precision, 4);
        assert!(config.escape);
        assert_eq!(config.format, OutputFormat::Latex);
        assert_eq!(config.steps.classifier, "logreg");
        assert_eq!(config.steps.preprocessor, "preprocessor");
        assert_eq!(config.steps.numeric_transformer, "num");
    }

    #[test]
    fn test_report_config_builder() {
        let config = ReportConfig::new()
            .with_format(OutputFormat::Txt)
            .with_precision(2)
            .with_escape(false)
            .with_classifier_step("clf")
            .with_numeric_transformer("numeric");

        assert_eq!(config.format, OutputFormat::Txt);
        assert_eq!(config.precision, 2);
        assert!(!config.escape);
        assert_eq!(config.steps.classifier, "clf");
        assert_eq!(config.steps.preprocessor, "preprocessor");
        assert_eq!(config.steps.numeric_transformer, "numeric");
    }

    #[test]
    fn test_partial_deserialization() {
        let config: ReportConfig =
            serde_json::from_str(r#"{ "format": "txt", "steps": { "classifier": "svm" } }"#)
                .unwrap();
        assert_eq!(config.format, OutputFormat::Txt);
        assert_eq!(config.precision, 4);
        assert_eq!(config.steps.classifier, "svm");
        assert_eq!(config.steps.numeric_transformer, "num");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("LaTeX".parse::<OutputFormat>(), Ok(OutputFormat::Latex));
        assert_eq!("txt".parse::<OutputFormat>(), Ok(OutputFormat::Txt));
        assert!("html".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Txt.to_string(), "txt");
    }
}
