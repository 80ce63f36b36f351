//! Coefficient Report Library
//!
//! Extracts the coefficients of a fitted linear classifier and reports them
//! as two tables: standardized (per one standard deviation of each feature)
//! and unscaled (per one unit of each original feature).
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on reporting:
//! - Assembles the fitted classifier, scaler and class labels into [`ReportInputs`]
//! - Looks components up by name in a serialized [`PipelineDocument`]
//! - Rescales coefficients with the scaler's mean/scale statistics
//! - Renders tables as LaTeX (booktabs) or plain text
//!
//! The library does NOT:
//! - Train models or load datasets
//! - Persist anything
//!
//! Argument parsing and config files live in the application layer (coef-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use coef_report::{CoefficientReporter, PipelineDocument, ReportConfig};
//! use std::fs::File;
//!
//! let doc = PipelineDocument::from_reader(File::open("pipeline.json").unwrap()).unwrap();
//! let features = vec!["age".to_string(), "income".to_string()];
//!
//! let reporter = CoefficientReporter::new(ReportConfig::new().with_precision(4));
//! let mut stdout = std::io::stdout();
//! if reporter.emit_pipeline_report(&doc, &features, &mut stdout).is_none() {
//!     eprintln!("No report produced (see log)");
//! }
//! ```

// Public modules
pub mod coefficients;
pub mod config;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod reporter;
pub mod types;

// Re-export main types for convenience
pub use config::{OutputFormat, ReportConfig, StepNames};
pub use model::{FeatureScaler, FittedClassifier, ReportInputs, ReportInputsBuilder};
pub use pipeline::PipelineDocument;
pub use reporter::CoefficientReporter;
pub use types::{CoefficientReport, CoefficientTable, ReportError, Result, INTERCEPT_LABEL};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
