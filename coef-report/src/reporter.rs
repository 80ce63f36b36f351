//! Main reporter API
//!
//! The CoefficientReporter struct is the entry point for turning fitted
//! model components into coefficient tables and rendered text.

use crate::coefficients;
use crate::config::ReportConfig;
use crate::model::ReportInputs;
use crate::pipeline::PipelineDocument;
use crate::render;
use crate::types::{CoefficientReport, ReportError, Result};
use std::io::Write;

/// The main reporter struct - entry point for all report operations
#[derive(Debug, Clone, Default)]
pub struct CoefficientReporter {
    config: ReportConfig,
}

impl CoefficientReporter {
    /// Create a reporter with the given configuration
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Compute the standardized and unscaled coefficient tables
    ///
    /// # Arguments
    /// * `inputs` - Fitted classifier, scaler and class labels
    /// * `feature_names` - One name per coefficient column, in fitting order
    ///
    /// # Returns
    /// * `Result<CoefficientReport>` - Both tables, or
    ///   [`ReportError::DimensionMismatch`] if the feature names don't line up
    ///
    /// # Example
    /// ```
    /// use coef_report::{CoefficientReporter, FeatureScaler, FittedClassifier, ReportInputs};
    /// use ndarray::array;
    ///
    /// let inputs = ReportInputs::builder()
    ///     .classifier(FittedClassifier::new(array![[0.5], [0.1]], array![0.1, -0.1]).unwrap())
    ///     .scaler(FeatureScaler::from_vecs(vec![30.0], vec![10.0]).unwrap())
    ///     .class_labels(["no", "yes"])
    ///     .build()
    ///     .unwrap();
    ///
    /// let reporter = CoefficientReporter::default();
    /// let report = reporter.generate_report(&inputs, &["age".to_string()]).unwrap();
    /// assert_eq!(report.unscaled.nrows(), 2);
    /// ```
    pub fn generate_report(
        &self,
        inputs: &ReportInputs,
        feature_names: &[String],
    ) -> Result<CoefficientReport> {
        log::info!("Extracting coefficients");
        log::debug!(
            "{} classes x {} features",
            inputs.classifier().num_classes(),
            inputs.classifier().num_features()
        );
        coefficients::compute_tables(inputs, feature_names)
    }

    /// Look up the components in a pipeline document, then compute both tables
    pub fn generate_pipeline_report(
        &self,
        doc: &PipelineDocument,
        feature_names: &[String],
    ) -> Result<CoefficientReport> {
        let inputs = ReportInputs::from_pipeline(doc, &self.config.steps)?;
        self.generate_report(&inputs, feature_names)
    }

    /// Render a computed report as text
    pub fn render(&self, report: &CoefficientReport) -> String {
        render::render_report(report, &self.config)
    }

    /// Compute, render and write a report to `sink`
    ///
    /// Failures are logged and `None` is returned. The report is rendered in
    /// full before the first write, so lookup, validation and computation
    /// failures leave the sink untouched. A sink that fails mid-write may
    /// keep a partial report; buffer on the caller's side if that matters.
    pub fn emit_report<W: Write>(
        &self,
        inputs: &ReportInputs,
        feature_names: &[String],
        sink: &mut W,
    ) -> Option<CoefficientReport> {
        let result = self
            .generate_report(inputs, feature_names)
            .and_then(|report| self.write_report(report, sink));
        self.settle(result)
    }

    /// Like [`emit_report`](Self::emit_report), starting from a pipeline document
    pub fn emit_pipeline_report<W: Write>(
        &self,
        doc: &PipelineDocument,
        feature_names: &[String],
        sink: &mut W,
    ) -> Option<CoefficientReport> {
        let result = self
            .generate_pipeline_report(doc, feature_names)
            .and_then(|report| self.write_report(report, sink));
        self.settle(result)
    }

    fn write_report<W: Write>(&self, report: CoefficientReport, sink: &mut W) -> Result<CoefficientReport> {
        let text = self.render(&report);
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(report)
    }

    fn settle(&self, result: Result<CoefficientReport>) -> Option<CoefficientReport> {
        match result {
            Ok(report) => Some(report),
            Err(e) => {
                log_failure(&e);
                None
            }
        }
    }
}

fn log_failure(err: &ReportError) {
    match err {
        ReportError::ComponentNotFound(_) => {
            log::error!("Error: Could not find a pipeline step or transformer: {}", err);
        }
        ReportError::DimensionMismatch { .. } => {
            log::error!("Error: {}", err);
        }
        ReportError::Unexpected { .. } => {
            log::error!("An unexpected error occurred: {}", err);
        }
        ReportError::InvalidModel(_) | ReportError::IoError(_) => {
            log::error!("Report failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeatureScaler, FittedClassifier};
    use ndarray::array;

    fn inputs() -> ReportInputs {
        ReportInputs::builder()
            .classifier(
                FittedClassifier::new(array![[0.5, -0.2], [0.1, 0.3]], array![0.1, -0.1]).unwrap(),
            )
            .scaler(FeatureScaler::from_vecs(vec![30.0, 50000.0], vec![10.0, 20000.0]).unwrap())
            .class_labels(["no", "yes"])
            .build()
            .unwrap()
    }

    fn names() -> Vec<String> {
        vec!["age".to_string(), "income".to_string()]
    }

    #[test]
    fn test_emit_report_writes_both_tables() {
        let reporter = CoefficientReporter::default();
        let mut out = Vec::new();
        let report = reporter.emit_report(&inputs(), &names(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, reporter.render(&report));
        assert!(text.contains("age & 0.5000 & 0.1000 \\\\"));
        assert!(text.contains("age & 0.0500 & 0.0100 \\\\"));
        assert!(text.contains("Intercept & -0.9000 & -1.1500 \\\\"));
    }

    #[test]
    fn test_emit_report_mismatch_writes_nothing() {
        let reporter = CoefficientReporter::default();
        let mut out = Vec::new();
        let report = reporter.emit_report(&inputs(), &["age".to_string()], &mut out);
        assert!(report.is_none());
        assert!(out.is_empty());
    }

    #[test]
    fn test_emit_pipeline_report_missing_step_writes_nothing() {
        let reporter = CoefficientReporter::default();
        let doc = PipelineDocument::default();
        let mut out = Vec::new();
        assert!(reporter.emit_pipeline_report(&doc, &names(), &mut out).is_none());
        assert!(out.is_empty());
    }

    #[test]
    fn test_emit_report_sink_fails_partway() {
        // Accepts a fixed number of bytes, then refuses further writes
        struct ShortSink {
            written: Vec<u8>,
            capacity: usize,
        }

        impl Write for ShortSink {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                let room = self.capacity - self.written.len();
                if room == 0 {
                    return Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "full"));
                }
                let n = room.min(buf.len());
                self.written.extend_from_slice(&buf[..n]);
                Ok(n)
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let reporter = CoefficientReporter::default();
        let full = reporter.render(&reporter.generate_report(&inputs(), &names()).unwrap());
        let mut sink = ShortSink {
            written: Vec::new(),
            capacity: 100,
        };

        assert!(reporter.emit_report(&inputs(), &names(), &mut sink).is_none());
        assert_eq!(sink.written.len(), 100);
        assert!(full.as_bytes().starts_with(&sink.written));
    }

    #[test]
    fn test_emit_report_sink_failure() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let reporter = CoefficientReporter::default();
        assert!(reporter.emit_report(&inputs(), &names(), &mut FailingSink).is_none());
    }
}
