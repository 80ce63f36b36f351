//! Report generation
//!
//! Reads a pipeline document, runs the reporter and writes the tables to
//! stdout or a file. The sink is only opened once a report exists, so a
//! failed report never leaves an empty output file behind.

use anyhow::{Context, Result};
use coef_report::{CoefficientReporter, PipelineDocument, ReportConfig};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Run one report. Returns `Ok(false)` if the reporter declined to produce tables.
pub fn run(
    pipeline_path: &Path,
    feature_names: &[String],
    config: ReportConfig,
    output: Option<&Path>,
) -> Result<bool> {
    log::info!("Loading pipeline document: {:?}", pipeline_path);
    let json = fs::read_to_string(pipeline_path)
        .with_context(|| format!("Failed to read pipeline file: {:?}", pipeline_path))?;

    let doc = match PipelineDocument::from_json_str(&json) {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("An unexpected error occurred: {}", e);
            return Ok(false);
        }
    };
    log::debug!("Pipeline steps: {}", doc.steps.len());

    let reporter = CoefficientReporter::new(config);
    let mut buffer = Vec::new();
    if reporter
        .emit_pipeline_report(&doc, feature_names, &mut buffer)
        .is_none()
    {
        return Ok(false);
    }

    let mut sink = open_sink(output)?;
    sink.write_all(&buffer).context("Failed to write report")?;
    sink.flush().context("Failed to write report")?;

    if let Some(path) = output {
        log::info!("Report written to {:?}", path);
    }
    Ok(true)
}

/// Stdout, or a buffered file if a path is given
fn open_sink(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
