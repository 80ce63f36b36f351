//! Print coefficient tables for a small two-class model
//!
//! Usage:
//!   cargo run --example print_report [-- txt]
//!
//! The model below was fitted on standardized `age` and `income` features.

use coef_report::{
    CoefficientReporter, FeatureScaler, FittedClassifier, OutputFormat, ReportConfig, ReportInputs,
};
use ndarray::array;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let format = match env::args().nth(1) {
        Some(arg) => arg.parse::<OutputFormat>()?,
        None => OutputFormat::Latex,
    };

    let inputs = ReportInputs::builder()
        .classifier(FittedClassifier::new(
            array![[0.5, -0.2], [0.1, 0.3]],
            array![0.1, -0.1],
        )?)
        .scaler(FeatureScaler::from_vecs(
            vec![30.0, 50000.0],
            vec![10.0, 20000.0],
        )?)
        .class_labels(["declined", "approved"])
        .build()?;

    let features = vec!["age".to_string(), "income".to_string()];
    let reporter = CoefficientReporter::new(ReportConfig::new().with_format(format));

    let mut stdout = std::io::stdout().lock();
    if reporter.emit_report(&inputs, &features, &mut stdout).is_none() {
        eprintln!("No report produced");
    }
    Ok(())
}
