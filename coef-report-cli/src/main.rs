//! Coefficient Report CLI Application
//!
//! This is the command-line interface for the coefficient reporter.
//! It uses the coef-report library and adds:
//! - Pipeline document loading
//! - TOML configuration
//! - Output to stdout or a file

use anyhow::Result;
use clap::Parser;
use coef_report::OutputFormat;
use std::path::PathBuf;

mod config;
mod report;

/// Coefficient Report - Print coefficient tables for a fitted linear classifier
#[derive(Parser, Debug)]
#[command(name = "coef-report")]
#[command(about = "Print standardized and unscaled coefficient tables (LaTeX or text)", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the fitted pipeline document (JSON)
    #[arg(short, long, value_name = "FILE")]
    pipeline: Option<PathBuf>,

    /// Feature names in preprocessor output order (comma separated)
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    features: Vec<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Table markup: latex or txt
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Decimal places for coefficient values
    #[arg(long, value_name = "DIGITS")]
    precision: Option<usize>,

    /// Name of the classifier step
    #[arg(long, value_name = "NAME")]
    classifier_step: Option<String>,

    /// Name of the preprocessor step
    #[arg(long, value_name = "NAME")]
    preprocessor_step: Option<String>,

    /// Name of the numeric transformer inside the preprocessor
    #[arg(long, value_name = "NAME")]
    numeric_transformer: Option<String>,

    /// Do not escape LaTeX special characters in labels
    #[arg(long)]
    no_escape: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Coefficient Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using report library v{}", coef_report::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => config::AppConfig::default(),
    };
    let app_config = apply_overrides(app_config, &args);

    let Some(pipeline) = app_config.input.pipeline.clone() else {
        // No input - show help
        println!("Coefficient Report - No pipeline specified");
        println!("\nQuick Start:");
        println!("  coef-report --pipeline pipeline.json --features age,income");
        println!("  coef-report --pipeline pipeline.json --features age,income --format txt");
        println!("\nWith a config file:");
        println!("  coef-report --config report.toml");
        println!("\nUse --help for more options");
        return Ok(());
    };

    let produced = report::run(
        &pipeline,
        &app_config.input.feature_names,
        app_config.report_config(),
        app_config.output.file.as_deref(),
    )?;

    if !produced {
        log::warn!("No coefficient tables were produced");
    }

    Ok(())
}

/// Command-line flags take precedence over the config file
fn apply_overrides(mut config: config::AppConfig, args: &Args) -> config::AppConfig {
    if let Some(pipeline) = &args.pipeline {
        config.input.pipeline = Some(pipeline.clone());
    }
    if !args.features.is_empty() {
        config.input.feature_names = args
            .features
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
    }
    if let Some(output) = &args.output {
        config.output.file = Some(output.clone());
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(precision) = args.precision {
        config.output.precision = precision;
    }
    if args.no_escape {
        config.output.escape = false;
    }
    if let Some(name) = &args.classifier_step {
        config.steps.classifier = name.clone();
    }
    if let Some(name) = &args.preprocessor_step {
        config.steps.preprocessor = name.clone();
    }
    if let Some(name) = &args.numeric_transformer {
        config.steps.numeric_transformer = name.clone();
    }
    config
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
