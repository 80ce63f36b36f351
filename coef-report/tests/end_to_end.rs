// End-to-end checks against the bundled pipeline document
use coef_report::{
    CoefficientReporter, FeatureScaler, FittedClassifier, OutputFormat, PipelineDocument,
    ReportConfig, ReportError, ReportInputs,
};
use ndarray::array;
use std::fs::File;
use std::path::PathBuf;

const TOL: f64 = 1e-9;

fn pipeline() -> PipelineDocument {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/pipeline.json");
    PipelineDocument::from_reader(File::open(path).unwrap()).unwrap()
}

fn features() -> Vec<String> {
    vec!["age".to_string(), "income".to_string()]
}

#[test]
fn test_pipeline_report_values() {
    let reporter = CoefficientReporter::default();
    let report = reporter.generate_pipeline_report(&pipeline(), &features()).unwrap();

    for table in [&report.standardized, &report.unscaled] {
        assert_eq!(table.nrows(), 3);
        assert_eq!(table.ncols(), 2);
        assert_eq!(table.row_labels[0], "Intercept");
        assert_eq!(&table.row_labels[1..], features().as_slice());
        assert_eq!(table.column_labels, vec!["declined", "approved"]);
    }

    let age = report.standardized.row("age").unwrap();
    assert!((age[0] - 0.5).abs() < TOL && (age[1] - 0.1).abs() < TOL);

    let age = report.unscaled.row("age").unwrap();
    assert!((age[0] - 0.05).abs() < TOL && (age[1] - 0.01).abs() < TOL);

    let intercept = report.unscaled.intercept();
    assert!((intercept[0] + 0.9).abs() < TOL);
    assert!((intercept[1] + 1.15).abs() < TOL);
}

#[test]
fn test_pipeline_report_latex_output() {
    let reporter = CoefficientReporter::default();
    let mut out = Vec::new();
    reporter
        .emit_pipeline_report(&pipeline(), &features(), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected_unscaled = "\\begin{tabular}{lrr}\n\
                             \\toprule\n \
                             & declined & approved \\\\\n\
                             \\midrule\n\
                             Intercept & -0.9000 & -1.1500 \\\\\n\
                             age & 0.0500 & 0.0100 \\\\\n\
                             income & -0.0000 & 0.0000 \\\\\n\
                             \\bottomrule\n\
                             \\end{tabular}\n";
    assert!(text.ends_with(expected_unscaled));
    assert!(text.contains("Standardized Coefficients (for 1-std-dev change)"));
    assert!(text.contains("Unscaled Coefficients (for 1-unit change)"));
}

#[test]
fn test_custom_step_names() {
    let json = r#"{
        "steps": {
            "scaling": { "transformers": { "numeric": { "mean": [1.0], "scale": [2.0] } } },
            "clf": { "coef": [[4.0]], "intercept": [1.0] }
        },
        "label_encoder": { "classes": ["positive"] }
    }"#;
    let doc = PipelineDocument::from_json_str(json).unwrap();

    let default_reporter = CoefficientReporter::default();
    let result = default_reporter.generate_pipeline_report(&doc, &["x".to_string()]);
    assert!(matches!(result, Err(ReportError::ComponentNotFound(_))));

    let config = ReportConfig::new()
        .with_classifier_step("clf")
        .with_preprocessor_step("scaling")
        .with_numeric_transformer("numeric")
        .with_format(OutputFormat::Txt)
        .with_precision(2);
    let reporter = CoefficientReporter::new(config);
    let report = reporter.generate_pipeline_report(&doc, &["x".to_string()]).unwrap();

    // 1.0 - 4.0 * 1.0 / 2.0
    assert!((report.unscaled.intercept()[0] + 1.0).abs() < TOL);
    assert!((report.unscaled.row("x").unwrap()[0] - 2.0).abs() < TOL);

    let text = reporter.render(&report);
    assert!(text.contains("--- Text Table 2:"));
    assert!(text.contains(&format!("x{}2.00", " ".repeat(14))));
}

#[test]
fn test_mismatched_feature_names_produce_nothing() {
    let reporter = CoefficientReporter::default();
    let mut out = Vec::new();
    let names = vec!["age".to_string(), "income".to_string(), "tenure".to_string()];
    assert!(reporter.emit_pipeline_report(&pipeline(), &names, &mut out).is_none());
    assert!(out.is_empty());

    match reporter.generate_pipeline_report(&pipeline(), &names) {
        Err(ReportError::DimensionMismatch {
            names,
            coefficients,
            ..
        }) => {
            assert_eq!(names, 3);
            assert_eq!(coefficients, 2);
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn test_missing_components_produce_nothing() {
    let reporter = CoefficientReporter::default();

    for step in ["logreg", "preprocessor"] {
        let mut doc = pipeline();
        doc.steps.remove(step);
        let mut out = Vec::new();
        assert!(reporter.emit_pipeline_report(&doc, &features(), &mut out).is_none());
        assert!(out.is_empty());
        assert!(matches!(
            reporter.generate_pipeline_report(&doc, &features()),
            Err(ReportError::ComponentNotFound(_))
        ));
    }

    let mut doc = pipeline();
    doc.steps.insert(
        "preprocessor".to_string(),
        serde_json::json!({ "transformers": { "cat": {} } }),
    );
    assert!(matches!(
        reporter.generate_pipeline_report(&doc, &features()),
        Err(ReportError::ComponentNotFound(_))
    ));
}

#[test]
fn test_direct_inputs_match_pipeline() {
    let inputs = ReportInputs::builder()
        .classifier(FittedClassifier::new(array![[0.5, -0.2], [0.1, 0.3]], array![0.1, -0.1]).unwrap())
        .scaler(FeatureScaler::from_vecs(vec![30.0, 50000.0], vec![10.0, 20000.0]).unwrap())
        .class_labels(["declined", "approved"])
        .build()
        .unwrap();

    let reporter = CoefficientReporter::default();
    let direct = reporter.generate_report(&inputs, &features()).unwrap();
    let from_doc = reporter.generate_pipeline_report(&pipeline(), &features()).unwrap();
    assert_eq!(direct, from_doc);
}
