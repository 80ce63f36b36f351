//! Coefficient table computation
//!
//! Standardized coefficients are the classifier's weights as fitted on
//! standardized features. Unscaled coefficients re-express them per unit of
//! the original feature:
//!
//! ```text
//! unscaled_coef[j][i]   = coef[j][i] / scale[i]
//! unscaled_intercept[j] = intercept[j] - Σ_i coef[j][i] * mean[i] / scale[i]
//! ```

use crate::model::{FeatureScaler, FittedClassifier, ReportInputs};
use crate::types::{CoefficientReport, CoefficientTable, ReportError, Result};
use ndarray::{Array1, Array2};

pub const STANDARDIZED_TITLE: &str = "Standardized Coefficients";
pub const UNSCALED_TITLE: &str = "Unscaled Coefficients";

/// Check that there is exactly one feature name per coefficient column
pub fn validate_feature_names(classifier: &FittedClassifier, feature_names: &[String]) -> Result<()> {
    let coefficients = classifier.num_features();
    if feature_names.len() != coefficients {
        return Err(ReportError::DimensionMismatch {
            names: feature_names.len(),
            coefficients,
            feature_names: feature_names.to_vec(),
        });
    }
    Ok(())
}

/// Rescale coefficients and intercepts to original feature units
///
/// Returns `(unscaled_intercept, unscaled_coef)`; `unscaled_coef` keeps the
/// classifier's (num_classes × num_features) shape. Fails with
/// [`ReportError::InvalidModel`] if the scaler and classifier widths differ.
pub fn unscale(
    classifier: &FittedClassifier,
    scaler: &FeatureScaler,
) -> Result<(Array1<f64>, Array2<f64>)> {
    if scaler.len() != classifier.num_features() {
        return Err(ReportError::InvalidModel(format!(
            "scaler was fitted on {} features but classifier has {}",
            scaler.len(),
            classifier.num_features()
        )));
    }

    let coef = classifier.coef();
    let unscaled_coef: Array2<f64> = coef / scaler.scale();
    let shift: Array1<f64> = coef.dot(&(scaler.mean() / scaler.scale()));
    let unscaled_intercept = classifier.intercept() - &shift;
    Ok((unscaled_intercept, unscaled_coef))
}

/// Compute both coefficient tables
pub fn compute_tables(inputs: &ReportInputs, feature_names: &[String]) -> Result<CoefficientReport> {
    let classifier = inputs.classifier();
    validate_feature_names(classifier, feature_names)?;

    let standardized = CoefficientTable::stack(
        STANDARDIZED_TITLE,
        classifier.intercept(),
        classifier.coef(),
        feature_names,
        inputs.class_labels(),
    );

    let (unscaled_intercept, unscaled_coef) = unscale(classifier, inputs.scaler())?;
    let unscaled = CoefficientTable::stack(
        UNSCALED_TITLE,
        &unscaled_intercept,
        &unscaled_coef,
        feature_names,
        inputs.class_labels(),
    );

    Ok(CoefficientReport {
        standardized,
        unscaled,
    })
}
