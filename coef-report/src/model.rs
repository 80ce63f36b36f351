//! Fitted model components
//!
//! These are the read-only inputs of a report: the linear classifier's
//! weights, the standard scaler's statistics and the class labels. They are
//! produced by an external training process and never mutated here.

use crate::types::{ReportError, Result};
use ndarray::{Array1, Array2};

/// A fitted linear classifier (weights + intercept)
///
/// `coef` has one row per class and one column per feature:
///
/// ```text
/// coef[class][feature] → weight
/// intercept[class]     → bias
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FittedClassifier {
    coef: Array2<f64>,
    intercept: Array1<f64>,
}

impl FittedClassifier {
    /// Create a classifier from its coefficient matrix and intercept vector
    ///
    /// Fails with [`ReportError::InvalidModel`] if the intercept length does
    /// not match the number of coefficient rows.
    pub fn new(coef: Array2<f64>, intercept: Array1<f64>) -> Result<Self> {
        if intercept.len() != coef.nrows() {
            return Err(ReportError::InvalidModel(format!(
                "intercept has {} entries but coefficient matrix has {} rows",
                intercept.len(),
                coef.nrows()
            )));
        }
        Ok(Self { coef, intercept })
    }

    /// Build from nested rows, e.g. as read from a JSON document
    pub fn from_rows(rows: Vec<Vec<f64>>, intercept: Vec<f64>) -> Result<Self> {
        let num_classes = rows.len();
        let num_features = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = rows.iter().position(|r| r.len() != num_features) {
            return Err(ReportError::InvalidModel(format!(
                "coefficient row {} has {} entries, expected {}",
                bad,
                rows[bad].len(),
                num_features
            )));
        }

        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let coef = Array2::from_shape_vec((num_classes, num_features), flat)
            .map_err(|e| ReportError::unexpected("shaping coefficient matrix", e))?;
        Self::new(coef, Array1::from(intercept))
    }

    /// Coefficient matrix, shape (num_classes × num_features)
    #[inline]
    pub fn coef(&self) -> &Array2<f64> {
        &self.coef
    }

    /// Intercept vector, length num_classes
    #[inline]
    pub fn intercept(&self) -> &Array1<f64> {
        &self.intercept
    }

    /// Number of classes (rows of `coef`)
    #[inline]
    pub fn num_classes(&self) -> usize {
        self.coef.nrows()
    }

    /// Number of features (columns of `coef`)
    #[inline]
    pub fn num_features(&self) -> usize {
        self.coef.ncols()
    }
}

/// Statistics of a fitted standard scaler
///
/// The scaler transformed each feature as `x' = (x - mean) / scale` before
/// the classifier was fitted.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl FeatureScaler {
    /// Create a scaler from its mean and scale vectors
    ///
    /// Every `scale` entry must be finite and non-zero.
    pub fn new(mean: Array1<f64>, scale: Array1<f64>) -> Result<Self> {
        if mean.len() != scale.len() {
            return Err(ReportError::InvalidModel(format!(
                "scaler mean has {} entries but scale has {}",
                mean.len(),
                scale.len()
            )));
        }
        if let Some(idx) = scale.iter().position(|s| *s == 0.0 || !s.is_finite()) {
            return Err(ReportError::InvalidModel(format!(
                "scaler scale[{}] = {} (must be finite and non-zero)",
                idx, scale[idx]
            )));
        }
        Ok(Self { mean, scale })
    }

    /// Build from plain vectors
    pub fn from_vecs(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        Self::new(Array1::from(mean), Array1::from(scale))
    }

    /// Per-feature mean
    #[inline]
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Per-feature scale (standard deviation)
    #[inline]
    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    /// Number of features the scaler was fitted on
    #[inline]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// True if the scaler has no features
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

/// Everything needed to produce a report, assembled up front
///
/// Use [`ReportInputs::builder`] to assemble one field by field; missing
/// components are reported when the structure is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportInputs {
    classifier: FittedClassifier,
    scaler: FeatureScaler,
    class_labels: Vec<String>,
}

impl ReportInputs {
    /// Assemble inputs from all three components
    pub fn new(
        classifier: FittedClassifier,
        scaler: FeatureScaler,
        class_labels: Vec<String>,
    ) -> Result<Self> {
        if class_labels.len() != classifier.num_classes() {
            return Err(ReportError::InvalidModel(format!(
                "{} class labels supplied but classifier has {} classes",
                class_labels.len(),
                classifier.num_classes()
            )));
        }
        if scaler.len() != classifier.num_features() {
            return Err(ReportError::InvalidModel(format!(
                "scaler was fitted on {} features but classifier has {}",
                scaler.len(),
                classifier.num_features()
            )));
        }
        Ok(Self {
            classifier,
            scaler,
            class_labels,
        })
    }

    /// Start assembling inputs
    pub fn builder() -> ReportInputsBuilder {
        ReportInputsBuilder::default()
    }

    pub fn classifier(&self) -> &FittedClassifier {
        &self.classifier
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    pub fn class_labels(&self) -> &[String] {
        &self.class_labels
    }
}

/// Builder for [`ReportInputs`]
#[derive(Debug, Clone, Default)]
pub struct ReportInputsBuilder {
    classifier: Option<FittedClassifier>,
    scaler: Option<FeatureScaler>,
    class_labels: Option<Vec<String>>,
}

impl ReportInputsBuilder {
    /// Builder method: set the fitted classifier
    pub fn classifier(mut self, classifier: FittedClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Builder method: set the fitted scaler
    pub fn scaler(mut self, scaler: FeatureScaler) -> Self {
        self.scaler = Some(scaler);
        self
    }

    /// Builder method: set the class labels
    pub fn class_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Validate that every required component is present and consistent
    pub fn build(self) -> Result<ReportInputs> {
        let classifier = self
            .classifier
            .ok_or_else(|| ReportError::ComponentNotFound("classifier".to_string()))?;
        let scaler = self
            .scaler
            .ok_or_else(|| ReportError::ComponentNotFound("scaler".to_string()))?;
        let class_labels = self
            .class_labels
            .ok_or_else(|| ReportError::ComponentNotFound("class labels".to_string()))?;

        ReportInputs::new(classifier, scaler, class_labels)
    }
}
