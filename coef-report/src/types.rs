//! Core types for the coefficient reporter
//!
//! This module defines the error taxonomy and the derived tables the reporter
//! produces. Tables are created once per report and carry no further state.

use ndarray::{Array1, Array2, ArrayView1};

/// Label of the first row in every coefficient table
pub const INTERCEPT_LABEL: &str = "Intercept";

/// Result type for reporter operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while extracting or reporting coefficients
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error(
        "Number of feature names ({names}) does not match number of coefficients ({coefficients}). \
         Expected feature names: {feature_names:?}"
    )]
    DimensionMismatch {
        /// Number of feature names supplied
        names: usize,
        /// Number of coefficient columns in the classifier
        coefficients: usize,
        /// The supplied feature names
        feature_names: Vec<String>,
    },

    #[error("Invalid fitted model: {0}")]
    InvalidModel(String),

    #[error("Unexpected error while {context}: {source}")]
    Unexpected {
        /// What the reporter was doing when the failure happened
        context: String,
        /// Original cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ReportError {
    /// Wrap an arbitrary failure as [`ReportError::Unexpected`]
    pub fn unexpected<E>(context: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ReportError::Unexpected {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

/// A labelled matrix of coefficients: one row per term, one column per class
///
/// Row 0 is always [`INTERCEPT_LABEL`]; the remaining rows follow the
/// feature names in the order they were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    /// Human-readable table title (used in banners)
    pub title: String,
    /// Row labels: "Intercept" followed by the feature names
    pub row_labels: Vec<String>,
    /// Column labels: the class labels
    pub column_labels: Vec<String>,
    /// Values, shape (row_labels.len() × column_labels.len())
    pub values: Array2<f64>,
}

impl CoefficientTable {
    /// Stack `intercept` on top of the transposed `coef` matrix
    ///
    /// `coef` has shape (num_classes × num_features); the resulting table has
    /// shape (num_features + 1) × num_classes.
    pub(crate) fn stack(
        title: impl Into<String>,
        intercept: &Array1<f64>,
        coef: &Array2<f64>,
        feature_names: &[String],
        class_labels: &[String],
    ) -> Self {
        let (num_classes, num_features) = coef.dim();
        let mut values = Array2::<f64>::zeros((num_features + 1, num_classes));
        values.row_mut(0).assign(intercept);
        values.slice_mut(ndarray::s![1.., ..]).assign(&coef.t());

        let mut row_labels = Vec::with_capacity(num_features + 1);
        row_labels.push(INTERCEPT_LABEL.to_string());
        row_labels.extend(feature_names.iter().cloned());

        Self {
            title: title.into(),
            row_labels,
            column_labels: class_labels.to_vec(),
            values,
        }
    }

    /// Number of rows (features + intercept)
    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns (classes)
    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// Get a single cell
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    /// Look up a row by its label (first match)
    pub fn row(&self, label: &str) -> Option<ArrayView1<'_, f64>> {
        self.row_labels
            .iter()
            .position(|l| l == label)
            .map(|idx| self.values.row(idx))
    }

    /// The intercept row
    pub fn intercept(&self) -> ArrayView1<'_, f64> {
        self.values.row(0)
    }
}

/// Both tables produced by one report invocation
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientReport {
    /// Coefficients per one standard deviation of each feature
    pub standardized: CoefficientTable,
    /// Coefficients per one unit of each original feature
    pub unscaled: CoefficientTable,
}
