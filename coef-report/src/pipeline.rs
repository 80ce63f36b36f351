//! Serialized fitted pipelines
//!
//! A pipeline document stores the fitted components under named steps, the
//! same way the training side organised them:
//!
//! ```json
//! {
//!   "steps": {
//!     "preprocessor": { "transformers": { "num": { "mean": [30.0], "scale": [10.0] } } },
//!     "logreg": { "coef": [[0.5], [0.1]], "intercept": [0.1, -0.1] }
//!   },
//!   "label_encoder": { "classes": ["no", "yes"] }
//! }
//! ```
//!
//! Steps are kept as raw JSON until looked up, so a missing step and a
//! malformed step surface as different errors.

use crate::config::StepNames;
use crate::model::{FeatureScaler, FittedClassifier, ReportInputs};
use crate::types::{ReportError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;

/// A fitted pipeline as read from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDocument {
    /// Named pipeline steps
    #[serde(default)]
    pub steps: HashMap<String, Value>,

    /// Fitted label encoder holding the class names
    #[serde(default)]
    pub label_encoder: Option<LabelEncoderDocument>,
}

/// Linear classifier step contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierDocument {
    /// One row per class, one column per feature
    pub coef: Vec<Vec<f64>>,
    /// One entry per class
    pub intercept: Vec<f64>,
}

/// Column preprocessor step contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreprocessorDocument {
    /// Named fitted transformers
    #[serde(default)]
    pub transformers: HashMap<String, Value>,
}

/// Standard scaler contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerDocument {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Label encoder contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoderDocument {
    pub classes: Vec<String>,
}

impl PipelineDocument {
    /// Parse a pipeline document from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ReportError::unexpected("parsing pipeline document", e))
    }

    /// Parse a pipeline document from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| ReportError::unexpected("parsing pipeline document", e))
    }

    /// Look up a step by name
    pub fn step(&self, name: &str) -> Result<&Value> {
        self.steps.get(name).ok_or_else(|| {
            ReportError::ComponentNotFound(format!(
                "pipeline step '{}' (available: {})",
                name,
                sorted_keys(&self.steps)
            ))
        })
    }

    /// Extract the fitted classifier from the named step
    pub fn classifier(&self, steps: &StepNames) -> Result<FittedClassifier> {
        let doc: ClassifierDocument = decode(
            self.step(&steps.classifier)?,
            || format!("reading classifier step '{}'", steps.classifier),
        )?;
        FittedClassifier::from_rows(doc.coef, doc.intercept)
    }

    /// Extract the numeric scaler from the named transformer inside the preprocessor step
    pub fn scaler(&self, steps: &StepNames) -> Result<FeatureScaler> {
        let preprocessor: PreprocessorDocument = decode(
            self.step(&steps.preprocessor)?,
            || format!("reading preprocessor step '{}'", steps.preprocessor),
        )?;

        let transformer = preprocessor
            .transformers
            .get(&steps.numeric_transformer)
            .ok_or_else(|| {
                ReportError::ComponentNotFound(format!(
                    "transformer '{}' in step '{}' (available: {})",
                    steps.numeric_transformer,
                    steps.preprocessor,
                    sorted_keys(&preprocessor.transformers)
                ))
            })?;

        let doc: ScalerDocument = decode(transformer, || {
            format!("reading transformer '{}'", steps.numeric_transformer)
        })?;
        FeatureScaler::from_vecs(doc.mean, doc.scale)
    }

    /// Class labels from the label encoder
    pub fn class_labels(&self) -> Result<Vec<String>> {
        self.label_encoder
            .as_ref()
            .map(|enc| enc.classes.clone())
            .ok_or_else(|| ReportError::ComponentNotFound("label encoder".to_string()))
    }
}

impl ReportInputs {
    /// Assemble report inputs by looking up named components in a pipeline document
    pub fn from_pipeline(doc: &PipelineDocument, steps: &StepNames) -> Result<Self> {
        log::debug!(
            "Looking up components: classifier='{}', preprocessor='{}', transformer='{}'",
            steps.classifier,
            steps.preprocessor,
            steps.numeric_transformer
        );

        ReportInputs::builder()
            .classifier(doc.classifier(steps)?)
            .scaler(doc.scaler(steps)?)
            .class_labels(doc.class_labels()?)
            .build()
    }
}

fn decode<T, F>(value: &Value, context: F) -> Result<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> String,
{
    T::deserialize(value).map_err(|e| ReportError::unexpected(context(), e))
}

fn sorted_keys(map: &HashMap<String, Value>) -> String {
    if map.is_empty() {
        return "none".to_string();
    }
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys.join(", ")
}
