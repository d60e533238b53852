use fasttext::Prediction;
use serde::{Deserialize, Serialize};

/// A language label with its prediction confidence.
///
/// Labels are kept as the raw codes the model emits (`en`, `pt`, `arz`…),
/// with the `__label__` prefix stripped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identification {
    label: String,
    prob: f32,
}

impl Identification {
    pub fn new(label: String, prob: f32) -> Self {
        Self { label, prob }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }
}

impl From<Prediction> for Identification {
    fn from(prediction: Prediction) -> Self {
        let label = prediction
            .label
            .strip_prefix("__label__")
            .unwrap_or(&prediction.label)
            .to_string();
        Self {
            label,
            prob: prediction.prob,
        }
    }
}
