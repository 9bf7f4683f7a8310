//! Mock spam model for testing
//!
//! Returns a fixed label (and optionally a fixed probability
//! distribution), or fails on demand to exercise the inference-error
//! path.

use crate::error::{GuardError, Result};
use crate::model::{ClassProbabilities, FeatureVector, ModelLabel, SpamModel};

/// Mock model implementation for testing
pub struct MockModel {
    label: ModelLabel,
    probabilities: Option<ClassProbabilities>,
    fail: bool,
    model_name: String,
}

impl MockModel {
    pub fn new(label: ModelLabel) -> Self {
        Self {
            label,
            probabilities: None,
            fail: false,
            model_name: "mock-model-v1".to_string(),
        }
    }

    /// Report a fixed probability distribution.
    pub fn with_probabilities(mut self, legitimate: f64, spam: f64) -> Self {
        self.probabilities = Some(ClassProbabilities { legitimate, spam });
        self
    }

    /// Fail every inference call.
    pub fn failing() -> Self {
        Self {
            label: ModelLabel::Legitimate,
            probabilities: None,
            fail: true,
            model_name: "mock-model-v1".to_string(),
        }
    }
}

impl SpamModel for MockModel {
    fn vectorize(&self, document: &str) -> Result<FeatureVector> {
        if self.fail {
            return Err(GuardError::Inference("mock vectorizer failure".to_string()));
        }

        // One dimension per token keeps the vector inspectable in tests
        Ok(FeatureVector(
            document.split_whitespace().map(|_| 1.0).collect(),
        ))
    }

    fn classify(&self, _features: &FeatureVector) -> Result<ModelLabel> {
        if self.fail {
            return Err(GuardError::Inference("mock classifier failure".to_string()));
        }

        Ok(self.label)
    }

    fn class_probabilities(&self, _features: &FeatureVector) -> Result<Option<ClassProbabilities>> {
        Ok(self.probabilities)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_returns_configured_label() {
        let model = MockModel::new(ModelLabel::Spam);
        let features = model.vectorize("free money now").unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(model.classify(&features).unwrap(), ModelLabel::Spam);
        assert!(model.class_probabilities(&features).unwrap().is_none());
    }

    #[test]
    fn test_mock_with_probabilities() {
        let model = MockModel::new(ModelLabel::Legitimate).with_probabilities(0.9, 0.1);
        let features = model.vectorize("hello").unwrap();
        let probs = model.class_probabilities(&features).unwrap().unwrap();
        assert_eq!(probs.max(), 0.9);
    }

    #[test]
    fn test_failing_mock() {
        let model = MockModel::failing();
        assert!(matches!(
            model.vectorize("anything"),
            Err(GuardError::Inference(_))
        ));
    }
}
