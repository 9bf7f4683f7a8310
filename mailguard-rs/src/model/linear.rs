//! Pretrained TF-IDF + linear SVM model
//!
//! Loads two externally produced JSON artifacts at startup: the fitted
//! vectorizer (vocabulary + per-term IDF weights) and the linear
//! decision function (weights + intercept, optional sigmoid
//! calibration). Inference is read-only; nothing here trains or refits.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::error::{GuardError, Result};
use crate::model::{ClassProbabilities, FeatureVector, ModelLabel, SpamModel};

/// Serialized vectorizer artifact
#[derive(Debug, Deserialize)]
struct VectorizerArtifact {
    /// Term -> column index in the feature space
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column
    idf: Vec<f64>,
}

/// Serialized classifier artifact
#[derive(Debug, Deserialize)]
struct ClassifierArtifact {
    /// One weight per feature column; positive decision means spam
    weights: Vec<f64>,
    intercept: f64,
    /// Sigmoid calibration for probability estimates, absent for a
    /// plain (uncalibrated) SVM
    #[serde(default)]
    calibration: Option<Calibration>,
    #[serde(default)]
    name: Option<String>,
}

/// Sigmoid calibration coefficients: p(spam) = sigmoid(a * decision + b)
#[derive(Debug, Clone, Copy, Deserialize)]
struct Calibration {
    a: f64,
    b: f64,
}

/// Linear spam model backed by pretrained artifacts
pub struct LinearModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    weights: Vec<f64>,
    intercept: f64,
    calibration: Option<Calibration>,
    name: String,
}

impl LinearModel {
    /// Load classifier and vectorizer artifacts from disk.
    pub fn load<P: AsRef<Path>>(classifier_path: P, vectorizer_path: P) -> Result<Self> {
        let classifier: ClassifierArtifact =
            serde_json::from_str(&std::fs::read_to_string(classifier_path)?)?;
        let vectorizer: VectorizerArtifact =
            serde_json::from_str(&std::fs::read_to_string(vectorizer_path)?)?;

        if vectorizer.idf.len() != classifier.weights.len() {
            return Err(GuardError::Config(format!(
                "vectorizer dimension {} does not match classifier dimension {}",
                vectorizer.idf.len(),
                classifier.weights.len()
            )));
        }

        if let Some((term, &index)) = vectorizer
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= vectorizer.idf.len())
        {
            return Err(GuardError::Config(format!(
                "vocabulary term '{}' maps to column {} outside the feature space",
                term, index
            )));
        }

        let name = classifier
            .name
            .unwrap_or_else(|| "linear-svm-tfidf".to_string());

        info!(
            "Loaded model '{}': {} features, calibration: {}",
            name,
            vectorizer.idf.len(),
            classifier.calibration.is_some()
        );

        Ok(Self {
            vocabulary: vectorizer.vocabulary,
            idf: vectorizer.idf,
            weights: classifier.weights,
            intercept: classifier.intercept,
            calibration: classifier.calibration,
            name,
        })
    }

    /// Signed distance from the separating hyperplane.
    fn decision(&self, features: &FeatureVector) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(GuardError::Inference(format!(
                "feature vector dimension {} does not match model dimension {}",
                features.len(),
                self.weights.len()
            )));
        }

        let dot: f64 = features
            .0
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum();

        Ok(dot + self.intercept)
    }
}

impl SpamModel for LinearModel {
    /// L2-normalized term-frequency x IDF over the fitted vocabulary.
    fn vectorize(&self, document: &str) -> Result<FeatureVector> {
        let mut values = vec![0.0f64; self.idf.len()];

        for token in document.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                values[index] += 1.0;
            }
        }

        for (value, idf) in values.iter_mut().zip(self.idf.iter()) {
            *value *= idf;
        }

        let norm: f64 = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in values.iter_mut() {
                *value /= norm;
            }
        }

        Ok(FeatureVector(values))
    }

    fn classify(&self, features: &FeatureVector) -> Result<ModelLabel> {
        let decision = self.decision(features)?;

        if decision > 0.0 {
            Ok(ModelLabel::Spam)
        } else {
            Ok(ModelLabel::Legitimate)
        }
    }

    fn class_probabilities(&self, features: &FeatureVector) -> Result<Option<ClassProbabilities>> {
        let Some(calibration) = self.calibration else {
            return Ok(None);
        };

        let decision = self.decision(features)?;
        let spam = 1.0 / (1.0 + (-(calibration.a * decision + calibration.b)).exp());

        Ok(Some(ClassProbabilities {
            legitimate: 1.0 - spam,
            spam,
        }))
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_model(calibration: Option<Calibration>) -> LinearModel {
        LinearModel {
            vocabulary: HashMap::from([
                ("click".to_string(), 0),
                ("meet".to_string(), 1),
                ("lunch".to_string(), 2),
            ]),
            idf: vec![1.0, 1.0, 1.0],
            weights: vec![1.0, -1.0, -0.5],
            intercept: 0.0,
            calibration,
            name: "test-model".to_string(),
        }
    }

    #[test]
    fn test_vectorize_counts_and_normalizes() {
        let model = test_model(None);

        let features = model.vectorize("click click").unwrap();
        assert_eq!(features.len(), 3);
        assert!((features.0[0] - 1.0).abs() < 1e-9);
        assert_eq!(features.0[1], 0.0);

        // Tokens outside the vocabulary contribute nothing
        let features = model.vectorize("completely unknown words").unwrap();
        assert_eq!(features.0, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_classify_by_decision_sign() {
        let model = test_model(None);

        let spammy = model.vectorize("click").unwrap();
        assert_eq!(model.classify(&spammy).unwrap(), ModelLabel::Spam);

        let hammy = model.vectorize("meet lunch").unwrap();
        assert_eq!(model.classify(&hammy).unwrap(), ModelLabel::Legitimate);
    }

    #[test]
    fn test_dimension_mismatch_is_inference_error() {
        let model = test_model(None);
        let result = model.classify(&FeatureVector(vec![0.0, 1.0]));
        assert!(matches!(result, Err(GuardError::Inference(_))));
    }

    #[test]
    fn test_probabilities_absent_without_calibration() {
        let model = test_model(None);
        let features = model.vectorize("click").unwrap();
        assert!(model.class_probabilities(&features).unwrap().is_none());
    }

    #[test]
    fn test_probabilities_with_calibration() {
        let model = test_model(Some(Calibration { a: 1.0, b: 0.0 }));
        let features = model.vectorize("click").unwrap();

        let probs = model.class_probabilities(&features).unwrap().unwrap();
        assert!(probs.spam > 0.5);
        assert!((probs.spam + probs.legitimate - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_from_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let classifier_path = dir.path().join("model.json");
        let vectorizer_path = dir.path().join("vectorizer.json");

        let mut f = std::fs::File::create(&classifier_path).unwrap();
        write!(
            f,
            r#"{{"weights": [0.5, -0.5], "intercept": 0.1, "name": "unit-test-svm"}}"#
        )
        .unwrap();

        let mut f = std::fs::File::create(&vectorizer_path).unwrap();
        write!(
            f,
            r#"{{"vocabulary": {{"free": 0, "hello": 1}}, "idf": [2.0, 1.0]}}"#
        )
        .unwrap();

        let model = LinearModel::load(&classifier_path, &vectorizer_path).unwrap();
        assert_eq!(model.model_name(), "unit-test-svm");

        let features = model.vectorize("free").unwrap();
        assert_eq!(model.classify(&features).unwrap(), ModelLabel::Spam);
    }

    #[test]
    fn test_load_missing_artifacts() {
        let result = LinearModel::load("/nonexistent/model.json", "/nonexistent/vectorizer.json");
        assert!(matches!(result, Err(GuardError::Io(_))));
    }

    #[test]
    fn test_load_dimension_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let classifier_path = dir.path().join("model.json");
        let vectorizer_path = dir.path().join("vectorizer.json");

        std::fs::write(&classifier_path, r#"{"weights": [0.5], "intercept": 0.0}"#).unwrap();
        std::fs::write(
            &vectorizer_path,
            r#"{"vocabulary": {"free": 0, "hello": 1}, "idf": [2.0, 1.0]}"#,
        )
        .unwrap();

        let result = LinearModel::load(&classifier_path, &vectorizer_path);
        assert!(matches!(result, Err(GuardError::Config(_))));
    }
}
