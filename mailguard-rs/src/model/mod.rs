//! Spam model abstraction
//!
//! The decision pipeline consumes two opaque capabilities: a fitted
//! vectorizer (document -> feature vector) and a classifier (feature
//! vector -> label, optionally a probability distribution). Both are
//! exposed through the [`SpamModel`] trait so the concrete TF-IDF /
//! linear implementation stays swappable.

use crate::error::Result;
use serde::{Deserialize, Serialize};

pub mod linear;
pub mod mock;

pub use linear::LinearModel;

/// Feature vector produced by the vectorizer.
///
/// Opaque to the pipeline; dimensionality is fixed by the fitted
/// vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(pub Vec<f64>);

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Label space of the classifier itself.
///
/// The classifier only ever distinguishes legitimate mail from spam;
/// phishing suspicion is assigned downstream by the override rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelLabel {
    Legitimate,
    Spam,
}

/// Final label space after rule overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionLabel {
    Legitimate,
    Spam,
    PhishingSuspected,
}

impl From<ModelLabel> for PredictionLabel {
    fn from(label: ModelLabel) -> Self {
        match label {
            ModelLabel::Legitimate => PredictionLabel::Legitimate,
            ModelLabel::Spam => PredictionLabel::Spam,
        }
    }
}

/// Probability distribution over the classifier's two labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub legitimate: f64,
    pub spam: f64,
}

impl ClassProbabilities {
    /// Probability of the most likely class.
    pub fn max(&self) -> f64 {
        self.legitimate.max(self.spam)
    }
}

/// Final verdict produced by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub label: PredictionLabel,
    /// Confidence percentage (0-100), absent when the model exposes no
    /// probability distribution.
    pub confidence: Option<f64>,
}

/// Vectorizer/classifier contract.
///
/// Implementations are stateless for inference and safely shared
/// read-only across concurrently handled requests.
pub trait SpamModel: Send + Sync {
    /// Turn a normalized document into a feature vector.
    fn vectorize(&self, document: &str) -> Result<FeatureVector>;

    /// Classify a feature vector.
    fn classify(&self, features: &FeatureVector) -> Result<ModelLabel>;

    /// Probability distribution over labels, if the model supports it.
    fn class_probabilities(&self, _features: &FeatureVector) -> Result<Option<ClassProbabilities>> {
        Ok(None)
    }

    /// Get model name
    fn model_name(&self) -> &str;
}
