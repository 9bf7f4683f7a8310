//! Decision pipeline
//!
//! Validation -> normalization -> vectorization -> classification ->
//! rule overrides -> verdict. Each submission is processed
//! independently against a read-only model handle; nothing here holds
//! per-request mutable state.

pub mod normalize;
pub mod respond;
pub mod rules;
pub mod validate;

pub use normalize::normalize;
pub use respond::{compose, VerdictResponse};
pub use rules::OverrideEngine;
pub use validate::validate_email_input;

use std::sync::Arc;
use tracing::debug;

use crate::error::{GuardError, Result};
use crate::model::{SpamModel, Verdict};

/// The complete decision pipeline over a loaded model.
pub struct ClassificationPipeline {
    model: Arc<dyn SpamModel>,
    rules: OverrideEngine,
}

impl ClassificationPipeline {
    pub fn new(model: Arc<dyn SpamModel>) -> Self {
        Self {
            model,
            rules: OverrideEngine::new(),
        }
    }

    /// Classify a raw email submission.
    ///
    /// Inference faults surface immediately; there are no retries and
    /// never a best-guess label.
    pub fn classify(&self, raw_text: &str) -> Result<Verdict> {
        validate_email_input(raw_text)?;

        let document = normalize(raw_text);
        if document.is_empty() {
            return Err(GuardError::NoMeaningfulContent);
        }
        debug!("Normalized document: {}", document);

        let features = self.model.vectorize(&document)?;
        let model_label = self.model.classify(&features)?;
        debug!("Classifier label: {:?}", model_label);

        let label = self.rules.apply(raw_text, model_label);
        if label != model_label.into() {
            debug!("Override rules adjusted label to {:?}", label);
        }

        let confidence = self
            .model
            .class_probabilities(&features)?
            .map(|probs| probs.max() * 100.0);

        Ok(Verdict { label, confidence })
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }
}
