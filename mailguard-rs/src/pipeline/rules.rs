//! Rule-based verdict overrides
//!
//! Deterministic keyword/phrase checks applied after model inference,
//! against the raw (pre-normalization) text. A classifier verdict of
//! spam passes through untouched; only legitimate verdicts are
//! re-examined.
//!
//! Rule precedence: a safe phrase suppresses everything; otherwise a
//! link combined with a phishing keyword escalates to
//! phishing-suspected.

use crate::model::{ModelLabel, PredictionLabel};

/// Keywords matched case-sensitively against the raw text
const PHISHING_KEYWORDS: [&str; 10] = [
    "verify",
    "account",
    "password",
    "login",
    "click",
    "bank",
    "urgent",
    "immediately",
    "suspend",
    "update",
];

/// Phrases matched against the lowercased raw text
const SAFE_PHRASES: [&str; 3] = [
    "we never ask for otp",
    "informational purposes only",
    "no action is required",
];

/// Keyword/phrase override engine
#[derive(Debug, Clone, Default)]
pub struct OverrideEngine;

impl OverrideEngine {
    pub fn new() -> Self {
        Self
    }

    /// Apply override rules to the classifier's verdict.
    pub fn apply(&self, raw_text: &str, label: ModelLabel) -> PredictionLabel {
        match label {
            ModelLabel::Spam => PredictionLabel::Spam,
            ModelLabel::Legitimate => {
                let lowered = raw_text.to_lowercase();
                if SAFE_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
                    return PredictionLabel::Legitimate;
                }

                let has_link =
                    raw_text.contains("http://") || raw_text.contains("https://");
                let has_keyword = PHISHING_KEYWORDS
                    .iter()
                    .any(|keyword| raw_text.contains(keyword));

                if has_link && has_keyword {
                    PredictionLabel::PhishingSuspected
                } else {
                    PredictionLabel::Legitimate
                }
            }
        }
    }
}
