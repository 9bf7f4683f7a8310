//! Verdict display composition
//!
//! Maps the final label to the stable display contract consumed by the
//! frontend. Pure, total, no failure modes.

use serde::{Deserialize, Serialize};

use crate::model::{PredictionLabel, Verdict};

/// Display-ready verdict payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictResponse {
    pub classification: String,
    pub status: String,
    pub emoji: String,
    pub color: String,
    /// Confidence percentage (0-100) rounded to 2 decimals, null when
    /// the model exposes no probabilities
    pub confidence: Option<f64>,
    pub advice: String,
    pub success: bool,
}

const LEGITIMATE_ADVICE: &str =
    "🟢 This email appears to be LEGITIMATE<br>✓ Safe to open and interact with";

const SPAM_ADVICE: &str = "🔴 This email appears to be SPAM/PHISHING<br>\
    ✗ Be cautious - do not click links<br>\
    ✗ Do not provide personal information";

/// Compose the display payload for a verdict.
pub fn compose(verdict: &Verdict) -> VerdictResponse {
    let confidence = verdict.confidence.map(round2);

    // Spam and phishing-suspected share the warning bucket
    match verdict.label {
        PredictionLabel::Legitimate => VerdictResponse {
            classification: "LEGITIMATE EMAIL".to_string(),
            status: "legitimate".to_string(),
            emoji: "✅".to_string(),
            color: "#2ecc71".to_string(),
            confidence,
            advice: LEGITIMATE_ADVICE.to_string(),
            success: true,
        },
        PredictionLabel::Spam | PredictionLabel::PhishingSuspected => VerdictResponse {
            classification: "SPAM/PHISHING EMAIL".to_string(),
            status: "spam".to_string(),
            emoji: "⚠️".to_string(),
            color: "#e74c3c".to_string(),
            confidence,
            advice: SPAM_ADVICE.to_string(),
            success: true,
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legitimate_bucket() {
        let response = compose(&Verdict {
            label: PredictionLabel::Legitimate,
            confidence: Some(97.5),
        });

        assert_eq!(response.classification, "LEGITIMATE EMAIL");
        assert_eq!(response.status, "legitimate");
        assert_eq!(response.color, "#2ecc71");
        assert_eq!(response.confidence, Some(97.5));
        assert!(response.success);
    }

    #[test]
    fn test_spam_and_phishing_share_bucket() {
        let spam = compose(&Verdict {
            label: PredictionLabel::Spam,
            confidence: None,
        });
        let phishing = compose(&Verdict {
            label: PredictionLabel::PhishingSuspected,
            confidence: None,
        });

        assert_eq!(spam.classification, "SPAM/PHISHING EMAIL");
        assert_eq!(spam.classification, phishing.classification);
        assert_eq!(spam.status, "spam");
        assert_eq!(spam.status, phishing.status);
        assert_eq!(spam.color, phishing.color);
    }

    #[test]
    fn test_confidence_rounded_to_two_decimals() {
        let response = compose(&Verdict {
            label: PredictionLabel::Spam,
            confidence: Some(73.456789),
        });
        assert_eq!(response.confidence, Some(73.46));
    }

    #[test]
    fn test_absent_confidence_serializes_as_null() {
        let response = compose(&Verdict {
            label: PredictionLabel::Legitimate,
            confidence: None,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["confidence"].is_null());
        assert_eq!(json["status"], "legitimate");
    }
}
