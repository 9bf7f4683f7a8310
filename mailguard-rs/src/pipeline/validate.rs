//! Submission well-formedness checks
//!
//! Validation rejects only malformed submissions. Phishing-like or
//! adversarial content must pass so the classifier and override rules
//! can see it.

use crate::error::{GuardError, Result};

/// Minimum trimmed length for a submission
const MIN_EMAIL_LENGTH: usize = 5;

/// Validate a raw email submission before any processing.
pub fn validate_email_input(email_text: &str) -> Result<()> {
    let trimmed = email_text.trim();

    if trimmed.is_empty() {
        return Err(GuardError::InvalidInput(
            "Please enter email content!".to_string(),
        ));
    }

    if trimmed.chars().count() < MIN_EMAIL_LENGTH {
        return Err(GuardError::InvalidInput(
            "Email content too short!".to_string(),
        ));
    }

    Ok(())
}
