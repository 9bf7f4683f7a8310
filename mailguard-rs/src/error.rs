use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Models not loaded!")]
    ServiceUnavailable,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Email text contains no meaningful words!\nTry entering a real email.")]
    NoMeaningfulContent,

    #[error("Prediction error: {0}")]
    Inference(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GuardError {
    /// Whether the error is the caller's fault (bad submission) rather
    /// than a service-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GuardError::InvalidInput(_) | GuardError::NoMeaningfulContent
        )
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;
