//! mailguard-rs: email spam/phishing screening service
//!
//! Classifies a submitted email body as legitimate, spam, or
//! phishing-suspected by combining a pretrained linear text classifier
//! with deterministic rule-based overrides.
//!
//! # Features
//!
//! - **Decision pipeline**: input validation, text normalization,
//!   TF-IDF vectorization, linear classification, rule overrides
//! - **Pretrained artifacts**: classifier and vectorizer are loaded
//!   once at startup and shared read-only across requests
//! - **Rule overrides**: phishing escalation on link + keyword
//!   combinations, safe-phrase suppression
//! - **REST API**: single prediction endpoint plus health reporting
//!
//! # Example
//!
//! ```no_run
//! use mailguard_rs::model::mock::MockModel;
//! use mailguard_rs::model::ModelLabel;
//! use mailguard_rs::pipeline::ClassificationPipeline;
//! use std::sync::Arc;
//!
//! let model = Arc::new(MockModel::new(ModelLabel::Legitimate));
//! let pipeline = ClassificationPipeline::new(model);
//! let verdict = pipeline.classify("Hi John, let's meet for lunch tomorrow at noon.")?;
//! println!("{:?}", verdict.label);
//! # Ok::<(), mailguard_rs::GuardError>(())
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`model`]: Vectorizer/classifier contract and implementations
//! - [`pipeline`]: The decision pipeline
//! - [`api`]: HTTP API server

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;

// Re-export commonly used types
pub use config::Config;
pub use error::{GuardError, Result};
pub use pipeline::ClassificationPipeline;
