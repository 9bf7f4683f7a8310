//! API request handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::GuardError;
use crate::pipeline::{compose, ClassificationPipeline, VerdictResponse};

/// Shared application state
pub struct AppState {
    /// None when the model artifacts failed to load at startup; the
    /// service then stays up but reports unavailable on every request.
    pub pipeline: Option<Arc<ClassificationPipeline>>,
}

/// Prediction request body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub email: String,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// POST /api/predict - Classify an email submission
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<VerdictResponse>, (StatusCode, Json<ApiError>)> {
    // Availability is checked before the submission is even validated
    let Some(pipeline) = state.pipeline.as_ref() else {
        let err = GuardError::ServiceUnavailable;
        warn!("Prediction rejected: {}", err);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new(&err.to_string())),
        ));
    };

    match pipeline.classify(&req.email) {
        Ok(verdict) => {
            info!("Classified submission as {:?}", verdict.label);
            Ok(Json(compose(&verdict)))
        }
        Err(err) => {
            let status = if err.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            warn!("Prediction failed ({}): {}", status, err);
            Err((status, Json(ApiError::new(&err.to_string()))))
        }
    }
}

/// GET /health - Service health and model status
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    match state.pipeline.as_ref() {
        Some(pipeline) => Json(serde_json::json!({
            "status": "healthy",
            "service": "mailguard-rs",
            "version": env!("CARGO_PKG_VERSION"),
            "model": pipeline.model_name(),
        })),
        None => Json(serde_json::json!({
            "status": "degraded",
            "service": "mailguard-rs",
            "version": env!("CARGO_PKG_VERSION"),
            "model": serde_json::Value::Null,
        })),
    }
}
