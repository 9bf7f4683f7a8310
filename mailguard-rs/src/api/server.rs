//! API Server - HTTP server for the prediction REST API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::error::Result;
use crate::pipeline::ClassificationPipeline;

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server.
    ///
    /// `pipeline` is None when the model artifacts failed to load; the
    /// server still runs and reports unavailable on every prediction.
    pub fn new(pipeline: Option<Arc<ClassificationPipeline>>, addr: String) -> Self {
        let state = Arc::new(AppState { pipeline });
        Self { state, addr }
    }

    /// Build the router (exposed for in-process tests).
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(handlers::health))
            .route("/health", get(handlers::health))
            .route("/api/predict", post(handlers::predict))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(&self.state))
    }

    /// Bind and serve until shutdown.
    pub async fn run(self) -> Result<()> {
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("API server listening on http://{}", self.addr);

        axum::serve(listener, app)
            .await
            .map_err(crate::error::GuardError::Io)?;

        Ok(())
    }
}

/// Best-effort local network IP discovery for the startup banner.
///
/// Connecting a UDP socket never sends packets; it only asks the OS
/// which interface would route to the target.
pub fn local_ip() -> String {
    fn probe() -> std::io::Result<String> {
        let socket = std::net::UdpSocket::bind("0.0.0.0:0")?;
        socket.connect("8.8.8.8:80")?;
        Ok(socket.local_addr()?.ip().to_string())
    }

    probe().unwrap_or_else(|_| "127.0.0.1".to_string())
}
