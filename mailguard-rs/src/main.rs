use mailguard_rs::api::server::local_ip;
use mailguard_rs::api::ApiServer;
use mailguard_rs::config::Config;
use mailguard_rs::model::LinearModel;
use mailguard_rs::pipeline::ClassificationPipeline;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "pretty" {
        builder.pretty().init();
    } else {
        builder.compact().init();
    }

    info!("Starting mailguard-rs");
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Classifier artifact: {}", config.model.classifier_path);
    info!("  Vectorizer artifact: {}", config.model.vectorizer_path);

    // Load model artifacts once; failure is reported once and leaves
    // the service permanently unavailable for this run
    info!("Loading models...");
    let pipeline = match LinearModel::load(
        &config.model.classifier_path,
        &config.model.vectorizer_path,
    ) {
        Ok(model) => {
            info!("Models loaded successfully");
            Some(Arc::new(ClassificationPipeline::new(Arc::new(model))))
        }
        Err(e) => {
            error!("Failed to load models: {}", e);
            error!("Serving in degraded mode; every prediction will be rejected until restart");
            None
        }
    };

    let port = config
        .server
        .listen_addr
        .rsplit(':')
        .next()
        .unwrap_or("5000");
    info!("======================================================================");
    info!("EMAIL SECURITY SYSTEM STARTED");
    info!("  Desktop (localhost):  http://localhost:{}", port);
    info!("  Mobile (same WiFi):   http://{}:{}", local_ip(), port);
    info!("======================================================================");

    let server = ApiServer::new(pipeline, config.server.listen_addr.clone());
    server.run().await?;

    Ok(())
}
