//! REST API module for mailguard-rs
//!
//! Provides the HTTP surface over the decision pipeline.

pub mod handlers;
pub mod server;

pub use handlers::AppState;
pub use server::ApiServer;
