//! # Blog Posts API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::HttpServer;
use anyhow::Context;

mod app;
mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env()?;

    tracing::info!(
        "Starting blog posts API on {}:{} (posts under `{}`)",
        config.host,
        config.port,
        config.posts_path
    );

    let state = AppState::new(&config);

    let settings = config.clone();
    HttpServer::new(move || app::build_app(state.clone(), settings.clone()))
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
        .run()
        .await?;

    Ok(())
}
