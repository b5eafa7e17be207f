mod app;
mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod queries;
mod response;

use app::{AppState, build_router};
use config::{Config, Environment};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Defaults when RUST_LOG is unset
        tracing_subscriber::EnvFilter::new(
            "info,cadastre_api=debug,hyper_util=warn,tower_http=info",
        )
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    setup_logging();
    tracing::info!("Starting cadastre-api...");

    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    if Environment::running_on_lambda() {
        tracing::info!("Running in Lambda mode");
        lambda_http::run(app).await
    } else {
        if config.is_production() {
            tracing::info!("Running in local HTTP server mode with production settings");
        } else {
            tracing::info!("Running in local HTTP server mode");
        }
        let addr = format!("{}:{}", config.server_host, config.server_port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
