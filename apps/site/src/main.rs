mod actions;
mod config;
mod content;
mod errors;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::actions::qr::CanvasQrRenderer;
use crate::config::Config;
use crate::content::load_resume;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV site v{}", env!("CARGO_PKG_VERSION"));

    // The document is built once and shared read-only by every request.
    let resume = load_resume(config.resume_data.as_deref())?;
    info!(
        "CV for {}: {} skills, {} projects, {} education entries",
        resume.name,
        resume.skills.len(),
        resume.projects.len(),
        resume.education.len()
    );
    match &config.public_url {
        Some(url) => info!("Share address: {url}"),
        None => info!("Share address: derived from request Host header"),
    }

    let state = AppState {
        resume: Arc::new(resume),
        config: config.clone(),
        qr: Arc::new(CanvasQrRenderer),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
