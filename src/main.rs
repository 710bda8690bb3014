//! Team Genius server binary.

use std::sync::Arc;

use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use team_genius::adapters::{team_router, InMemoryRosterSessionStore, TeamAppState};
use team_genius::config::{AppConfig, ValidationError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.validate()?;

    let phase_table = config.team.load_phase_table()?;
    tracing::info!(phases = phase_table.len(), "Phase table loaded");

    let state = TeamAppState::new(Arc::new(InMemoryRosterSessionStore::new()))
        .with_phase_table(phase_table)
        .with_coverage(config.team.coverage_policy, config.team.weights()?)
        .with_default_mode(config.team.profile_mode);

    let app = team_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config)?);

    let addr = config.server.socket_addr()?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        policy = %config.team.coverage_policy,
        "Starting team genius server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, ValidationError> {
    let origins = config.server.cors_origins()?;
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    Ok(if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    })
}
