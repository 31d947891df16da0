mod config;
mod controller;
mod data;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use axum::extract::DefaultBodyLimit;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    service::{auth::token::TokenProvider, upload::MAX_FILE_SIZE},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("inkpress=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let upload_dir = startup::ensure_upload_dir(&config)?;

    let tokens = TokenProvider::new(
        config.jwt_secret.as_bytes(),
        config.jwt_access_ttl_secs,
        config.jwt_refresh_ttl_secs,
    );

    tracing::info!("starting server on {}", config.bind_addr);

    let app = router::router(&upload_dir)
        .with_state(AppState::new(db, tokens, upload_dir))
        // Multipart bodies carry up to a 5 MB image plus field overhead.
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 64 * 1024))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
