mod config;
mod error;
mod handlers;
mod logger;
mod models;
mod uptime;

use axum::{routing::{get, Router}};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use config::Config;
use error::AppError;

// written once before the listener starts, read-only afterwards,
// so handlers share it without any locking
#[derive(Clone)]
pub struct AppState {
    pub version: Arc<str>,
    pub started_at: Instant
}

impl AppState {

    pub fn new(version: &str) -> Self {

        AppState {
            version: Arc::from(version),
            started_at: Instant::now()
        }

    }

}

pub fn router(state: AppState) -> Router {

    Router::new()
        .route("/", get(handlers::status_handler))
        .with_state(state)

}

pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, AppError> {

    TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })

}

async fn run(config: Config) -> Result<(), AppError> {

    // uptime is measured from here, before any request can arrive
    let state = AppState::new(&config.version);
    tracing::info!(version = %state.version, "starting user-service");

    let listener = bind_listener(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;

    Ok(())

}

#[tokio::main]
async fn main() -> Result<(), AppError> {

    dotenvy::dotenv().ok();
    logger::init_tracing();

    let config = Config::from_env();

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        return Err(e);
    }

    Ok(())

}
