//! Record Shop application composition root
//!
//! Composes the domain routers and shared HTTP middleware into a single
//! application.

pub mod cli;
pub mod telemetry;

use axum::{routing::get, Router};
use recordshop_albums::{Album, AlbumsState};
use recordshop_common::Config;
use recordshop_db::PgStore;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Banner served on `/`
pub const BANNER: &str = concat!("Record Shop API v", env!("CARGO_PKG_VERSION"));

/// Create the application backed by PostgreSQL, with middleware applied
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let albums = AlbumsState::from_store(Arc::new(PgStore::<Album>::new(pool)));

    with_middleware(app_router(albums), config.request_timeout)
}

/// Compose domain routers with the shared infrastructure routes
pub fn app_router(albums: AlbumsState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { BANNER }))
        .merge(recordshop_albums::routes().with_state(albums))
}

/// Access logging and a per-request deadline; an expired request gets 408.
pub fn with_middleware(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(request_timeout))
            .into_inner(),
    )
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
