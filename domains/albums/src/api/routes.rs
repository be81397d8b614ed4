//! Route definitions for Albums domain API

use axum::{routing::get, Router};

use super::handlers::albums;
use super::middleware::AlbumsState;

/// Create album catalogue routes
pub fn routes() -> Router<AlbumsState> {
    Router::new()
        .route(
            "/v1/albums",
            get(albums::list_albums)
                .post(albums::create_album)
                .put(albums::update_album),
        )
        .route(
            "/v1/albums/{id}",
            get(albums::get_album).delete(albums::delete_album),
        )
}
