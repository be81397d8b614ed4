//! Album catalogue API handlers
//!
//! Thin translation between HTTP and [`AlbumService`](crate::AlbumService):
//! extract and validate input, call the service once, shape the response.
//! Errors flow back as [`recordshop_common::Error`] and pick their own status.

use axum::{extract::State, http::StatusCode, Json};
use recordshop_common::{PathId, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::AlbumsState;
use crate::domain::entities::{Album, NewAlbum};

/// Request for adding an album. Any `id` in the body is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAlbumRequest {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<CreateAlbumRequest> for NewAlbum {
    fn from(request: CreateAlbumRequest) -> Self {
        Self {
            title: request.title,
            artist: request.artist,
            price: request.price,
        }
    }
}

/// Full replacement of an album, addressed by the id in the body
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAlbumRequest {
    #[validate(range(min = 1))]
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<UpdateAlbumRequest> for Album {
    fn from(request: UpdateAlbumRequest) -> Self {
        Self {
            id: request.id,
            title: request.title,
            artist: request.artist,
            price: request.price,
        }
    }
}

/// Album as returned by every endpoint
#[derive(Debug, Serialize)]
pub struct AlbumResponse {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<Album> for AlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            id: album.id,
            title: album.title,
            artist: album.artist,
            price: album.price,
        }
    }
}

/// List all albums
///
/// **GET /v1/albums**
pub async fn list_albums(State(state): State<AlbumsState>) -> Result<Json<Vec<AlbumResponse>>> {
    let albums = state.albums.get_all_albums().await?;

    Ok(Json(albums.into_iter().map(AlbumResponse::from).collect()))
}

/// Get a single album
///
/// **GET /v1/albums/{id}**
///
/// A non-numeric id is rejected with 400 before the service is consulted.
pub async fn get_album(
    State(state): State<AlbumsState>,
    PathId(id): PathId,
) -> Result<Json<AlbumResponse>> {
    let album = state.albums.get_album_by_id(id).await?;

    Ok(Json(album.into()))
}

/// Add an album
///
/// **POST /v1/albums**
///
/// The store assigns the id; the created album is echoed back with it.
pub async fn create_album(
    State(state): State<AlbumsState>,
    ValidatedJson(request): ValidatedJson<CreateAlbumRequest>,
) -> Result<(StatusCode, Json<AlbumResponse>)> {
    let album = state.albums.create_album(request.into()).await?;

    tracing::info!(album_id = album.id, "Album created");
    Ok((StatusCode::CREATED, Json(album.into())))
}

/// Replace an album
///
/// **PUT /v1/albums**
///
/// An id with no stored album is inserted under that id.
pub async fn update_album(
    State(state): State<AlbumsState>,
    ValidatedJson(request): ValidatedJson<UpdateAlbumRequest>,
) -> Result<Json<AlbumResponse>> {
    let album = state.albums.update_album(request.into()).await?;

    tracing::info!(album_id = album.id, "Album updated");
    Ok(Json(album.into()))
}

/// Delete an album
///
/// **DELETE /v1/albums/{id}**
///
/// Returns 204 whether or not the album existed.
pub async fn delete_album(
    State(state): State<AlbumsState>,
    PathId(id): PathId,
) -> Result<StatusCode> {
    state.albums.delete_album(id).await?;

    tracing::info!(album_id = id, "Album deleted");
    Ok(StatusCode::NO_CONTENT)
}
