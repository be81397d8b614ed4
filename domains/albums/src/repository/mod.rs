//! Repository layer for the Albums domain

pub mod albums;

use async_trait::async_trait;
use recordshop_common::RepositoryError;
use std::sync::Arc;

use crate::domain::entities::{Album, NewAlbum};

pub use albums::StoreAlbumRepository;

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Album data access, independent of the storage engine
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// All albums; an empty table is an empty list, not an error
    async fn get_all(&self) -> RepositoryResult<Vec<Album>>;

    /// Fails with [`RepositoryError::NotFound`] when no album has `id`
    async fn get_by_id(&self, id: i64) -> RepositoryResult<Album>;

    async fn create(&self, album: NewAlbum) -> RepositoryResult<Album>;

    /// Full replace by id. An id with no row is inserted rather than rejected.
    async fn update(&self, album: Album) -> RepositoryResult<Album>;

    /// Succeeds whether or not a row matched.
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}

#[async_trait]
impl<R: AlbumRepository + ?Sized> AlbumRepository for Arc<R> {
    async fn get_all(&self) -> RepositoryResult<Vec<Album>> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Album> {
        (**self).get_by_id(id).await
    }

    async fn create(&self, album: NewAlbum) -> RepositoryResult<Album> {
        (**self).create(album).await
    }

    async fn update(&self, album: Album) -> RepositoryResult<Album> {
        (**self).update(album).await
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        (**self).delete(id).await
    }
}
