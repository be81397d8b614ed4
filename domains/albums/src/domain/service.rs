//! Album service: business orchestration between handlers and the repository
//!
//! There are no business rules on albums today, so [`AlbumCatalog`] forwards
//! every call unchanged. Validation (price, title) belongs here when it is
//! introduced, leaving handlers and repositories untouched.

use async_trait::async_trait;
use recordshop_common::Result;

use crate::domain::entities::{Album, NewAlbum};
use crate::repository::AlbumRepository;

/// Operations the HTTP layer can invoke on albums
#[async_trait]
pub trait AlbumService: Send + Sync {
    async fn get_all_albums(&self) -> Result<Vec<Album>>;

    async fn get_album_by_id(&self, id: i64) -> Result<Album>;

    async fn create_album(&self, album: NewAlbum) -> Result<Album>;

    async fn update_album(&self, album: Album) -> Result<Album>;

    async fn delete_album(&self, id: i64) -> Result<()>;
}

/// Pass-through [`AlbumService`] over an [`AlbumRepository`]
#[derive(Clone)]
pub struct AlbumCatalog<R> {
    repo: R,
}

impl<R: AlbumRepository> AlbumCatalog<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: AlbumRepository> AlbumService for AlbumCatalog<R> {
    async fn get_all_albums(&self) -> Result<Vec<Album>> {
        Ok(self.repo.get_all().await?)
    }

    async fn get_album_by_id(&self, id: i64) -> Result<Album> {
        Ok(self.repo.get_by_id(id).await?)
    }

    async fn create_album(&self, album: NewAlbum) -> Result<Album> {
        Ok(self.repo.create(album).await?)
    }

    async fn update_album(&self, album: Album) -> Result<Album> {
        Ok(self.repo.update(album).await?)
    }

    async fn delete_album(&self, id: i64) -> Result<()> {
        Ok(self.repo.delete(id).await?)
    }
}
