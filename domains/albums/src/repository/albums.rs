//! Album repository over the generic storage port

use async_trait::async_trait;
use recordshop_common::{RepositoryError, StoreError};
use recordshop_db::{Entity, Store};
use std::sync::Arc;

use super::{AlbumRepository, RepositoryResult};
use crate::domain::entities::{Album, NewAlbum};

/// [`AlbumRepository`] backed by any [`Store`] adapter
#[derive(Clone)]
pub struct StoreAlbumRepository {
    store: Arc<dyn Store<Album>>,
}

impl StoreAlbumRepository {
    pub fn new(store: Arc<dyn Store<Album>>) -> Self {
        Self { store }
    }
}

/// Attach the failing operation to an adapter error
fn failed(operation: &'static str) -> impl FnOnce(StoreError) -> RepositoryError {
    move |source| RepositoryError::store(operation, Album::NAME, source)
}

#[async_trait]
impl AlbumRepository for StoreAlbumRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Album>> {
        self.store.find_all().await.map_err(failed("list"))
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Album> {
        self.store
            .find_one(id)
            .await
            .map_err(failed("load"))?
            .ok_or(RepositoryError::NotFound {
                entity: Album::NAME,
                id,
            })
    }

    async fn create(&self, album: NewAlbum) -> RepositoryResult<Album> {
        // The store assigns the real id; 0 is never bound.
        let created = self
            .store
            .create(&album.with_id(0))
            .await
            .map_err(failed("create"))?;

        tracing::debug!(id = created.id, "Created album");
        Ok(created)
    }

    async fn update(&self, album: Album) -> RepositoryResult<Album> {
        let saved = self.store.save(&album).await.map_err(failed("update"))?;

        tracing::debug!(id = saved.id, "Saved album");
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let removed = self.store.delete(id).await.map_err(failed("delete"))?;

        if removed == 0 {
            tracing::debug!(id, "Delete matched no album");
        }
        Ok(())
    }
}
