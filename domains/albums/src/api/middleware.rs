//! Albums domain state

use recordshop_db::Store;
use std::sync::Arc;

use crate::domain::entities::Album;
use crate::domain::service::{AlbumCatalog, AlbumService};
use crate::repository::StoreAlbumRepository;

/// Application state for the Albums domain
#[derive(Clone)]
pub struct AlbumsState {
    pub albums: Arc<dyn AlbumService>,
}

impl AlbumsState {
    pub fn new(albums: Arc<dyn AlbumService>) -> Self {
        Self { albums }
    }

    /// Wire the full service stack over a storage adapter
    pub fn from_store(store: Arc<dyn Store<Album>>) -> Self {
        let repo = StoreAlbumRepository::new(store);
        Self::new(Arc::new(AlbumCatalog::new(repo)))
    }
}
