//! Albums domain: album entity, service, repository, and HTTP API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Album, NewAlbum};
pub use domain::service::{AlbumCatalog, AlbumService};

// Re-export repository types
pub use repository::{AlbumRepository, StoreAlbumRepository};

// Re-export API types
pub use api::routes;
pub use api::AlbumsState;
