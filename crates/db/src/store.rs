//! Storage port implemented by every persistence adapter

use async_trait::async_trait;
use recordshop_common::StoreError;

use crate::entity::Entity;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Generic CRUD port over any [`Entity`].
///
/// Not-found is never an error at this level: `find_one` answers `None` and
/// `delete` answers the number of rows it removed. `Err` always means the
/// store itself failed.
#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    /// Insert the non-key columns of `entity` and return the stored row with
    /// its freshly assigned id. Any id already on `entity` is ignored.
    async fn create(&self, entity: &E) -> StoreResult<E>;

    /// Every row, ordered by key
    async fn find_all(&self) -> StoreResult<Vec<E>>;

    async fn find_one(&self, id: i64) -> StoreResult<Option<E>>;

    /// Insert-or-replace by primary key.
    async fn save(&self, entity: &E) -> StoreResult<E>;

    /// Remove the row with `id`; returns rows affected (0 when nothing matched).
    async fn delete(&self, id: i64) -> StoreResult<u64>;
}
