//! In-memory storage adapter
//!
//! Keeps rows in a `BTreeMap` and assigns ids from a counter, mirroring the
//! semantics of [`PgStore`](crate::PgStore): `save` is an upsert, deleting a
//! missing row affects zero rows, ids are never reused after an upsert.
//! Useful for tests and for running the service without a database.

use async_trait::async_trait;
use recordshop_common::StoreError;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::entity::Entity;
use crate::store::{Store, StoreResult};

struct Rows<E> {
    rows: BTreeMap<i64, E>,
    /// `None` once `i64::MAX` has been handed out or upserted
    next_id: Option<i64>,
    failure: Option<String>,
}

/// [`Store`] holding rows in process memory
pub struct MemoryStore<E> {
    inner: Mutex<Rows<E>>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Rows {
                rows: BTreeMap::new(),
                next_id: Some(1),
                failure: None,
            }),
        }
    }

    /// Make every subsequent operation fail with [`StoreError::Unavailable`]
    pub fn fail_with(&self, reason: impl Into<String>) {
        self.lock().failure = Some(reason.into());
    }

    /// Undo [`fail_with`](Self::fail_with)
    pub fn recover(&self) {
        self.lock().failure = None;
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Rows<E>> {
        // A panic while holding the lock cannot leave the map half-written.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the rows, or report the injected failure
    fn available(&self) -> StoreResult<MutexGuard<'_, Rows<E>>> {
        let guard = self.lock();
        match &guard.failure {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(guard),
        }
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Store<E> for MemoryStore<E> {
    async fn create(&self, entity: &E) -> StoreResult<E> {
        let mut state = self.available()?;
        let id = state
            .next_id
            .ok_or_else(|| StoreError::Unavailable("id space exhausted".to_string()))?;
        state.next_id = id.checked_add(1);

        let mut created = entity.clone();
        created.set_id(id);
        state.rows.insert(id, created.clone());

        Ok(created)
    }

    async fn find_all(&self) -> StoreResult<Vec<E>> {
        let state = self.available()?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_one(&self, id: i64) -> StoreResult<Option<E>> {
        let state = self.available()?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn save(&self, entity: &E) -> StoreResult<E> {
        let mut state = self.available()?;
        let id = entity.id();
        if state.next_id.is_some_and(|next| id >= next) {
            state.next_id = id.checked_add(1);
        }
        state.rows.insert(id, entity.clone());

        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let mut state = self.available()?;
        Ok(u64::from(state.rows.remove(&id).is_some()))
    }
}
