//! PostgreSQL storage adapter

use async_trait::async_trait;
use sqlx::{PgPool, Postgres};
use std::marker::PhantomData;

use crate::entity::Entity;
use crate::store::{Store, StoreResult};

/// Serializes `save` per table until commit. `setval` is not transactional,
/// so the check-then-set below is only safe with one advancing writer.
const LOCK_TABLE_SQL: &str = "SELECT pg_advisory_xact_lock(hashtext($1))";

/// Moves the key sequence past an id written explicitly by an upsert, so a
/// later `create` does not hand out the same id. Never moves it backwards.
const ADVANCE_SEQUENCE_SQL: &str = "\
    SELECT setval(pg_get_serial_sequence($1, $2), $3) \
    WHERE $3 > COALESCE(pg_sequence_last_value(pg_get_serial_sequence($1, $2)::regclass), 0)";

/// [`Store`] backed by a PostgreSQL connection pool
pub struct PgStore<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for PgStore<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> PgStore<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Entity> Store<E> for PgStore<E> {
    async fn create(&self, entity: &E) -> StoreResult<E> {
        let query = insert_sql::<E>();
        let created = entity
            .bind_columns(sqlx::query_as::<Postgres, E>(&query))
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn find_all(&self) -> StoreResult<Vec<E>> {
        let query = select_all_sql::<E>();
        let rows = sqlx::query_as::<Postgres, E>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn find_one(&self, id: i64) -> StoreResult<Option<E>> {
        let query = select_one_sql::<E>();
        let row = sqlx::query_as::<Postgres, E>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn save(&self, entity: &E) -> StoreResult<E> {
        let query = upsert_sql::<E>();
        let mut tx = self.pool.begin().await?;

        sqlx::query(LOCK_TABLE_SQL)
            .bind(E::TABLE)
            .execute(&mut *tx)
            .await?;

        let saved = entity
            .bind_columns(sqlx::query_as::<Postgres, E>(&query).bind(entity.id()))
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(ADVANCE_SEQUENCE_SQL)
            .bind(E::TABLE)
            .bind(E::KEY)
            .bind(saved.id())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(table = E::TABLE, id = saved.id(), "Saved row");

        Ok(saved)
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let query = delete_sql::<E>();
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}

/// Key followed by every non-key column
fn all_columns<E: Entity>() -> String {
    std::iter::once(E::KEY)
        .chain(E::COLUMNS.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `$first, $first+1, ...` for `count` parameters
fn placeholders(first: usize, count: usize) -> String {
    (first..first + count)
        .map(|n| format!("${n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn select_all_sql<E: Entity>() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        all_columns::<E>(),
        E::TABLE,
        E::KEY
    )
}

fn select_one_sql<E: Entity>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        all_columns::<E>(),
        E::TABLE,
        E::KEY
    )
}

fn insert_sql<E: Entity>() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders(1, E::COLUMNS.len()),
        all_columns::<E>()
    )
}

fn upsert_sql<E: Entity>() -> String {
    let assignments = E::COLUMNS
        .iter()
        .map(|column| format!("{column} = EXCLUDED.{column}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {table} ({columns}) VALUES ({values}) \
         ON CONFLICT ({key}) DO UPDATE SET {assignments} RETURNING {columns}",
        table = E::TABLE,
        columns = all_columns::<E>(),
        values = placeholders(1, E::COLUMNS.len() + 1),
        key = E::KEY,
    )
}

fn delete_sql<E: Entity>() -> String {
    format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::KEY)
}
