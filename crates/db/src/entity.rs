//! Entity description consumed by the generic storage adapters

use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    FromRow, Postgres,
};

/// Query type the entity binds its column values onto
pub type PgQueryAs<'q, O> = QueryAs<'q, Postgres, O, PgArguments>;

/// A persistable record keyed by a store-assigned integer id.
///
/// The adapters know nothing about concrete entities; everything they need
/// (table, columns, key, how to bind values) comes from this trait.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static {
    /// Table the entity is persisted in
    const TABLE: &'static str;

    /// Primary-key column
    const KEY: &'static str = "id";

    /// Non-key columns, in the order `bind_columns` binds them
    const COLUMNS: &'static [&'static str];

    /// Name used in error messages and logs
    const NAME: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Bind every non-key column value onto `query`, in `COLUMNS` order.
    fn bind_columns<'q, O>(&'q self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O>;
}
