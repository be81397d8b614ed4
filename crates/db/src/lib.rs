//! Persistence adapters, storage port, and migrations for Record Shop
//!
//! Business code depends on the [`Store`] port only; [`PgStore`] and
//! [`MemoryStore`] are the interchangeable adapters behind it.

pub mod bootstrap;
pub mod entity;
pub mod memory;
pub mod postgres;
pub mod store;

pub use bootstrap::{connect, migrate};
pub use entity::{Entity, PgQueryAs};
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::{Store, StoreResult};
