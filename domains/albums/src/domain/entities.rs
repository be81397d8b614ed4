//! Domain entities for the Albums domain

use recordshop_db::{Entity, PgQueryAs};
use serde::{Deserialize, Serialize};

/// Album entity, the sole record the service manages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Album {
    /// Store-assigned, immutable after creation
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// An album that has not been stored yet and therefore has no id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    /// Attach an id, producing a full album
    pub fn with_id(self, id: i64) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}

impl Entity for Album {
    const TABLE: &'static str = "albums";
    const COLUMNS: &'static [&'static str] = &["title", "artist", "price"];
    const NAME: &'static str = "album";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q, O>(&'q self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query.bind(&self.title).bind(&self.artist).bind(self.price)
    }
}
