//! Albums domain layer: entities and the album service

pub mod entities;
pub mod service;
