//! HTTP handlers for the Albums domain

pub mod albums;
