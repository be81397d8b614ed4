//! API layer for the Albums domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::AlbumsState;
pub use routes::routes;
