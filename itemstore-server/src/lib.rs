//! itemstore-server: CRUD HTTP service for a single `items` table
//!
//! Layers, leaves first:
//! - [`models`]: validated ids, names, and create/update input
//! - [`db`]: shared pool, schema bootstrap, and the [`ItemStore`] repository
//! - [`http`]: axum routes mapping HTTP verbs onto repository operations

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, Item, ItemStore, MemoryItemStore, PgItemStore};
pub use http::{build_router, run_server, ServerConfig, ServerError};
