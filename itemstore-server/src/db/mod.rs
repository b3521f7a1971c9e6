//! Database layer - connection pool and item repository
//!
//! - One shared pool per process, passed down explicitly
//! - Every repository operation is a single statement, no transactions
//! - Missing rows surface as DbError::NotFound, never as empty success

pub mod pool;
pub mod schema;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use schema::ensure_schema;
pub use repos::*;
