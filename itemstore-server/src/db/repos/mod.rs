//! Repository implementations for item storage
//!
//! `ItemStore` is the seam the HTTP layer talks to. `PgItemStore` is the
//! production backend; `MemoryItemStore` mirrors its behavior in process.

pub mod items;
pub mod memory;

pub use items::{DbError, Item, ItemStore, PgItemStore};
pub use memory::MemoryItemStore;
