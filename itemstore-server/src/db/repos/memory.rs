//! In-process item store
//!
//! Same observable behavior as the PostgreSQL store: serial ids starting
//! at 1, never reused, listing in insertion order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::items::{DbError, Item, ItemStore};
use crate::models::{ItemDraft, ItemId};

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Item>,
}

/// Item store kept in memory for the lifetime of the process
#[derive(Default)]
pub struct MemoryItemStore {
    inner: RwLock<Inner>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: ItemId) -> DbError {
    DbError::NotFound {
        resource: "item",
        id: id.to_string(),
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let item = Item {
            id: inner.last_id,
            name: draft.name.into_string(),
            description: draft.description,
        };
        inner.rows.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get(&self, id: ItemId) -> Result<Item, DbError> {
        let inner = self.inner.read().await;
        inner.rows.get(&id.get()).cloned().ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, DbError> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&id.get()).ok_or_else(|| not_found(id))?;

        row.name = draft.name.into_string();
        row.description = draft.description;
        Ok(row.clone())
    }

    async fn delete(&self, id: ItemId) -> Result<(), DbError> {
        let mut inner = self.inner.write().await;
        inner
            .rows
            .remove(&id.get())
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
