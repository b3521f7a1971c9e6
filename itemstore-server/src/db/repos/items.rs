//! Item repository
//!
//! Each operation maps to exactly one SQL statement:
//! - list: SELECT ordered by id (insertion order)
//! - create: INSERT ... RETURNING
//! - get: SELECT by id
//! - update: UPDATE ... RETURNING (full replacement)
//! - delete: DELETE, rows_affected decides NotFound

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::models::{ItemDraft, ItemId};

/// Item record from storage
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    fn item_not_found(id: ItemId) -> Self {
        Self::NotFound {
            resource: "item",
            id: id.to_string(),
        }
    }
}

/// Storage operations for items.
///
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items in insertion order. Empty storage yields an empty list.
    async fn list(&self) -> Result<Vec<Item>, DbError>;

    /// Insert a new item and return it with its assigned id.
    async fn create(&self, draft: ItemDraft) -> Result<Item, DbError>;

    /// Fetch one item, `NotFound` if no row matches.
    async fn get(&self, id: ItemId) -> Result<Item, DbError>;

    /// Overwrite name and description in place, `NotFound` if no row matches.
    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, DbError>;

    /// Remove an item, `NotFound` if no row matches.
    async fn delete(&self, id: ItemId) -> Result<(), DbError>;
}

/// PostgreSQL-backed item repository
#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list(&self) -> Result<Vec<Item>, DbError> {
        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT id, name, description
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, DbError> {
        let item: Item = sqlx::query_as(
            r#"
            INSERT INTO items (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(draft.name.as_str())
        .bind(draft.description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = item.id, "item created");
        Ok(item)
    }

    async fn get(&self, id: ItemId) -> Result<Item, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name, description
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::item_not_found(id))
    }

    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, DbError> {
        let item: Option<Item> = sqlx::query_as(
            r#"
            UPDATE items
            SET name = $2, description = $3
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id.get())
        .bind(draft.name.as_str())
        .bind(draft.description.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        item.ok_or_else(|| DbError::item_not_found(id))
    }

    async fn delete(&self, id: ItemId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::item_not_found(id));
        }

        tracing::debug!(%id, "item deleted");
        Ok(())
    }
}
