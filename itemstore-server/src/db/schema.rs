//! Table bootstrap for the items store

use sqlx::PgPool;

/// Create the items table if it does not exist yet.
///
/// Safe to run on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring items schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Items schema ready");
    Ok(())
}
