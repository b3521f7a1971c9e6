//! HTTP server command
//!
//! Builds the item store (PostgreSQL or in-memory) and runs the server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use itemstore_server::db::{create_pool_with_options, ensure_schema, DEFAULT_MAX_CONNECTIONS};
use itemstore_server::{run_server, ItemStore, MemoryItemStore, PgItemStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Database URL (PostgreSQL connection string)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum connections in the database pool
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep items in process memory instead of PostgreSQL (lost on exit).
    /// Takes precedence over --database-url.
    #[arg(long)]
    pub memory: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store = build_store(&args).await?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting itemstore server on {}", args.bind);

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

async fn build_store(args: &ServeArgs) -> Result<Arc<dyn ItemStore>> {
    if args.memory {
        tracing::warn!("Using in-memory item store - data is lost on exit");
        return Ok(Arc::new(MemoryItemStore::new()));
    }

    let database_url = args
        .database_url
        .as_deref()
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env file (or pass --memory)")?;

    let pool = create_pool_with_options(database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    ensure_schema(&pool)
        .await
        .context("Failed to create items table")?;

    Ok(Arc::new(PgItemStore::new(pool)))
}
