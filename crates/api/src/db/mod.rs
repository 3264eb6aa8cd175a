//! Database operations for the order service.
//!
//! # Tables
//!
//! - `orders` - One row per order: `id` (text primary key), `customer`,
//!   `flavor`. The storage layer is the sole source of truth; handlers hold
//!   no state between invocations.
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and are applied at startup via
//! `sqlx::migrate!` (see `main.rs`).

pub mod orders;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use scoop_core::OrderId;

use crate::models::Order;

pub use orders::OrderRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage seam between handlers and the document store.
///
/// One shared implementation handle is built at process start and injected
/// into every handler; tests substitute an in-memory double.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Point lookup by key. `Ok(None)` means no such record.
    async fn get_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError>;

    /// Insert a record under a freshly generated id, returned to the caller.
    async fn insert(&self, customer: &str, flavor: &str) -> Result<OrderId, RepositoryError>;

    /// Partial update of only the Flavor attribute. Updating a key that does
    /// not exist is a successful no-op.
    async fn update_flavor(&self, id: &OrderId, flavor: &str) -> Result<(), RepositoryError>;

    /// Unconditional delete by key; deleting an absent key is not an error.
    async fn delete_by_id(&self, id: &OrderId) -> Result<(), RepositoryError>;

    /// Full unbounded scan in the store's natural order.
    async fn scan_all(&self) -> Result<Vec<Order>, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
