//! Order repository for database operations.
//!
//! All access to the `orders` table goes through [`OrderRepository`]. Queries
//! use the runtime sqlx API and map rows by column name.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;

use scoop_core::OrderId;

use super::{OrderStore, RepositoryError};
use crate::models::Order;

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository borrowing the shared pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

fn map_order(row: &PgRow) -> Result<Order, sqlx::Error> {
    Ok(Order {
        id: row.try_get("id")?,
        customer: row.try_get("customer")?,
        flavor: row.try_get("flavor")?,
    })
}

#[async_trait]
impl OrderStore for OrderRepository<'_> {
    async fn get_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT id, customer, flavor
            FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(map_order).transpose().map_err(Into::into)
    }

    async fn insert(&self, customer: &str, flavor: &str) -> Result<OrderId, RepositoryError> {
        let id = OrderId::generate();

        sqlx::query(
            r"
            INSERT INTO orders (id, customer, flavor)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(&id)
        .bind(customer)
        .bind(flavor)
        .execute(self.pool)
        .await?;

        Ok(id)
    }

    async fn update_flavor(&self, id: &OrderId, flavor: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE orders
            SET flavor = $2
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(flavor)
        .execute(self.pool)
        .await?;

        // Zero rows means the key was absent; the update is a no-op, not an
        // error.
        if result.rows_affected() == 0 {
            tracing::debug!(order_id = %id, "update matched no record");
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: &OrderId) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            DELETE FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, customer, flavor
            FROM orders
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|row| map_order(row).map_err(Into::into))
            .collect()
    }
}
