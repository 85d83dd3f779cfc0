use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::DbClient;
use meridio_core::repository::OrderStore;
use meridio_shared::{OrderStatus, Priority};

/// Postgres-backed order store.
///
/// Keeps the latest outcome per order id in the order_outcomes table; the
/// upsert makes repeated passes over the same order idempotent.
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(db: &DbClient) -> Self {
        Self {
            pool: db.pool.clone(),
        }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            "INSERT INTO order_outcomes (order_id, status, priority) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (order_id) DO UPDATE \
             SET status = EXCLUDED.status, priority = EXCLUDED.priority, updated_at = NOW()",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(priority.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
