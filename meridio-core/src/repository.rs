use async_trait::async_trait;
use uuid::Uuid;
use meridio_shared::{OrderStatus, Priority};

/// Repository trait for persisting order processing outcomes
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Record the status and priority resolved for an order
    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
