use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use meridio_shared::Order;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteStatus {
    Success,
    Rejected,
    /// Catch-all for statuses outside the known set
    #[serde(other)]
    Unknown,
}

/// Verification report returned by the upstream order service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteOrderReport {
    pub status: RemoteStatus,
    pub order: Order,
}

#[async_trait]
pub trait RemoteOrderApi: Send + Sync {
    /// Fetch the verification report for an order
    async fn call(
        &self,
        order_id: Uuid,
    ) -> Result<RemoteOrderReport, Box<dyn std::error::Error + Send + Sync>>;
}
