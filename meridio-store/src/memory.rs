use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use meridio_core::repository::OrderStore;
use meridio_shared::{OrderStatus, Priority};

/// In-memory order store.
///
/// Keeps the latest outcome per order id. Useful for local runs and tests
/// where nothing has to survive a restart; the store itself never fails.
pub struct MemoryOrderStore {
    records: Arc<RwLock<HashMap<Uuid, (OrderStatus, Priority)>>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Latest recorded outcome for an order, if any
    pub async fn recorded(&self, id: Uuid) -> Option<(OrderStatus, Priority)> {
        let records = self.records.read().await;
        records.get(&id).cloned()
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut records = self.records.write().await;
        records.insert(id, (status, priority));
        Ok(())
    }
}
