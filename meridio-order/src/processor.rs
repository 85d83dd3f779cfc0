use crate::engine::OrderEngine;
use meridio_core::repository::OrderStore;
use meridio_shared::{Order, OrderStatus, Priority};
use std::sync::Arc;
use tracing::{error, info};

/// Amount above which an order is handled at high priority
pub const HIGH_PRIORITY_THRESHOLD: i64 = 200;

/// Runs one full processing pass per order and persists the outcome
pub struct OrderProcessor {
    engine: OrderEngine,
    store: Arc<dyn OrderStore>,
}

impl OrderProcessor {
    pub fn new(engine: OrderEngine, store: Arc<dyn OrderStore>) -> Self {
        Self { engine, store }
    }

    /// Advance the order through one pass and persist the outcome.
    ///
    /// The priority rule is a pure function of the amount and applies no
    /// matter how the dispatch went. A storage failure leaves the order at
    /// DB_ERROR while the computed priority stands.
    pub async fn process(&self, order: &mut Order, user_id: &str) -> OrderStatus {
        let status = self.engine.resolve(order, user_id).await;
        order.update_status(status);

        let priority = if order.amount > HIGH_PRIORITY_THRESHOLD {
            Priority::High
        } else {
            Priority::Low
        };
        order.update_priority(priority);

        if let Err(err) = self
            .store
            .update_status(order.id, order.status.clone(), order.priority.clone())
            .await
        {
            error!("storage update failed for order {}: {}", order.id, err);
            order.update_status(OrderStatus::DbError);
        }

        info!(
            "order {} processed: status {} priority {}",
            order.id, order.status, order.priority
        );
        order.status.clone()
    }
}
