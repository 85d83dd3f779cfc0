use meridio_core::export::ExportWriter;
use meridio_core::remote::{RemoteOrderApi, RemoteOrderReport, RemoteStatus};
use meridio_shared::{Order, OrderKind, OrderStatus};
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// Remote-reported amount at or above which a verified order can complete
pub const REMOTE_AMOUNT_FLOOR: i64 = 50;

/// Local amount below which a verified order completes outright
pub const ORDER_AMOUNT_CEILING: i64 = 100;

/// Exported orders above this amount get a note row in the artifact
pub const HIGH_VALUE_THRESHOLD: i64 = 150;

/// Resolves the terminal status of one processing pass
pub struct OrderEngine {
    writer: Arc<dyn ExportWriter>,
    remote: Arc<dyn RemoteOrderApi>,
}

impl OrderEngine {
    pub fn new(writer: Arc<dyn ExportWriter>, remote: Arc<dyn RemoteOrderApi>) -> Self {
        Self { writer, remote }
    }

    /// Dispatch on the order kind and compute the outcome status.
    ///
    /// Failures never escape: export and remote-call problems degrade to
    /// their failure statuses. Priority and persistence are out of scope
    /// here.
    pub async fn resolve(&self, order: &Order, user_id: &str) -> OrderStatus {
        match order.kind {
            OrderKind::Export => self.resolve_export(order, user_id).await,
            OrderKind::External => self.resolve_external(order).await,
            OrderKind::Internal => {
                if order.expedite {
                    OrderStatus::Completed
                } else {
                    OrderStatus::InProgress
                }
            }
            OrderKind::Unknown => OrderStatus::UnknownType,
        }
    }

    async fn resolve_export(&self, order: &Order, user_id: &str) -> OrderStatus {
        match self.export_order(order, user_id).await {
            Ok(()) => OrderStatus::Exported,
            Err(err) => {
                warn!("export failed for order {}: {}", order.id, err);
                OrderStatus::ExportFailed
            }
        }
    }

    /// Write the export artifact: header, one data row mirroring the order
    /// as it stands, and a note row for high-value orders
    async fn export_order(
        &self,
        order: &Order,
        user_id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let name = format!(
            "orders_{}_{}_{}.csv",
            order.kind,
            user_id,
            Utc::now().timestamp()
        );
        let mut handle = self.writer.open(&name).await?;

        handle
            .write_row(&[
                "ID".to_string(),
                "Type".to_string(),
                "Amount".to_string(),
                "Flag".to_string(),
                "Status".to_string(),
                "Priority".to_string(),
            ])
            .await?;
        handle
            .write_row(&[
                order.id.to_string(),
                order.kind.to_string(),
                order.amount.to_string(),
                order.expedite.to_string(),
                order.status.to_string(),
                order.priority.to_string(),
            ])
            .await?;
        if order.amount > HIGH_VALUE_THRESHOLD {
            handle
                .write_row(&[
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    "Note".to_string(),
                    "High value order".to_string(),
                ])
                .await?;
        }
        handle.finish().await
    }

    async fn resolve_external(&self, order: &Order) -> OrderStatus {
        match self.remote.call(order.id).await {
            Ok(report) if report.status == RemoteStatus::Success => {
                Self::classify_verified(report.order.amount, order)
            }
            Ok(report) => {
                warn!("remote reported {:?} for order {}", report.status, order.id);
                OrderStatus::ApiError
            }
            Err(err) => {
                warn!("remote call failed for order {}: {}", order.id, err);
                OrderStatus::ApiFailure
            }
        }
    }

    /// Outcome for a remote-verified order. The completed branch is checked
    /// first and wins over the expedite condition.
    fn classify_verified(remote_amount: i64, order: &Order) -> OrderStatus {
        if remote_amount >= REMOTE_AMOUNT_FLOOR && order.amount < ORDER_AMOUNT_CEILING {
            OrderStatus::Processed
        } else if remote_amount < REMOTE_AMOUNT_FLOOR || order.expedite {
            OrderStatus::Pending
        } else {
            OrderStatus::Error
        }
    }
}

/// Canned remote adapter for local runs and tests
pub struct MockRemoteApi {
    status: RemoteStatus,
    amount: i64,
}

impl MockRemoteApi {
    pub fn new(status: RemoteStatus, amount: i64) -> Self {
        Self { status, amount }
    }
}

#[async_trait::async_trait]
impl RemoteOrderApi for MockRemoteApi {
    async fn call(
        &self,
        order_id: Uuid,
    ) -> Result<RemoteOrderReport, Box<dyn std::error::Error + Send + Sync>> {
        // Trigger for exercising the transport-failure path
        if order_id.is_nil() {
            return Err("Simulated remote outage".into());
        }

        // Echo the requested id so the report lines up with the order
        let mut order = Order::new(OrderKind::External, self.amount, false);
        order.id = order_id;
        Ok(RemoteOrderReport {
            status: self.status.clone(),
            order,
        })
    }
}
