use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Declared order kind; selects the processing path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    Export,
    External,
    Internal,
    /// Catch-all for tokens outside the known set
    #[serde(other)]
    Unknown,
}

impl OrderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Export => "EXPORT",
            OrderKind::External => "EXTERNAL",
            OrderKind::Internal => "INTERNAL",
            OrderKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order status in the processing lifecycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    Exported,
    ExportFailed,
    ApiFailure,
    ApiError,
    Processed,
    Pending,
    Error,
    Completed,
    InProgress,
    UnknownType,
    DbError,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::Exported => "EXPORTED",
            OrderStatus::ExportFailed => "EXPORT_FAILED",
            OrderStatus::ApiFailure => "API_FAILURE",
            OrderStatus::ApiError => "API_ERROR",
            OrderStatus::Processed => "PROCESSED",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Error => "ERROR",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::UnknownType => "UNKNOWN_TYPE",
            OrderStatus::DbError => "DB_ERROR",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Processing priority, recomputed on every pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single source of truth for an order moving through processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub kind: OrderKind,
    pub amount: i64,
    pub expedite: bool,
    pub status: OrderStatus,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(kind: OrderKind, amount: i64, expedite: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            expedite,
            status: OrderStatus::New,
            priority: Priority::Low,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update order status
    pub fn update_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }

    /// Update order priority
    pub fn update_priority(&mut self, new_priority: Priority) {
        self.priority = new_priority;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new(OrderKind::Export, 120, false);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.priority, Priority::Low);
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn test_status_tokens_match_wire_format() {
        assert_eq!(OrderStatus::ExportFailed.as_str(), "EXPORT_FAILED");
        assert_eq!(OrderStatus::UnknownType.as_str(), "UNKNOWN_TYPE");
        assert_eq!(OrderStatus::DbError.as_str(), "DB_ERROR");
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }

    #[test]
    fn test_unrecognized_kind_token_falls_back_to_unknown() {
        let kind: OrderKind = serde_json::from_str("\"TYPE_D\"").unwrap();
        assert_eq!(kind, OrderKind::Unknown);
    }

    #[test]
    fn test_update_status_touches_updated_at() {
        let mut order = Order::new(OrderKind::Internal, 10, true);
        let before = order.updated_at;
        order.update_status(OrderStatus::Completed);
        assert_eq!(order.status, OrderStatus::Completed);
        assert!(order.updated_at >= before);
    }
}
