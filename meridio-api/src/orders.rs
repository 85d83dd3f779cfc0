use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;
use meridio_shared::{Order, OrderKind};

pub fn routes() -> Router<AppState> {
    Router::new().route("/orders/process", post(process_order))
}

#[derive(Debug, Deserialize)]
pub struct ProcessOrderRequest {
    pub kind: OrderKind,
    pub amount: i64,
    #[serde(default)]
    pub expedite: bool,
    pub user_id: String,
}

/// Run one processing pass over a freshly intaken order and return it
/// with its final status and priority
async fn process_order(
    State(state): State<AppState>,
    Json(req): Json<ProcessOrderRequest>,
) -> Result<Json<Order>, AppError> {
    if req.amount < 0 {
        return Err(AppError::Validation(
            "amount must not be negative".to_string(),
        ));
    }

    let mut order = Order::new(req.kind, req.amount, req.expedite);
    info!("processing order {} for user {}", order.id, req.user_id);
    state.processor.process(&mut order, &req.user_id).await;

    Ok(Json(order))
}
