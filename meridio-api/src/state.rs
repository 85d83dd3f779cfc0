use meridio_order::OrderProcessor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<OrderProcessor>,
}
