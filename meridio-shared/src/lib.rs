pub mod models;

pub use models::{Order, OrderKind, OrderStatus, Priority};
