pub mod engine;
pub mod processor;

pub use engine::{MockRemoteApi, OrderEngine};
pub use processor::OrderProcessor;
