pub mod export;
pub mod remote;
pub mod repository;

pub use export::{ExportHandle, ExportWriter};
pub use remote::{RemoteOrderApi, RemoteOrderReport, RemoteStatus};
pub use repository::OrderStore;
