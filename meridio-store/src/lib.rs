pub mod app_config;
pub mod database;
pub mod export;
pub mod memory;
pub mod order_repo;

pub use app_config::Config;
pub use database::DbClient;
pub use export::FileExportWriter;
pub use memory::MemoryOrderStore;
pub use order_repo::PgOrderStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid artifact name: {0}")]
    InvalidName(String),
}
