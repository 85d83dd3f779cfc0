use std::net::SocketAddr;
use std::sync::Arc;

use meridio_api::{app, state::AppState};
use meridio_core::repository::OrderStore;
use meridio_order::{MockRemoteApi, OrderEngine, OrderProcessor};
use meridio_store::{Config, DbClient, FileExportWriter, MemoryOrderStore, PgOrderStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "meridio_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Meridio API on port {}", config.server.port);

    tokio::fs::create_dir_all(&config.export.dir)
        .await
        .expect("Failed to create export directory");
    let writer = Arc::new(FileExportWriter::new(config.export.dir.clone()));
    let remote = Arc::new(MockRemoteApi::new(
        config.remote.status.clone(),
        config.remote.amount,
    ));

    let store: Arc<dyn OrderStore> = match &config.database {
        Some(database) => {
            let db = DbClient::new(&database.url)
                .await
                .expect("Failed to connect to database");
            db.migrate().await.expect("Failed to run migrations");
            Arc::new(PgOrderStore::new(&db))
        }
        None => {
            tracing::info!("no database configured, recording outcomes in memory");
            Arc::new(MemoryOrderStore::new())
        }
    };

    let engine = OrderEngine::new(writer, remote);
    let processor = Arc::new(OrderProcessor::new(engine, store));

    let app = app(AppState { processor });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
