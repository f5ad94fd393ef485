//! Server binary: reads config, builds the configured store, serves the API.

use std::sync::Arc;
use students_api::{
    build_router, ensure_database_exists, AppConfig, AppState, MemoryStudentStore, PgStudentStore, StoreBackend,
    StudentService, StudentStore,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("students_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn StudentStore> = match config.store_backend {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            let store = PgStudentStore::new(pool);
            store.ensure_table().await?;
            Arc::new(store)
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemoryStudentStore::new())
        }
    };

    let state = AppState::new(StudentService::new(store));
    let app = build_router(state, config.body_limit);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
