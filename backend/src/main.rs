use std::sync::Arc;
use backend::{
    serve,
    config::{Config, StoreBackend},
    queries::PgStore,
    store::{ElectionStore, MemoryStore},
};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::time::Duration;
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

const MAX_DB_CONNECTIONS: u32 = 10;
const DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// The pool connects on first use, so an unreachable database is logged here
/// and then shows up as failed requests instead of stopping the process.
async fn connect_postgres(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(DB_ACQUIRE_TIMEOUT_SECS))
        .connect_lazy(&config.database_url)?;

    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(_) => info!("📋 Migrations complete"),
        Err(e) => error!("Database connection error, migrations not applied: {}", e),
    }

    Ok(pool)
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚀 Starting Pemilu tally server");

    let config = Config::from_env();

    let (store, pool): (Arc<dyn ElectionStore>, Option<PgPool>) = match config.store_backend {
        StoreBackend::Memory => {
            warn!("STORE_BACKEND=memory - records will not survive a restart");
            (Arc::new(MemoryStore::new()), None)
        }
        StoreBackend::Postgres => {
            let pool = connect_postgres(&config).await?;
            (Arc::new(PgStore::new(pool.clone())), Some(pool))
        }
    };

    let served = serve(&config, store).await;

    if let Some(pool) = pool {
        pool.close().await;
        info!("Database pool closed");
    }

    if let Err(e) = &served {
        error!("Server error: {}", e);
    }
    Ok(served?)
}
