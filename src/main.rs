//! BizTime server binary

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use biztime::config::AppConfig;
use biztime::server::{self, AppState};
use biztime::storage;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    let pool = storage::connect(&config.database_url).await?;
    storage::ensure_schema(&pool).await?;
    tracing::info!("Connected to database");

    let app = server::build_router(AppState { pool });
    server::serve(app, &config.bind_addr).await
}
