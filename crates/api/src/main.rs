use anyhow::Context;
use chrono::Utc;

use stockmgr_api::config::ApiConfig;
use stockmgr_store::InventoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockmgr_observability::init();

    let config = ApiConfig::from_env();

    let store = if config.seed_demo_data {
        InventoryStore::seeded(Utc::now()).context("failed to seed demo inventory")?
    } else {
        InventoryStore::new()
    };

    let app = stockmgr_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(seeded = config.seed_demo_data, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
