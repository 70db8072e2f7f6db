use std::sync::Arc;

use anyhow::Context;

use itemservice_api::{app, config::ApiConfig};
use itemservice_items::InMemoryItemRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    itemservice_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    let repository = Arc::new(InMemoryItemRepository::new());
    if config.seed {
        let seeded = app::services::seed_items(repository.as_ref());
        tracing::info!(count = seeded.len(), "seeded demo items");
    }

    let app = app::build_app(repository);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
