use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use maintenance_log::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use maintenance_log::shell::config::Config;
use maintenance_log::shell::graphql::GRAPHQL_PATH;
use maintenance_log::shell::http::router;
use maintenance_log::shell::state::AppState;

const DEFAULT_LOG_FILTER: &str = "maintenance_log=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt().with_env_filter(filter).init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let config = Config::from_env()?;

    let store = Arc::new(InMemoryRecordStore::new());
    let state = AppState::new(
        store,
        Arc::new(config.clock()),
        config.recent_completed_limit,
    );
    let app = router(state);

    tracing::info!("HTTP endpoint: http://{}", config.addr);
    tracing::info!("GraphQL endpoint: http://{}{}", config.addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
