use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activity_signups::modules::activities::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use activity_signups::shell::config::AppConfig;
use activity_signups::shell::graphql::ENDPOINT;
use activity_signups::shell::http::router;
use activity_signups::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "loaded config");

    // Rosters live in memory and are lost on restart.
    let store = Arc::new(InMemoryRosterStore::seeded()?);
    let state = AppState::new(store);
    let app = router(state, &config.static_dir);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, ENDPOINT);
    axum::serve(listener, app).await?;
    Ok(())
}
