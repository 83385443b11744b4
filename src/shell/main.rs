use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt};

use training_program::modules::training::adapters::outbound::in_memory_store::InMemoryTrainingStore;
use training_program::shell::config::AppConfig;
use training_program::shell::http::router;
use training_program::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    // In-memory store for now
    let store = Arc::new(InMemoryTrainingStore::new());
    let state = AppState::new(store);

    let mut app: Router = router(state).layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let addr = config.socket_addr();
    tracing::info!("REST endpoints on http://{}, GraphQL on http://{}/gql", addr, addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
