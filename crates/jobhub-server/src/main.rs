use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use jobhub_client::{ProviderConfig, build_providers};
use jobhub_core::{Aggregator, SearchCache, SkillAdvisor};
use jobhub_db::{Database, DatabaseConfig};
use jobhub_server::config::ServerConfig;
use jobhub_server::routes;
use jobhub_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("jobhub=info".parse()?))
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    let provider_config = ProviderConfig::from_env()?;
    let addr = format!("0.0.0.0:{}", config.port);

    let db = match DatabaseConfig::from_env_optional()? {
        Some(db_config) => {
            let db = Database::connect(&db_config).await?;
            db.migrate().await?;
            Some(db)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; profile routes will answer 500");
            None
        }
    };

    let mut aggregator = Aggregator::new(build_providers(&provider_config)?)
        .with_timeout(provider_config.request_timeout);
    if let Some(ttl) = config.search_cache_ttl {
        tracing::info!(ttl_secs = ttl.as_secs(), "Search cache enabled");
        aggregator = aggregator.with_cache(SearchCache::new(ttl));
    }

    let advisor = db
        .as_ref()
        .map(|db| SkillAdvisor::new(Arc::new(db.posting_repo()), Arc::new(db.profile_repo())));

    let state = Arc::new(AppState {
        aggregator,
        advisor,
        db,
    });

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
