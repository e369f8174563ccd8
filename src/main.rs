use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use enrollment::config::AppConfig;
use enrollment::database::{seed_catalog, ActivityRegistry};
use enrollment::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 2. Registry
    let config = AppConfig::from_env();
    let registry = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading activity catalog");
            ActivityRegistry::new(seed_catalog::load_catalog(path)?)?
        }
        None => ActivityRegistry::seeded(),
    };
    info!(activities = registry.len(), "activity registry ready");

    // 3. Routes
    let app = web::router(Arc::new(registry), &config.static_dir);

    // 4. Serve (with fallback port)
    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr();
            warn!(addr = %config.bind_addr(), error = %e, "bind failed, trying {}", fallback);
            tokio::net::TcpListener::bind(fallback.as_str())
                .await
                .with_context(|| format!("cannot bind {} or {}", config.bind_addr(), fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);
    info!("open http://{}{} to sign up", bound_addr, web::INDEX_PATH);

    axum::serve(listener, app).await?;
    Ok(())
}
