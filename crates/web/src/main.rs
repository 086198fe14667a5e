use std::time::Duration;

use anyhow::Context;
use contest_storage::{ContestStore, repository::Catalog};

mod config;
mod error;
mod features;
mod openapi;
mod routes;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Burger Week API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!("Loading participant catalog from {}", path.display());
            Catalog::from_path(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?
        }
        None => {
            tracing::info!("No CATALOG_PATH set, using the bundled catalog");
            Catalog::bundled().context("Failed to load bundled catalog")?
        }
    };

    let store = ContestStore::new(catalog);
    let app = routes::router(store, Duration::from_secs(config.cors_max_age_secs));

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
