//! NaijaGuide
//!
//! A travel guide to Nigeria's states, destinations, attractions and reviews, rendered from a
//! hosted relational backend (or a local SQLite copy of it).

mod api;
mod config;
mod db;
mod errors;
mod models;
mod pages;
mod render;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, DataSourceConfig};
use db::{Backend, Catalog, DataSource, RestSource, SqliteSource};
use errors::AppError;

/// Application state shared across all handlers.
pub struct AppState<D> {
    pub catalog: Catalog<D>,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting NaijaGuide");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Connect the data source
    let backend = match &config.data_source {
        DataSourceConfig::Rest { url, api_key } => {
            tracing::info!("Data source: hosted backend at {}", url);
            if api_key.is_none() {
                tracing::warn!("No API key configured (NAIJA_DATA_KEY). Requests are anonymous");
            }
            Backend::Rest(RestSource::new(url.clone(), api_key.clone()))
        }
        DataSourceConfig::Sqlite { path } => {
            tracing::info!("Data source: SQLite database at {:?}", path);
            Backend::Sqlite(SqliteSource::open(path).await?)
        }
    };

    let state = AppState {
        catalog: Catalog::new(Arc::new(backend)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router<D: DataSource>(state: AppState<D>) -> Router {
    Router::new()
        .route("/", get(api::home::<D>))
        .route("/destinations", get(api::list_destinations::<D>))
        .route("/destinations/{slug}", get(api::get_destination::<D>))
        .route("/states", get(api::list_states::<D>))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
