//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pianodir_cache::{MemoryInterestRepository, ShareEventLog};
use pianodir_common::{AppConfig, AppError, StorageBackend};
use pianodir_core::InterestRepository;
use pianodir_db::{create_pool, run_migrations, PgInterestRepository};
use pianodir_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes sit outside the rate limiter so probes are never throttled.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    Router::new()
        .merge(health_routes())
        .merge(api)
        .with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let interest_repo = create_interest_repository(&config).await?;

    let service_context = ServiceContextBuilder::new()
        .interest_repo(interest_repo)
        .share_log(ShareEventLog::new())
        .share_config(config.share.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Interest store for the configured backend
async fn create_interest_repository(
    config: &AppConfig,
) -> Result<Arc<dyn InterestRepository>, AppError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory interest store");
            let repo: Arc<dyn InterestRepository> = MemoryInterestRepository::new_shared();
            Ok(repo)
        }
        StorageBackend::Postgres => {
            let database = config.storage.database.as_ref().ok_or_else(|| {
                AppError::Config("DATABASE_URL is required for the postgres backend".to_string())
            })?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&pianodir_db::DatabaseConfig::from(database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if database.run_migrations {
                run_migrations(&pool)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }

            let repo: Arc<dyn InterestRepository> = Arc::new(PgInterestRepository::new(pool));
            Ok(repo)
        }
    }
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
