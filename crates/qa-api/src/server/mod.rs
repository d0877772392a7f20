//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use qa_common::{AppConfig, AppError, AppResult, StorageBackend};
use qa_core::SnowflakeGenerator;
use qa_db::{create_pool, run_migrations, MemoryStore, PoolConfig};
use qa_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` if the rate limit settings are invalid.
pub fn create_app(state: AppState) -> AppResult<Router> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let builder = ServiceContextBuilder::new()
        .snowflake_generator(snowflake_generator)
        .voting(config.voting);

    let builder = match config.storage {
        StorageBackend::Postgres => {
            let db = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".into()))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(db))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if db.run_migrations {
                run_migrations(&pool, &db.migrations_dir)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }

            builder.postgres(pool)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on restart");
            builder.memory(Arc::new(MemoryStore::new()))
        }
    };

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on an already bound listener until shutdown
pub async fn serve(listener: TcpListener, app: Router) -> AppResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, app).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
