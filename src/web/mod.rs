/// HTTP rendering of application errors
pub mod error;
/// Extractors that report rejections as validation errors
pub mod extract;
/// Route handlers
pub mod handlers;
/// Askama page templates
pub mod views;

use crate::config::AppConfig;
use crate::errors::Result;
use axum::{Router, http::Method, routing::get};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

/// Shared state available to all handlers.
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Configuration the server was started with
    pub config: Arc<AppConfig>,
    /// Database connection pool
    pub database: Arc<DatabaseConnection>,
}

impl AppState {
    /// Creates a new `AppState` from the startup configuration and connection pool.
    #[must_use]
    pub fn new(config: AppConfig, database: Arc<DatabaseConnection>) -> Self {
        Self {
            config: Arc::new(config),
            database,
        }
    }
}

/// Builds the application router with every route and middleware layer.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/sensor", get(handlers::sample_reading))
        .route("/pagina", get(handlers::pagina))
        .route("/dashboard", get(handlers::dashboard))
        .route(
            "/sensor/:sensor_id",
            get(handlers::read_sensor).post(handlers::insert_reading),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C or SIGTERM is received.
pub async fn serve(config: AppConfig, database: Arc<DatabaseConnection>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Listening on {}", listener.local_addr()?);

    let app = build_router(AppState::new(config, database));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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
    info!("Shutdown signal received, finishing in-flight requests");
}
