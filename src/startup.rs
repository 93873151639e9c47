//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::domain::ImagePaths;
use crate::infrastructure::database;
use crate::infrastructure::storage::LocalImageStore;
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
///
/// The pool is the explicit store handle every directory operation is
/// built from.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub images: Arc<LocalImageStore>,
    pub image_paths: ImagePaths,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(db: SqlitePool, settings: Settings) -> Self {
        let images = Arc::new(LocalImageStore::new(&settings.uploads.dir));
        let image_paths = ImagePaths::new(
            settings.uploads.public_prefix.clone(),
            settings.uploads.default_image.clone(),
        );

        Self {
            db,
            images,
            image_paths,
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with all middleware applied
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors_layer)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let db = database::create_pool(&settings.database)
            .await
            .context("failed to open the database")?;
        tracing::info!(url = %settings.database.url, "Database connection pool created");

        database::run_migrations(&db)
            .await
            .context("failed to apply database migrations")?;
        tracing::info!("Database migrations applied");

        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("invalid server address {}", settings.server_addr()))?;

        let state = AppState::new(db, settings);
        state.images.ensure_dir().await?;
        tracing::info!(dir = %state.images.dir().display(), "Upload directory ready");

        let router = build_router(state);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
