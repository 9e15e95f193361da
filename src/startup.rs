//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    CustomerService, CustomerServiceImpl, ProductService, ProductServiceImpl,
};
use crate::config::{Settings, StorageBackend};
use crate::domain::{CustomerRepository, ProductRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryCustomerRepository, InMemoryProductRepository, PgCustomerRepository,
    PgProductRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerService>,
    pub products: Arc<dyn ProductService>,
    /// Present only with the postgres backend
    pub db: Option<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire services on top of the given repositories.
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        product_repo: Arc<dyn ProductRepository>,
        db: Option<PgPool>,
        settings: Settings,
    ) -> Self {
        Self {
            customers: Arc::new(CustomerServiceImpl::new(customer_repo)),
            products: Arc::new(ProductServiceImpl::new(product_repo)),
            db,
            settings: Arc::new(settings),
        }
    }

    /// State backed by empty in-memory repositories.
    pub fn in_memory(settings: Settings) -> Self {
        Self::new(
            Arc::new(InMemoryCustomerRepository::new()),
            Arc::new(InMemoryProductRepository::new()),
            None,
            settings,
        )
    }
}

/// Build the full router with middleware applied.
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

        let state = match settings.storage.backend {
            StorageBackend::Postgres => {
                let db = database::create_pool(&settings.database)
                    .await
                    .context("failed to connect to PostgreSQL")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&db)
                        .await
                        .context("failed to run database migrations")?;
                    tracing::info!("Database migrations applied");
                }

                AppState::new(
                    Arc::new(PgCustomerRepository::new(db.clone())),
                    Arc::new(PgProductRepository::new(db.clone())),
                    Some(db),
                    settings.clone(),
                )
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data is lost on shutdown");
                AppState::in_memory(settings.clone())
            }
        };

        let router = build_router(state);

        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until ctrl-c is received
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
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
        return;
    }
    tracing::info!("Shutdown signal received");
}
