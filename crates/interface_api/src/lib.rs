//! HTTP API Layer
//!
//! REST API for the accounts service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for account CRUD and service metadata
//! - **DTOs**: Request/response objects, shape-validated at the boundary
//! - **Error Handling**: Typed domain failures mapped to HTTP statuses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(pool, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_accounts::{ProvisioningService, RandomAccountNumberGenerator};
use infra_db::{PostgresAccountStore, PostgresCustomerStore};

use crate::config::ApiConfig;
use crate::handlers::{accounts, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProvisioningService>,
    pub pool: PgPool,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the provisioning service over the PostgreSQL adapters
    pub fn new(pool: PgPool, config: ApiConfig) -> Self {
        let customers = Arc::new(PostgresCustomerStore::new(pool.clone()));
        let accounts = Arc::new(PostgresAccountStore::new(pool.clone()));
        let service = Arc::new(ProvisioningService::new(
            customers,
            accounts,
            Arc::new(RandomAccountNumberGenerator),
            config.account_defaults(),
        ));
        Self {
            service,
            pool,
            config,
        }
    }

    /// Builds state around an already-constructed service
    ///
    /// Used by tests to substitute mock stores.
    pub fn with_service(service: Arc<ProvisioningService>, pool: PgPool, config: ApiConfig) -> Self {
        Self {
            service,
            pool,
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes (no API prefix)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Account CRUD plus service metadata
    let account_routes = Router::new()
        .route("/", post(accounts::create_account))
        .route("/", get(accounts::fetch_account))
        .route("/", put(accounts::update_account))
        .route("/", delete(accounts::delete_account))
        .route("/build-info", get(accounts::build_info))
        .route("/contact-info", get(accounts::contact_info));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1/accounts", account_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
