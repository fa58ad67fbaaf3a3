//! HTTP API Layer
//!
//! This crate provides the REST API for the campus fees core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for the catalog, ledgers, and dashboard
//! - **Middleware**: Actor attribution, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppServices};
//!
//! let app = create_router(services, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use domain_fees::{DashboardAggregator, FeeStructureCatalog, PaymentRecorder, ReceiptGenerator};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{dashboard, health, ledger, structures};
use crate::middleware::{actor_middleware, audit_middleware};

/// The domain services the API is built over
pub struct AppServices {
    pub catalog: FeeStructureCatalog,
    pub recorder: PaymentRecorder,
    pub receipts: ReceiptGenerator,
    pub dashboard: DashboardAggregator,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FeeStructureCatalog>,
    pub recorder: Arc<PaymentRecorder>,
    pub receipts: Arc<ReceiptGenerator>,
    pub dashboard: Arc<DashboardAggregator>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `services` - Wired domain services
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(services: AppServices, config: ApiConfig) -> Router {
    let state = AppState {
        catalog: Arc::new(services.catalog),
        recorder: Arc::new(services.recorder),
        receipts: Arc::new(services.receipts),
        dashboard: Arc::new(services.dashboard),
        config,
    };

    // Public routes
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Fee structure catalog routes
    let structure_routes = Router::new()
        .route("/", post(structures::create_structure))
        .route("/", get(structures::list_structures))
        .route("/:id", get(structures::get_structure))
        .route("/:id", put(structures::update_structure))
        .route("/:id", delete(structures::delete_structure));

    // Student ledger routes
    let student_routes = Router::new()
        .route("/:id/fee-structure", put(ledger::assign_structure))
        .route("/:id/payments", post(ledger::record_payment))
        .route("/:id/ledger", get(ledger::get_ledger))
        .route("/:id/receipt", get(ledger::get_receipt));

    // Dashboard routes
    let dashboard_routes = Router::new()
        .route("/stats", get(dashboard::get_stats))
        .route("/defaulters", get(dashboard::list_defaulters));

    let api_routes = Router::new()
        .nest("/fee-structures", structure_routes)
        .nest("/students", student_routes)
        .nest("/dashboard", dashboard_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), actor_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
