//! API Routes
//!
//! HTTP endpoints exposed by the service:
//! - `/analyze-single` - Document upload + analysis
//! - `/api/health` - Health checks

pub mod analyze;
pub mod health;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors::apply_cors;
use crate::models::AppState;

/// Create the main application router.
///
/// CORS is fully permissive: the endpoint is called directly from the
/// browser frontend, which may be served from anywhere.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(analyze::router(state))
        .merge(health::router())
        .layer(TraceLayer::new_for_http());

    apply_cors(router)
}
