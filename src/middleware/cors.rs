// CORS configuration
// The browser client may be served from any origin (local file, static host),
// so the policy is fully permissive.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn apply_cors(router: Router) -> Router {
    router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
