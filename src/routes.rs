//! Top-level router combining the API with static assets and middleware.
//!
//! # Route Structure
//!
//! - API endpoints at the root (see [`crate::api::routes`])
//! - `/images/*` - Static vehicle images served from `public/images`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, any origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// `state` carries the repository trait objects injected into every handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::api_routes())
        .nest_service("/images", ServeDir::new("public/images"))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
