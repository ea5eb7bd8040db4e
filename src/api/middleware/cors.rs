//! Cross-origin resource sharing policy.

use tower_http::cors::CorsLayer;

/// Permits cross-origin requests from any origin, with any method and headers.
///
/// The API is consumed directly by browser frontends on other origins and
/// carries no credentials, so no restriction is applied.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
