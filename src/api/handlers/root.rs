//! Liveness endpoint.

/// Returns a plain-text liveness message.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> &'static str {
    "RentWheels API server is running"
}
