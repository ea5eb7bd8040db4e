use std::sync::Arc;

use crate::domain::repositories::{BookingRepository, VehicleRepository};

/// Shared application state injected into every handler.
///
/// Holds the process-wide persistence gateway: repository trait objects over a
/// single long-lived store connection, initialized once at startup and left
/// open for the service's lifetime. Handlers receive it via axum's `State`
/// extractor, so tests can substitute any store implementation.
#[derive(Clone)]
pub struct AppState {
    pub vehicles: Arc<dyn VehicleRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}
