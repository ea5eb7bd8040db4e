//! DTOs for booking endpoints.

use serde::Deserialize;

/// Query parameters for listing bookings.
#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    /// When present, only bookings whose `userEmail` equals this value are
    /// returned; otherwise the full set.
    pub email: Option<String>,
}
