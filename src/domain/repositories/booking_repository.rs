//! Repository trait for booking data access.

use crate::domain::entities::{Booking, InsertAck};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `bookings` collection.
///
/// Bookings are created and listed but never deleted in this design.
///
/// Booking creation is a two-step, non-atomic write: the caller first marks
/// the referenced vehicle as booked via
/// [`VehicleRepository::mark_booked`](crate::domain::repositories::VehicleRepository::mark_booked),
/// then inserts the booking here. Consistency is best-effort: a failure of the
/// first step is logged and does not block the insert, so a booking can exist
/// while the vehicle's status is stale.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoBookingRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Lists bookings, optionally filtered by `userEmail` equality.
    /// `None` means "match all".
    async fn list(&self, user_email: Option<String>) -> Result<Vec<Booking>, AppError>;

    /// Inserts a booking; the store assigns the id.
    async fn insert(&self, booking: Booking) -> Result<InsertAck, AppError>;
}
