//! Handlers for booking endpoints.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::BookingsQuery;
use crate::domain::entities::{Booking, InsertAck};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_object_id;

/// Lists bookings, optionally filtered by requester email.
///
/// # Endpoint
///
/// `GET /bookings?email=<userEmail>`
///
/// Omitting `email` returns the full set.
pub async fn list_bookings_handler(
    State(state): State<AppState>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.list(query.email).await?;
    Ok(Json(bookings))
}

/// Records a booking and marks the referenced vehicle as booked.
///
/// # Endpoint
///
/// `POST /bookings`
///
/// # Consistency
///
/// Two sequential single-document writes, not a transaction: the vehicle's
/// `status` is set to `booked`, then the booking is inserted. The status write
/// is best-effort — if it fails, the failure is logged and the booking is
/// still recorded, leaving the vehicle status stale. The caller cannot
/// distinguish the two outcomes from the response.
///
/// # Errors
///
/// Returns 400 Bad Request if `carId` is not a well-formed store identifier.
/// Returns 500 if the booking insert itself fails.
pub async fn create_booking_handler(
    State(state): State<AppState>,
    Json(booking): Json<Booking>,
) -> Result<Json<InsertAck>, AppError> {
    let car_id = parse_object_id(&booking.car_id)?;

    if let Err(e) = state.vehicles.mark_booked(car_id).await {
        tracing::warn!(
            error = %e,
            car_id = %booking.car_id,
            "Failed to mark vehicle as booked; recording booking anyway"
        );
    }

    let ack = state.bookings.insert(booking).await?;
    Ok(Json(ack))
}
