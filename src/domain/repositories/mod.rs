//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence gateway: a thin contract translating each
//! router operation into document-store calls. Concrete implementations live
//! in `crate::infrastructure::persistence`; mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`VehicleRepository`] - `cars` collection operations
//! - [`BookingRepository`] - `bookings` collection operations

pub mod booking_repository;
pub mod vehicle_repository;

pub use booking_repository::BookingRepository;
pub use vehicle_repository::{
    FEATURED_LIMIT, TOP_RATED_LIMIT, TOP_RATED_MIN_RATING, VehicleRepository,
};

#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use vehicle_repository::MockVehicleRepository;
