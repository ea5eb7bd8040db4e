//! Data Transfer Objects for API requests.
//!
//! Response bodies are the domain entities and acknowledgments themselves;
//! only request-side shapes live here.

pub mod bookings;

pub use bookings::BookingsQuery;
