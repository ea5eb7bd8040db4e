//! Core domain entities representing the rental data model.
//!
//! Entities are plain serde data structures without business logic. Vehicles
//! and bookings are open records: a typed core of the fields the service
//! reasons about (`providerEmail`, `rating`, `status`, `carId`, `userEmail`)
//! plus a flattened bag of arbitrary client-supplied fields.
//!
//! # Entity Types
//!
//! - [`Vehicle`] - A rentable car record (`cars` collection)
//! - [`Booking`] - A reservation linking a renter to a vehicle (`bookings` collection)
//! - [`InsertAck`], [`UpdateAck`], [`DeleteAck`] - Write acknowledgments

pub mod ack;
pub mod booking;
pub mod vehicle;

pub use ack::{DeleteAck, InsertAck, UpdateAck};
pub use booking::Booking;
pub use vehicle::{STATUS_BOOKED, Vehicle};
