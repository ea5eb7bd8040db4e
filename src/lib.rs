//! # RentWheels API
//!
//! A REST backend for a vehicle-rental application, built with Axum and MongoDB.
//!
//! ## Architecture
//!
//! The crate is split into layers following the repository pattern:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB repository implementations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! Handlers talk to the store only through [`domain::repositories`] trait
//! objects carried in [`AppState`], so tests can substitute an in-memory store.
//!
//! ## Features
//!
//! - Vehicle CRUD over the `cars` collection
//! - Featured and top-rated vehicle listings with fixed caps
//! - Booking recording and per-user booking queries
//! - Best-effort vehicle status update when a booking is created
//! - Static vehicle images served under `/images`
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DB_NAME="rentwheels-db"   # Optional
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{Booking, DeleteAck, InsertAck, UpdateAck, Vehicle};
    pub use crate::domain::repositories::{BookingRepository, VehicleRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
