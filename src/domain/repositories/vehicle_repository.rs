//! Repository trait for vehicle data access.

use crate::domain::entities::{DeleteAck, InsertAck, UpdateAck, Vehicle};
use crate::error::AppError;
use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

/// Maximum number of vehicles returned by the featured listing.
pub const FEATURED_LIMIT: i64 = 30;

/// Maximum number of vehicles returned by the top-rated listing.
pub const TOP_RATED_LIMIT: i64 = 6;

/// Minimum rating for a vehicle to qualify as top-rated.
pub const TOP_RATED_MIN_RATING: f64 = 4.5;

/// Repository interface for the `cars` collection.
///
/// Each method maps to a single document-store call; no retries, transactions,
/// or batching. Store failures surface as [`AppError::Internal`] with a
/// message naming the failed operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoVehicleRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Lists every vehicle, unfiltered.
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError>;

    /// Lists the most recently created vehicles, newest first, capped at
    /// [`FEATURED_LIMIT`]. Creation order is the insertion order encoded in
    /// the store-assigned id.
    async fn featured(&self) -> Result<Vec<Vehicle>, AppError>;

    /// Lists vehicles with `rating >=` [`TOP_RATED_MIN_RATING`], sorted by
    /// rating descending, capped at [`TOP_RATED_LIMIT`].
    async fn top_rated(&self) -> Result<Vec<Vehicle>, AppError>;

    /// Fetches one vehicle by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Vehicle))` if found
    /// - `Ok(None)` if no vehicle has this id
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Vehicle>, AppError>;

    /// Inserts a vehicle; the store assigns the id.
    async fn insert(&self, vehicle: Vehicle) -> Result<InsertAck, AppError>;

    /// Overwrites the given fields on an existing vehicle (`$set` semantics;
    /// fields absent from `fields` are unchanged). A non-existent id yields a
    /// zero-match acknowledgment, not an error.
    async fn update(&self, id: ObjectId, fields: Document) -> Result<UpdateAck, AppError>;

    /// Removes a vehicle. Deleting an absent id yields a zero-count
    /// acknowledgment, not an error.
    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, AppError>;

    /// Lists vehicles owned by the given provider (`providerEmail` equality).
    async fn list_by_provider(&self, email: &str) -> Result<Vec<Vehicle>, AppError>;

    /// Sets a vehicle's status to `booked`. Part of the best-effort two-step
    /// booking write; see [`crate::domain::repositories::BookingRepository`].
    async fn mark_booked(&self, id: ObjectId) -> Result<UpdateAck, AppError>;
}
