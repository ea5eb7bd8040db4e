//! MongoDB implementations of the domain repository traits.

use mongodb::results::InsertOneResult;

use crate::domain::entities::InsertAck;

pub mod mongo_booking_repository;
pub mod mongo_vehicle_repository;

pub use mongo_booking_repository::MongoBookingRepository;
pub use mongo_vehicle_repository::MongoVehicleRepository;

/// Converts a driver insert result into an acknowledgment with the new id
/// rendered as a hex string.
pub(crate) fn insert_ack(result: InsertOneResult) -> InsertAck {
    let inserted_id = result
        .inserted_id
        .as_object_id()
        .map(|id| id.to_hex())
        .unwrap_or_else(|| result.inserted_id.to_string());

    InsertAck {
        acknowledged: true,
        inserted_id,
    }
}
