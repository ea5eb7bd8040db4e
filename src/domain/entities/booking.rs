//! Booking entity linking a renter to a vehicle.

use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// A reservation record stored in the `bookings` collection.
///
/// `car_id` is a weak reference to a vehicle id: no referential integrity is
/// enforced, and a booking may outlive or reference a deleted vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Store-assigned identifier. `None` before insertion.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Hex id of the booked vehicle, as supplied by the client.
    #[serde(rename = "carId")]
    pub car_id: String,

    /// Email of the requester, used for query filtering.
    #[serde(rename = "userEmail", skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,

    /// Opaque pass-through payload (dates, price, status, ...).
    #[serde(flatten)]
    pub extra: Document,
}
