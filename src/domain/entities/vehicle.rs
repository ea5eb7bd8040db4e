//! Vehicle entity representing a rentable car record.

use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Status value written to a vehicle when a booking is created for it.
pub const STATUS_BOOKED: &str = "booked";

/// A rentable car stored in the `cars` collection.
///
/// Only the fields the service reasons about are typed; everything else the
/// client sends (make, model, price, ...) passes through untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Store-assigned identifier. `None` before insertion; the field is
    /// omitted from the insert document so the store generates it.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Email of the listing owner, used for ownership-scoped queries.
    #[serde(rename = "providerEmail", skip_serializing_if = "Option::is_none")]
    pub provider_email: Option<String>,

    /// Rating on a 0-5 scale, used for top-rated filtering and sorting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Availability status, at minimum `available` or `booked`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Opaque pass-through payload; not validated by the service.
    #[serde(flatten)]
    pub extra: Document,
}

impl Vehicle {
    /// Returns true if the booking flow has marked this vehicle as booked.
    pub fn is_booked(&self) -> bool {
        self.status.as_deref() == Some(STATUS_BOOKED)
    }
}
