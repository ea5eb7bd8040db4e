//! MongoDB implementation of the booking repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::domain::entities::{Booking, InsertAck};
use crate::domain::repositories::BookingRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::insert_ack;

/// MongoDB repository over the `bookings` collection.
pub struct MongoBookingRepository {
    collection: Collection<Booking>,
}

impl MongoBookingRepository {
    /// Creates a repository bound to the `bookings` collection of the given database.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("bookings"),
        }
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    async fn list(&self, user_email: Option<String>) -> Result<Vec<Booking>, AppError> {
        let filter = match user_email {
            Some(email) => doc! { "userEmail": email },
            None => doc! {},
        };

        self.collection
            .find(filter)
            .await
            .map_err(|e| AppError::store("Failed to fetch bookings", e))?
            .try_collect()
            .await
            .map_err(|e| AppError::store("Failed to fetch bookings", e))
    }

    async fn insert(&self, booking: Booking) -> Result<InsertAck, AppError> {
        let result = self
            .collection
            .insert_one(&booking)
            .await
            .map_err(|e| AppError::store("Failed to create booking", e))?;

        Ok(insert_ack(result))
    }
}
