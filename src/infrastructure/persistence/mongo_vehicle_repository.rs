//! MongoDB implementation of the vehicle repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::domain::entities::{DeleteAck, InsertAck, STATUS_BOOKED, UpdateAck, Vehicle};
use crate::domain::repositories::{
    FEATURED_LIMIT, TOP_RATED_LIMIT, TOP_RATED_MIN_RATING, VehicleRepository,
};
use crate::error::AppError;
use crate::infrastructure::persistence::insert_ack;

/// MongoDB repository over the `cars` collection.
pub struct MongoVehicleRepository {
    collection: Collection<Vehicle>,
}

impl MongoVehicleRepository {
    /// Creates a repository bound to the `cars` collection of the given database.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("cars"),
        }
    }
}

#[async_trait]
impl VehicleRepository for MongoVehicleRepository {
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        self.collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::store("Failed to fetch cars", e))?
            .try_collect()
            .await
            .map_err(|e| AppError::store("Failed to fetch cars", e))
    }

    async fn featured(&self) -> Result<Vec<Vehicle>, AppError> {
        // _id encodes insertion time, so sorting on it gives newest-first.
        self.collection
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .limit(FEATURED_LIMIT)
            .await
            .map_err(|e| AppError::store("Failed to fetch featured cars", e))?
            .try_collect()
            .await
            .map_err(|e| AppError::store("Failed to fetch featured cars", e))
    }

    async fn top_rated(&self) -> Result<Vec<Vehicle>, AppError> {
        self.collection
            .find(doc! { "rating": { "$gte": TOP_RATED_MIN_RATING } })
            .sort(doc! { "rating": -1 })
            .limit(TOP_RATED_LIMIT)
            .await
            .map_err(|e| AppError::store("Failed to fetch top rated cars", e))?
            .try_collect()
            .await
            .map_err(|e| AppError::store("Failed to fetch top rated cars", e))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Vehicle>, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::store("Failed to fetch car", e))
    }

    async fn insert(&self, vehicle: Vehicle) -> Result<InsertAck, AppError> {
        let result = self
            .collection
            .insert_one(&vehicle)
            .await
            .map_err(|e| AppError::store("Failed to add car", e))?;

        Ok(insert_ack(result))
    }

    async fn update(&self, id: ObjectId, fields: Document) -> Result<UpdateAck, AppError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await
            .map_err(|e| AppError::store("Failed to update car", e))?;

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::store("Failed to delete car", e))?;

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn list_by_provider(&self, email: &str) -> Result<Vec<Vehicle>, AppError> {
        self.collection
            .find(doc! { "providerEmail": email })
            .await
            .map_err(|e| AppError::store("Failed to fetch cars", e))?
            .try_collect()
            .await
            .map_err(|e| AppError::store("Failed to fetch cars", e))
    }

    async fn mark_booked(&self, id: ObjectId) -> Result<UpdateAck, AppError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": STATUS_BOOKED } })
            .await
            .map_err(|e| AppError::store("Failed to update car status", e))?;

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }
}
