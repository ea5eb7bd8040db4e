#![allow(dead_code)]

//! In-memory repository fakes backing the handler integration tests.
//!
//! The fakes reproduce the document-store behavior the handlers rely on:
//! store-assigned monotonic ids, `$set` merge semantics, and zero-effect
//! acknowledgments for writes that match nothing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use mongodb::bson::{self, Document, oid::ObjectId};

use rentwheels_api::api::routes::api_routes;
use rentwheels_api::domain::repositories::{
    FEATURED_LIMIT, TOP_RATED_LIMIT, TOP_RATED_MIN_RATING,
};
use rentwheels_api::prelude::*;

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Mutex<Vec<Vehicle>>,
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(self.vehicles.lock().unwrap().clone())
    }

    async fn featured(&self) -> Result<Vec<Vehicle>, AppError> {
        let mut vehicles = self.vehicles.lock().unwrap().clone();
        // Ids are monotonic within a process, so byte order is creation order.
        vehicles.sort_by_key(|v| std::cmp::Reverse(v.id.unwrap().bytes()));
        vehicles.truncate(FEATURED_LIMIT as usize);
        Ok(vehicles)
    }

    async fn top_rated(&self) -> Result<Vec<Vehicle>, AppError> {
        let mut vehicles: Vec<Vehicle> = self
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.rating.is_some_and(|r| r >= TOP_RATED_MIN_RATING))
            .cloned()
            .collect();
        vehicles.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap());
        vehicles.truncate(TOP_RATED_LIMIT as usize);
        Ok(vehicles)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Vehicle>, AppError> {
        Ok(self
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == Some(id))
            .cloned())
    }

    async fn insert(&self, mut vehicle: Vehicle) -> Result<InsertAck, AppError> {
        let id = ObjectId::new();
        vehicle.id = Some(id);
        self.vehicles.lock().unwrap().push(vehicle);
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id.to_hex(),
        })
    }

    async fn update(&self, id: ObjectId, fields: Document) -> Result<UpdateAck, AppError> {
        let mut vehicles = self.vehicles.lock().unwrap();
        let Some(vehicle) = vehicles.iter_mut().find(|v| v.id == Some(id)) else {
            return Ok(UpdateAck {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            });
        };

        let mut document = bson::to_document(&*vehicle).unwrap();
        let mut modified = 0;
        for (key, value) in fields {
            if document.get(&key) != Some(&value) {
                modified = 1;
            }
            document.insert(key, value);
        }
        *vehicle = bson::from_document(document).unwrap();

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: 1,
            modified_count: modified,
        })
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, AppError> {
        let mut vehicles = self.vehicles.lock().unwrap();
        let before = vehicles.len();
        vehicles.retain(|v| v.id != Some(id));

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: (before - vehicles.len()) as u64,
        })
    }

    async fn list_by_provider(&self, email: &str) -> Result<Vec<Vehicle>, AppError> {
        Ok(self
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.provider_email.as_deref() == Some(email))
            .cloned()
            .collect())
    }

    async fn mark_booked(&self, id: ObjectId) -> Result<UpdateAck, AppError> {
        let mut vehicles = self.vehicles.lock().unwrap();
        match vehicles.iter_mut().find(|v| v.id == Some(id)) {
            Some(vehicle) => {
                vehicle.status = Some("booked".to_string());
                Ok(UpdateAck {
                    acknowledged: true,
                    matched_count: 1,
                    modified_count: 1,
                })
            }
            None => Ok(UpdateAck {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            }),
        }
    }
}

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn list(&self, user_email: Option<String>) -> Result<Vec<Booking>, AppError> {
        let bookings = self.bookings.lock().unwrap();
        Ok(match user_email {
            Some(email) => bookings
                .iter()
                .filter(|b| b.user_email.as_deref() == Some(email.as_str()))
                .cloned()
                .collect(),
            None => bookings.clone(),
        })
    }

    async fn insert(&self, mut booking: Booking) -> Result<InsertAck, AppError> {
        let id = ObjectId::new();
        booking.id = Some(id);
        self.bookings.lock().unwrap().push(booking);
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id.to_hex(),
        })
    }
}

/// Builds a test server over the full API route table and an in-memory store.
pub fn make_server() -> TestServer {
    let state = AppState {
        vehicles: Arc::new(InMemoryVehicleRepository::default()),
        bookings: Arc::new(InMemoryBookingRepository::default()),
    };
    let app: Router = api_routes().with_state(state);
    TestServer::new(app).unwrap()
}

/// Creates a vehicle through the API and returns its assigned id.
pub async fn seed_vehicle(server: &TestServer, body: serde_json::Value) -> String {
    let response = server.post("/cars").json(&body).await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["insertedId"]
        .as_str()
        .unwrap()
        .to_string()
}
