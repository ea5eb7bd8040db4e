//! Handlers for vehicle endpoints (listings, CRUD, ownership queries).

use axum::{
    Json,
    extract::{Path, State},
};
use mongodb::bson::Document;

use crate::domain::entities::{DeleteAck, InsertAck, UpdateAck, Vehicle};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_object_id;

/// Lists all vehicles.
///
/// # Endpoint
///
/// `GET /cars`
pub async fn list_cars_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    Ok(Json(state.vehicles.list_all().await?))
}

/// Lists the most recently created vehicles, newest first, capped at 30.
///
/// # Endpoint
///
/// `GET /cars/featured`
pub async fn featured_cars_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    Ok(Json(state.vehicles.featured().await?))
}

/// Lists vehicles rated 4.5 or higher, best first, capped at 6.
///
/// # Endpoint
///
/// `GET /cars/top-rated`
pub async fn top_rated_cars_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    Ok(Json(state.vehicles.top_rated().await?))
}

/// Fetches a single vehicle by id.
///
/// # Endpoint
///
/// `GET /cars/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no vehicle has this id.
/// Returns 400 Bad Request if the id is not a well-formed store identifier.
pub async fn get_car_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vehicle>, AppError> {
    let id = parse_object_id(&id)?;

    match state.vehicles.find_by_id(id).await? {
        Some(vehicle) => Ok(Json(vehicle)),
        None => Err(AppError::not_found("Car not found")),
    }
}

/// Inserts a new vehicle; the store assigns the id.
///
/// # Endpoint
///
/// `POST /cars`
///
/// # Request Body
///
/// Arbitrary vehicle fields. The service only interprets `providerEmail`,
/// `rating`, and `status`; everything else is stored as-is.
pub async fn create_car_handler(
    State(state): State<AppState>,
    Json(vehicle): Json<Vehicle>,
) -> Result<Json<InsertAck>, AppError> {
    Ok(Json(state.vehicles.insert(vehicle).await?))
}

/// Overwrites the given fields on an existing vehicle.
///
/// # Endpoint
///
/// `PUT /cars/{id}`
///
/// # Behavior
///
/// Merge-set semantics: fields present in the body replace the stored values,
/// absent fields are unchanged. Updating a non-existent id is not an error;
/// the acknowledgment simply reports zero matches.
pub async fn update_car_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(fields): Json<Document>,
) -> Result<Json<UpdateAck>, AppError> {
    let id = parse_object_id(&id)?;
    Ok(Json(state.vehicles.update(id, fields).await?))
}

/// Removes a vehicle.
///
/// # Endpoint
///
/// `DELETE /cars/{id}`
///
/// # Behavior
///
/// Deleting an absent id returns success with `deletedCount: 0`. Bookings
/// referencing the vehicle are left untouched (weak reference).
pub async fn delete_car_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteAck>, AppError> {
    let id = parse_object_id(&id)?;
    Ok(Json(state.vehicles.delete(id).await?))
}

/// Lists vehicles owned by the given provider.
///
/// # Endpoint
///
/// `GET /my-cars/{email}`
pub async fn my_cars_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    Ok(Json(state.vehicles.list_by_provider(&email).await?))
}
