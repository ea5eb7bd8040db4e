//! API route configuration.

use crate::api::handlers::{
    create_booking_handler, create_car_handler, delete_car_handler, featured_cars_handler,
    get_car_handler, list_bookings_handler, list_cars_handler, my_cars_handler, root_handler,
    top_rated_cars_handler, update_car_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /`                  - Liveness message
/// - `GET    /cars`              - List all vehicles
/// - `POST   /cars`              - Insert a vehicle
/// - `GET    /cars/featured`     - Newest vehicles, capped at 30
/// - `GET    /cars/top-rated`    - Vehicles rated >= 4.5, capped at 6
/// - `GET    /cars/{id}`         - Fetch one vehicle
/// - `PUT    /cars/{id}`         - Overwrite vehicle fields
/// - `DELETE /cars/{id}`         - Remove a vehicle
/// - `GET    /my-cars/{email}`   - Vehicles owned by a provider
/// - `GET    /bookings`          - List bookings (optional `?email=` filter)
/// - `POST   /bookings`          - Record a booking
///
/// # Route Specificity
///
/// `/cars/featured` and `/cars/top-rated` must win over `/cars/{id}`. Axum
/// matches literal segments before parameter captures regardless of
/// registration order, so the literal routes take priority by specificity,
/// not by the order they are listed here.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/cars", get(list_cars_handler).post(create_car_handler))
        .route("/cars/featured", get(featured_cars_handler))
        .route("/cars/top-rated", get(top_rated_cars_handler))
        .route(
            "/cars/{id}",
            get(get_car_handler)
                .put(update_car_handler)
                .delete(delete_car_handler),
        )
        .route("/my-cars/{email}", get(my_cars_handler))
        .route(
            "/bookings",
            get(list_bookings_handler).post(create_booking_handler),
        )
}
