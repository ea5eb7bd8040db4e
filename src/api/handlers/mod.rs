//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod bookings;
pub mod root;
pub mod vehicles;

pub use bookings::{create_booking_handler, list_bookings_handler};
pub use root::root_handler;
pub use vehicles::{
    create_car_handler, delete_car_handler, featured_cars_handler, get_car_handler,
    list_cars_handler, my_cars_handler, top_rated_cars_handler, update_car_handler,
};
