//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, repository wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{MongoBookingRepository, MongoVehicleRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use mongodb::Client;
use mongodb::bson::doc;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client (one per process, internally pooled, kept open for the
///   service's lifetime — there is no teardown procedure)
/// - Vehicle and booking repositories over the `cars` and `bookings` collections
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The store is unreachable at startup
/// - The server bind fails
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    let db = client.database(&config.db_name);

    // The driver connects lazily; ping so a bad URI fails at startup.
    db.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("Connected to MongoDB");

    let state = AppState {
        vehicles: Arc::new(MongoVehicleRepository::new(&db)),
        bookings: Arc::new(MongoBookingRepository::new(&db)),
    };

    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
