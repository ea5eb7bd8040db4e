//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into persistence-gateway operations and
//! serializes results and errors according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Request-side Data Transfer Objects
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and CORS middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
