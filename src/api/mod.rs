//! API Module
//!
//! HTTP handlers and routing for the plant proxy.
//!
//! # Endpoints
//! - `GET /` - Plain-text banner
//! - `GET /health` - Health check endpoint
//! - `GET /api/plants` - Plant listing
//! - `GET /api/plants/:id` - Plant details

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
