//! Request and Response models for the plant proxy API
//!
//! This module defines the DTOs (Data Transfer Objects) the proxy owns.
//! Trefle payloads themselves stay untyped.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::PlantListQuery;
pub use responses::{ErrorResponse, HealthResponse, ROOT_BANNER};
