//! Plant Proxy - A small HTTP proxy in front of the Trefle plant API
//!
//! Keeps the Trefle API token server-side and flattens plant growth data.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod trefle;

pub use api::AppState;
pub use config::Config;
pub use trefle::TrefleClient;
