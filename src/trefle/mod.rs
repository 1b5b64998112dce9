//! Trefle Module
//!
//! Upstream access to the Trefle plant API and reshaping of its payloads.

mod client;
mod details;


pub use client::TrefleClient;
pub use details::{shape_plant_details, GROWTH_FIELDS};
