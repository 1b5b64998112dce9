//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::error;

use crate::config::Config;
use crate::error::{ProxyError, Result, UpstreamError};
use crate::models::{HealthResponse, PlantListQuery, ROOT_BANNER};
use crate::trefle::{shape_plant_details, TrefleClient};

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Upstream Trefle client
    pub trefle: TrefleClient,
}

impl AppState {
    /// Creates a new AppState with the given upstream client.
    pub fn new(trefle: TrefleClient) -> Self {
        Self { trefle }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(TrefleClient::from_config(config)?))
    }
}

/// Handler for GET /
///
/// Plain-text liveness banner.
pub async fn root_handler() -> &'static str {
    ROOT_BANNER
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /api/plants
///
/// Proxies the plant listing. `page` and `q` are forwarded untouched and the
/// upstream body is returned as-is. Repeated keys are joined with `,`.
pub async fn list_plants_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Value>> {
    let query = PlantListQuery::from_pairs(pairs);
    let data = state
        .trefle
        .list_plants(&query)
        .await
        .map_err(|err| match err {
            UpstreamError::Status { status, reason } => ProxyError::Upstream {
                status,
                message: format!("Trefle API Error: {}", reason),
            },
            other => {
                error!("Trefle API fetch error: {}", other);
                ProxyError::Internal("Internal Server Error".to_string())
            }
        })?;

    Ok(Json(data))
}

/// Handler for GET /api/plants/:id
///
/// Proxies a single plant lookup and flattens its growth conditions.
pub async fn plant_details_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let data = state.trefle.plant(&id).await.map_err(|err| match err {
        UpstreamError::Status { status, reason } => {
            error!(
                "Trefle API error (plant details): {} - {}",
                status.as_u16(),
                reason
            );
            ProxyError::Upstream {
                status,
                message: "Failed to fetch plant details from Trefle API".to_string(),
            }
        }
        other => {
            error!("Error fetching plant details from Trefle API: {}", other);
            ProxyError::Internal("Internal server error".to_string())
        }
    })?;

    Ok(Json(shape_plant_details(data)))
}
