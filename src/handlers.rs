//! Gateway HTTP handlers
//!
//! Each handler extracts request data, calls the matching service, and maps
//! the result to an HTTP response. Every downstream failure is caught here
//! and converted to a structured JSON body; nothing propagates past the
//! framework boundary.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::Utc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::GatewayError;
use crate::models::*;
use crate::services::{catalog_service, health_service};
use crate::state::GatewayState;

pub fn create_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/items", get(items))
        .route("/api/items/:id", get(item_by_id))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Service banner with the endpoint map
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Main Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "items": "/api/items",
            "itemById": "/api/items/:id",
        },
    }))
}

/// Composite health report: 200 when the internal service is reachable,
/// 503 otherwise.
pub async fn health(State(state): State<GatewayState>) -> (StatusCode, Json<HealthReport>) {
    let (healthy, report) = health_service::composite_report(&state).await;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}

/// Full enriched catalog
pub async fn items(
    State(state): State<GatewayState>,
) -> Result<Json<EnrichedListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let items = catalog_service::fetch_all_items(&state)
        .await
        .map_err(|err| {
            tracing::error!(error = ?err, "failed to fetch items from internal backend");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    message: "Failed to fetch items from internal service".to_string(),
                    error: Some(err.to_string()),
                }),
            )
        })?;

    Ok(Json(EnrichedListResponse {
        success: true,
        count: items.len(),
        data: items,
        timestamp: Utc::now(),
    }))
}

/// Single enriched item; upstream not-found and upstream unreachable map to
/// different status codes.
pub async fn item_by_id(
    State(state): State<GatewayState>,
    Path(id): Path<u32>,
) -> Result<Json<EnrichedItemResponse>, (StatusCode, Json<ErrorResponse>)> {
    match catalog_service::fetch_item(&state, id).await {
        Ok(item) => Ok(Json(EnrichedItemResponse {
            success: true,
            data: item,
        })),
        Err(GatewayError::NotFound) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                success: false,
                message: "Item not found".to_string(),
                error: None,
            }),
        )),
        Err(err) => {
            tracing::error!(error = ?err, id, "failed to fetch item from internal backend");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    message: "Failed to fetch item".to_string(),
                    error: Some(err.to_string()),
                }),
            ))
        }
    }
}
