//! Internal data service
//!
//! The private leaf tier: owns the static catalog and exposes read-only
//! lookups plus a liveness probe. It has no dependencies of its own and no
//! write path, so the catalog needs no synchronization.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::Utc;
use rust_decimal_macros::dec;
use tower_http::trace::TraceLayer;

use crate::models::*;
use crate::state::InternalState;

pub const SERVICE_NAME: &str = "internal-backend";

/// Build the fixed catalog. In a real deployment this would come from a
/// database; here it is constructed once at startup and never mutated.
pub fn seed_catalog() -> Vec<CatalogItem> {
    let item = |id, name: &str, category: &str, price, stock| CatalogItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock,
    };

    vec![
        item(1, "Internal Item 1", "Electronics", dec!(299.99), 15),
        item(2, "Internal Item 2", "Books", dec!(19.99), 50),
        item(3, "Internal Item 3", "Clothing", dec!(49.99), 30),
        item(4, "Internal Item 4", "Electronics", dec!(599.99), 8),
        item(5, "Internal Item 5", "Home", dec!(89.99), 20),
    ]
}

pub fn create_router(state: InternalState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/data", get(list_data))
        .route("/data/:id", get(data_by_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe. A leaf service can only report itself.
async fn health(State(state): State<InternalState>) -> Json<InternalHealth> {
    Json(InternalHealth {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
        uptime: state.uptime_secs(),
    })
}

/// Full catalog, insertion order preserved
async fn list_data(State(state): State<InternalState>) -> Json<CatalogListResponse> {
    tracing::info!("internal data requested");
    Json(CatalogListResponse {
        success: true,
        data: state.catalog.as_ref().clone(),
        timestamp: Utc::now(),
    })
}

/// Single item lookup by id, linear scan
async fn data_by_id(
    State(state): State<InternalState>,
    Path(id): Path<u32>,
) -> Result<Json<CatalogItemResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.catalog.iter().find(|item| item.id == id) {
        Some(item) => Ok(Json(CatalogItemResponse {
            success: true,
            data: item.clone(),
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                success: false,
                message: "Item not found".to_string(),
                error: None,
            }),
        )),
    }
}
