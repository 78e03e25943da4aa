//! Catalog proxying and enrichment
//!
//! Fetches catalog data from the internal service and derives display-only
//! fields. Enrichment is a pure function of the input item; there are no
//! partial enrichment states and nothing is cached across requests.

use reqwest::StatusCode;

use crate::error::GatewayError;
use crate::infrastructure::http_client;
use crate::models::*;
use crate::state::GatewayState;

/// Tag stamped on every item the gateway returns
pub const PROCESSED_BY: &str = "main-backend";

/// Derive the display fields for one catalog item.
pub fn enrich(item: CatalogItem) -> EnrichedCatalogItem {
    let display_name = format!("{} - {}", item.name, item.category);
    let in_stock = item.stock > 0;
    EnrichedCatalogItem {
        id: item.id,
        name: item.name,
        category: item.category,
        price: item.price,
        stock: item.stock,
        display_name,
        in_stock,
        processed_by: PROCESSED_BY.to_string(),
    }
}

/// Fetch the full catalog from the internal service and enrich every item.
pub async fn fetch_all_items(
    state: &GatewayState,
) -> Result<Vec<EnrichedCatalogItem>, GatewayError> {
    let url = format!("{}/data", state.internal_backend_url);
    tracing::info!(%url, "fetching data from internal backend");

    let response = http_client::get(&url)
        .await
        .map_err(GatewayError::UpstreamUnreachable)?;

    if !response.status().is_success() {
        return Err(GatewayError::Internal(format!(
            "internal backend returned {}",
            response.status()
        )));
    }

    let body: CatalogListResponse = response.json().await.map_err(GatewayError::from_transport)?;

    Ok(body.data.into_iter().map(enrich).collect())
}

/// Fetch a single item by id and enrich it.
///
/// An upstream 404 maps to [`GatewayError::NotFound`] with no enrichment
/// attempted; transport failures stay distinct as `UpstreamUnreachable`.
pub async fn fetch_item(state: &GatewayState, id: u32) -> Result<EnrichedCatalogItem, GatewayError> {
    let url = format!("{}/data/{}", state.internal_backend_url, id);
    tracing::info!(id, "fetching item from internal backend");

    let response = http_client::get(&url)
        .await
        .map_err(GatewayError::UpstreamUnreachable)?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(GatewayError::NotFound);
    }

    if !response.status().is_success() {
        return Err(GatewayError::Internal(format!(
            "internal backend returned {}",
            response.status()
        )));
    }

    let body: CatalogItemResponse = response.json().await.map_err(GatewayError::from_transport)?;

    Ok(enrich(body.data))
}
