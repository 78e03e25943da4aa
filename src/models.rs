//! Domain models and wire shapes
//!
//! This module contains all the core data types used throughout the application.
//! These are "pure" data structures without business logic; the JSON field
//! names here are the contract the presentation client depends on.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry as owned by the internal data service
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
}

/// A catalog entry after gateway enrichment
///
/// Built fresh per request from a fetched [`CatalogItem`] and discarded once
/// the response is sent; never cached.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EnrichedCatalogItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    #[serde(rename = "processedBy")]
    pub processed_by: String,
}

/// Full-catalog envelope returned by the internal service
#[derive(Serialize, Deserialize)]
pub struct CatalogListResponse {
    pub success: bool,
    pub data: Vec<CatalogItem>,
    pub timestamp: DateTime<Utc>,
}

/// Single-item envelope returned by the internal service
#[derive(Serialize, Deserialize)]
pub struct CatalogItemResponse {
    pub success: bool,
    pub data: CatalogItem,
}

/// Enriched full-catalog envelope returned by the gateway
#[derive(Serialize, Deserialize)]
pub struct EnrichedListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<EnrichedCatalogItem>,
    pub timestamp: DateTime<Utc>,
}

/// Enriched single-item envelope returned by the gateway
#[derive(Serialize, Deserialize)]
pub struct EnrichedItemResponse {
    pub success: bool,
    pub data: EnrichedCatalogItem,
}

/// Structured error body for 404/500 responses
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health probe response from the internal service (a leaf: no dependencies)
#[derive(Serialize, Deserialize)]
pub struct InternalHealth {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub uptime: f64,
}

/// Status of one downstream dependency inside a [`HealthReport`]
#[derive(Serialize, Deserialize)]
pub struct DependencyHealth {
    pub status: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Dependency map for the gateway health report
#[derive(Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(rename = "internalBackend")]
    pub internal_backend: DependencyHealth,
}

/// Composite health report produced by the gateway per request
#[derive(Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub uptime: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub dependencies: Dependencies,
}
