//! Request and response types for all pst-daemon HTTP endpoints.
//!
//! Field names follow the public wire contract (camelCase bodies, snake_case
//! order records). No business logic lives here.

use pst_locker::{CatalogItem, Cell, Size};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// /  and  /v1/health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub service: String,
    pub version: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub version: String,
    pub uptime_secs: u64,
    /// Number of sessions seeded since boot.
    pub sessions: usize,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Body of every refused locker request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

// ---------------------------------------------------------------------------
// /seed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCell {
    pub id: String,
    pub size: Size,
}

impl From<&Cell> for SeedCell {
    fn from(c: &Cell) -> Self {
        Self {
            id: c.id.clone(),
            size: c.size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem {
    pub sku: String,
    pub size: Size,
}

impl From<&CatalogItem> for SeedItem {
    fn from(i: &CatalogItem) -> Self {
        Self {
            sku: i.sku.clone(),
            size: i.size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub seed_key: String,
    pub cells: Vec<SeedCell>,
    pub items: Vec<SeedItem>,
}

// ---------------------------------------------------------------------------
// /orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub sku: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub code: String,
}

// ---------------------------------------------------------------------------
// /deposit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub order_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositResponse {
    pub cell_id: String,
    pub accepted: bool,
}

// ---------------------------------------------------------------------------
// /pickup  /return/collect
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequest {
    pub order_id: String,
    pub code: String,
}

/// Shared by client pickup and courier collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenedResponse {
    pub opened: bool,
}

// ---------------------------------------------------------------------------
// /return/expire  /return/collect
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub order_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpireResponse {
    pub expired_order: String,
}

// ---------------------------------------------------------------------------
// /cells
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellsResponse {
    pub cells: Vec<Cell>,
}
