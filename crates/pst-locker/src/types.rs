use std::fmt;

use serde::{Deserialize, Serialize};

/// Locker size class, shared by cells and catalog items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::S => write!(f, "S"),
            Size::M => write!(f, "M"),
            Size::L => write!(f, "L"),
        }
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// Occupancy state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellStatus {
    Free,
    /// Declared for wire compatibility; no transition produces it.
    Reserved,
    Occupied,
    /// Parcel expired and awaits courier collection.
    ReturnPending,
}

/// A physical locker compartment. The set of cells is fixed at seed time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: String,
    pub size: Size,
    pub status: CellStatus,
}

impl Cell {
    pub fn new(id: impl Into<String>, size: Size) -> Self {
        Self {
            id: id.into(),
            size,
            status: CellStatus::Free,
        }
    }

    pub fn is_free(&self) -> bool {
        self.status == CellStatus::Free
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One SKU → size entry of the seeded catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub sku: String,
    pub size: Size,
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// Lifecycle state of an order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Stored,
    /// Accepted as a pickup source, never entered: a successful pickup
    /// leaves the order in `Stored`.
    Picked,
    Expired,
    Returned,
}

/// A single parcel's lifecycle record.
///
/// The order owns the cell reference; cells do not know which order they hold,
/// so `cell_id` and the cell's status can drift apart (see `return_collect`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// PIN presented by the recipient at pickup.
    pub code: String,
    pub sku: String,
    pub item_size: Size,
    pub status: OrderStatus,
    pub cell_id: Option<String>,
    pub expired_marked: bool,
    /// Successful pickup calls so far. Unbounded.
    pub client_open_count: u32,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        sku: impl Into<String>,
        item_size: Size,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            sku: sku.into(),
            item_size,
            status: OrderStatus::Created,
            cell_id: None,
            expired_marked: false,
            client_open_count: 0,
        }
    }
}
