//! Inventory Store: the fixed cell list and SKU catalog of one session.

use crate::error::LockerError;
use crate::types::{CatalogItem, Cell, Size};

/// Cells every session starts with, in scan order.
pub const SEED_CELLS: &[(&str, Size)] = &[
    ("C1", Size::L),
    ("C2", Size::M),
    ("C3", Size::S),
    ("C4", Size::L),
    ("C5", Size::M),
    ("C6", Size::S),
];

/// Catalog every session starts with. Order is preserved in the seed response.
pub const SEED_CATALOG: &[(&str, Size)] = &[
    ("Samsung TV", Size::L),
    ("Sony Playstation", Size::M),
    ("iPhone 17 Pro", Size::S),
    ("LEGO Star Wars", Size::L),
    ("Apple AirPods Pro 2", Size::M),
    ("QA Job Offer", Size::S),
];

#[derive(Clone, Debug)]
pub struct Inventory {
    cells: Vec<Cell>,
    catalog: Vec<CatalogItem>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Inventory {
    /// Build an inventory from explicit cells and catalog entries.
    pub fn new(cells: Vec<Cell>, catalog: Vec<CatalogItem>) -> Self {
        Self { cells, catalog }
    }

    /// The hardcoded layout used by `/seed`: six free cells and six SKUs.
    pub fn seeded() -> Self {
        let cells = SEED_CELLS
            .iter()
            .map(|(id, size)| Cell::new(*id, *size))
            .collect();
        let catalog = SEED_CATALOG
            .iter()
            .map(|(sku, size)| CatalogItem {
                sku: sku.to_string(),
                size: *size,
            })
            .collect();
        Self::new(cells, catalog)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    /// Catalog size for `sku`, if the SKU is known.
    pub fn size_of(&self, sku: &str) -> Option<Size> {
        self.catalog.iter().find(|i| i.sku == sku).map(|i| i.size)
    }

    /// Position of the first FREE cell in seed order. Size is not considered.
    pub(crate) fn first_free(&self) -> Option<usize> {
        self.cells.iter().position(Cell::is_free)
    }

    /// Resolve an order's optional cell reference by linear scan.
    pub(crate) fn resolve(&self, cell_id: Option<&str>) -> Result<usize, LockerError> {
        let id = match cell_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(LockerError::NoCellAssigned),
        };
        self.cells
            .iter()
            .position(|c| c.id == id)
            .ok_or(LockerError::CellNotFound)
    }

    pub(crate) fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }
}
