//! Locker State Machine
//!
//! # Transitions
//!
//! ```text
//!  create_order        deposit              pickup (first open frees cell)
//!  ──────────► CREATED ───────► STORED ◄──────────────────────┐
//!                                 │  └────────────────────────┘ (status unchanged)
//!                   return_expire │
//!                                 ▼
//!                             EXPIRED ◄── return_expire (repeatable)
//!                                 │
//!                  return_collect │  cell stays RETURN_PENDING
//!                                 ▼
//!                             RETURNED
//! ```
//!
//! Every operation validates all preconditions before touching the session,
//! so a refused call leaves cells and orders exactly as they were.
//! `PICKED` is an accepted pickup source but nothing transitions into it.

use tracing::debug;
use uuid::Uuid;

use crate::error::LockerError;
use crate::session::Session;
use crate::types::{Cell, CellStatus, Order, OrderStatus};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedOrder {
    pub order_id: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deposited {
    pub cell_id: String,
    pub accepted: bool,
}

/// Result of a cell door opening (client pickup or courier collection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opened {
    pub opened: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expired {
    pub order_id: String,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

impl Session {
    /// Register a new order for a catalog SKU and issue its PIN.
    pub fn create_order(&mut self, sku: &str) -> Result<CreatedOrder, LockerError> {
        let item_size = self
            .inventory
            .size_of(sku)
            .ok_or_else(|| LockerError::UnknownSku(sku.to_string()))?;

        let order = Order::new(Uuid::new_v4().to_string(), new_pin(), sku, item_size);
        let created = CreatedOrder {
            order_id: order.id.clone(),
            code: order.code.clone(),
        };
        debug!(order_id = %created.order_id, sku, size = %item_size, "order created");
        self.orders.insert(order);
        Ok(created)
    }

    /// Courier places the parcel into the first FREE cell in seed order.
    ///
    /// The item size is ignored: a small parcel can land in a large cell and
    /// vice versa.
    pub fn deposit(&mut self, order_id: &str) -> Result<Deposited, LockerError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or(LockerError::OrderNotFound)?;
        if order.status != OrderStatus::Created {
            return Err(LockerError::InvalidState(
                "order must be CREATED to be deposited",
            ));
        }

        let idx = self.inventory.first_free().ok_or(LockerError::NoFreeCells)?;
        let cell = self.inventory.cell_mut(idx);
        cell.status = CellStatus::Occupied;

        order.cell_id = Some(cell.id.clone());
        order.status = OrderStatus::Stored;

        debug!(
            order_id,
            cell_id = %cell.id,
            cell_size = %cell.size,
            item_size = %order.item_size,
            "parcel deposited"
        );
        Ok(Deposited {
            cell_id: cell.id.clone(),
            accepted: true,
        })
    }

    /// Recipient opens the cell with the order's PIN.
    ///
    /// The first successful open frees the cell and clears the order's cell
    /// reference. Later opens with the right PIN keep succeeding and only bump
    /// `client_open_count`. The order stays `STORED` throughout.
    pub fn pickup(&mut self, order_id: &str, code: &str) -> Result<Opened, LockerError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or(LockerError::OrderNotFound)?;
        if !matches!(order.status, OrderStatus::Stored | OrderStatus::Picked) {
            return Err(LockerError::InvalidState(
                "order is not in a status that allows pickup",
            ));
        }
        if code != order.code {
            return Err(LockerError::WrongCode);
        }

        // Resolved before the counter moves so a bad reference changes nothing.
        let first_open = if order.client_open_count == 0 {
            Some(self.inventory.resolve(order.cell_id.as_deref())?)
        } else {
            None
        };

        order.client_open_count = order.client_open_count.saturating_add(1);

        if let Some(idx) = first_open {
            self.inventory.cell_mut(idx).status = CellStatus::Free;
            order.cell_id = None;
        }

        debug!(
            order_id,
            opens = order.client_open_count,
            freed_cell = first_open.is_some(),
            "pickup opened"
        );
        Ok(Opened { opened: true })
    }

    /// Mark a stored parcel as expired and flag its cell for courier return.
    ///
    /// `EXPIRED` is an accepted source, so the call may be repeated.
    pub fn return_expire(&mut self, order_id: &str) -> Result<Expired, LockerError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or(LockerError::OrderNotFound)?;
        if !matches!(order.status, OrderStatus::Stored | OrderStatus::Expired) {
            return Err(LockerError::InvalidState(
                "order is not in a status that allows expiry",
            ));
        }
        let idx = self.inventory.resolve(order.cell_id.as_deref())?;

        order.status = OrderStatus::Expired;
        order.expired_marked = true;
        self.inventory.cell_mut(idx).status = CellStatus::ReturnPending;

        debug!(order_id, cell_id = ?order.cell_id, "order expired");
        Ok(Expired {
            order_id: order.id.clone(),
        })
    }

    /// Courier collects an expired parcel.
    ///
    /// The cell is left in `RETURN_PENDING`; nothing ever frees it again.
    pub fn return_collect(&mut self, order_id: &str) -> Result<Opened, LockerError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or(LockerError::OrderNotFound)?;
        if order.status != OrderStatus::Expired {
            return Err(LockerError::InvalidState(
                "order must be EXPIRED to be collected",
            ));
        }
        let idx = self.inventory.resolve(order.cell_id.as_deref())?;

        order.cell_id = None;
        order.status = OrderStatus::Returned;

        debug!(
            order_id,
            cell_id = %self.inventory.cells()[idx].id,
            "expired parcel collected"
        );
        Ok(Opened { opened: true })
    }

    /// All cells in seed order.
    pub fn list_cells(&self) -> &[Cell] {
        self.inventory.cells()
    }

    pub fn get_order(&self, order_id: &str) -> Result<&Order, LockerError> {
        self.orders.get(order_id).ok_or(LockerError::OrderNotFound)
    }
}

/// Short uppercase PIN: the first group of a fresh UUIDv4.
fn new_pin() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..8].to_ascii_uppercase()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
