//! pst-locker
//!
//! In-memory model of a parcel locker ("postomat"):
//! - Couriers deposit parcels into cells; recipients open them with a PIN.
//! - Unclaimed parcels expire and are collected back by a courier.
//! - Every seeded session owns an isolated inventory and order registry.
//!
//! The state machine in [`machine`] reproduces the QA training behaviour
//! exactly, including the known defects listed on [`Session`].
//! This crate has no transport types; `pst-daemon` maps it onto HTTP.

mod error;
mod inventory;
mod machine;
mod registry;
mod session;
mod types;

pub use error::{ErrorClass, LockerError};
pub use inventory::{Inventory, SEED_CATALOG, SEED_CELLS};
pub use machine::{CreatedOrder, Deposited, Expired, Opened};
pub use registry::OrderRegistry;
pub use session::{SeedKey, Session, SessionDirectory};
pub use types::{CatalogItem, Cell, CellStatus, Order, OrderStatus, Size};
