//! Session Directory: seed-key → isolated (inventory, orders) pair.
//!
//! Sessions live for the lifetime of the directory. There is no eviction,
//! so memory grows with every `seed` call.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::LockerError;
use crate::inventory::Inventory;
use crate::registry::OrderRegistry;

/// Opaque session identifier handed out by `seed`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedKey(String);

impl SeedKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One isolated locker instance.
///
/// Known defects reproduced on purpose:
/// - `deposit` never checks item size against cell size.
/// - `pickup` never moves the order to `PICKED` and never caps opens.
/// - `return_expire` may be repeated on an `EXPIRED` order.
/// - `return_collect` leaves the cell in `RETURN_PENDING` forever.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub(crate) inventory: Inventory,
    pub(crate) orders: OrderRegistry,
}

impl Session {
    /// A session with the standard seed layout and no orders.
    pub fn seeded() -> Self {
        Self::with_inventory(Inventory::seeded())
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory,
            orders: OrderRegistry::new(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn orders(&self) -> &OrderRegistry {
        &self.orders
    }
}

#[derive(Debug, Default)]
pub struct SessionDirectory {
    inner: BTreeMap<SeedKey, Session>,
}

impl SessionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh seeded session under a new key.
    pub fn seed(&mut self) -> (SeedKey, &Session) {
        let key = SeedKey::generate();
        info!(seed_key = %key, sessions = self.inner.len() + 1, "session seeded");
        let session = self.inner.entry(key.clone()).or_insert_with(Session::seeded);
        (key, &*session)
    }

    /// Look up the session for a caller-supplied key.
    pub fn resolve(&self, key: Option<&str>) -> Result<&Session, LockerError> {
        let key = checked_key(key)?;
        self.inner
            .get(&key)
            .ok_or_else(|| LockerError::UnknownSession(key.0))
    }

    pub fn resolve_mut(&mut self, key: Option<&str>) -> Result<&mut Session, LockerError> {
        let key = checked_key(key)?;
        match self.inner.get_mut(&key) {
            Some(s) => Ok(s),
            None => Err(LockerError::UnknownSession(key.0)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn checked_key(key: Option<&str>) -> Result<SeedKey, LockerError> {
    match key {
        Some(k) if !k.is_empty() => Ok(SeedKey::new(k)),
        _ => Err(LockerError::MissingSessionKey),
    }
}
