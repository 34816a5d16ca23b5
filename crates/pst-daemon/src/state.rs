//! Shared runtime state for pst-daemon.
//!
//! Handlers receive `State<Arc<AppState>>` from Axum. The session directory
//! sits behind one `RwLock`: every mutating locker operation holds the write
//! guard from lookup to last mutation, so transitions on a session never
//! interleave.

use std::sync::Arc;

use pst_locker::SessionDirectory;
use tokio::sync::RwLock;

// ---------------------------------------------------------------------------
// BuildInfo
// ---------------------------------------------------------------------------

/// Static build metadata included in root / health responses.
#[derive(Clone, Debug)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppState {
    pub build: BuildInfo,
    /// All seeded sessions. Never evicted.
    pub sessions: Arc<RwLock<SessionDirectory>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            build: BuildInfo {
                service: "pst-daemon",
                version: env!("CARGO_PKG_VERSION"),
            },
            sessions: Arc::new(RwLock::new(SessionDirectory::new())),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Monotonically increasing uptime since first call (process lifetime).
pub fn uptime_secs() -> u64 {
    static START: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
    START
        .get_or_init(std::time::Instant::now)
        .elapsed()
        .as_secs()
}
