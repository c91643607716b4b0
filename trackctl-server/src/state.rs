//! Application state shared across handlers

use std::sync::Arc;

use tokio::sync::RwLock;
use trackctl_core::Tracker;

/// The one tracker every surface reads and writes.
///
/// A single coarse lock serializes all access; guards are released before
/// any response is written.
pub type SharedTracker = Arc<RwLock<Tracker>>;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    tracker: SharedTracker,
}

impl AppState {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(RwLock::new(tracker)),
        }
    }

    pub fn tracker(&self) -> &SharedTracker {
        &self.tracker
    }
}
