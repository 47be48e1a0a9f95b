//! Last-known-good fallback slot.

use arc_swap::ArcSwapOption;
use std::sync::Arc;

use crate::supply::types::CirculatingSupply;

/// Single-slot, overwrite-on-success memo with no expiry.
///
/// Reads and writes are atomic swaps. A reader racing a writer sees either
/// the previous or the new value, never a torn one. The slot is never
/// cleared once set.
#[derive(Debug, Default)]
pub struct LastKnownGood {
    slot: ArcSwapOption<CirculatingSupply>,
}

impl LastKnownGood {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            slot: ArcSwapOption::empty(),
        }
    }

    /// Most recent successful value, if any.
    pub fn get(&self) -> Option<CirculatingSupply> {
        self.slot.load().as_deref().copied()
    }

    /// Replace the stored value.
    pub fn store(&self, value: CirculatingSupply) {
        self.slot.store(Some(Arc::new(value)));
    }
}
