//! BrickId - handle to a brick held in a [`BrickStore`](super::BrickStore).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a brick in custody of a store.
///
/// Connector cells and occupancy cells hold these instead of references,
/// so adjacency never implies ownership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BrickId {
    /// Slot index within the store
    pub index: u32,
    /// Bumped each time the slot is vacated; stale handles stop resolving
    pub generation: u32,
}

impl BrickId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for BrickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}
