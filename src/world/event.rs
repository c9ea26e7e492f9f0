//! Placement events for observers outside the core (rendering, logs)

use serde::Serialize;

use crate::brick::BrickId;
use crate::core::types::{Dimensions, Position};

/// Something that changed in a world, queued until drained with
/// [`World::take_events`](super::World::take_events).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorldEvent {
    Placed {
        id: BrickId,
        position: Position,
        dimensions: Dimensions,
        color: String,
    },
    Removed {
        id: BrickId,
        position: Position,
        dimensions: Dimensions,
    },
}

impl WorldEvent {
    pub fn brick(&self) -> BrickId {
        match self {
            WorldEvent::Placed { id, .. } | WorldEvent::Removed { id, .. } => *id,
        }
    }

    /// Forward this event to the matching observer callback
    pub fn dispatch(&self, observer: &mut dyn PlacementObserver) {
        match self {
            WorldEvent::Placed { id, position, dimensions, color } => {
                observer.on_placed(*id, *position, *dimensions, color)
            }
            WorldEvent::Removed { id, position, dimensions } => {
                observer.on_removed(*id, *position, *dimensions)
            }
        }
    }
}

/// Reacts to bricks entering and leaving a world. Has no write access to it.
pub trait PlacementObserver {
    fn on_placed(&mut self, id: BrickId, position: Position, dimensions: Dimensions, color: &str);

    fn on_removed(&mut self, id: BrickId, position: Position, dimensions: Dimensions);
}
