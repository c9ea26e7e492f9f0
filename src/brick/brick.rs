//! A single brick: geometry, color tag and its two connector planes

use std::collections::BTreeSet;

use glam::UVec2;

use crate::core::error::BrickError;
use crate::core::types::{Dimensions, Position};
use crate::math::Aabb;
use super::connector::ConnectorPlane;
use super::handle::BrickId;

/// Rectangular unit that can be placed into a [`World`](crate::world::World).
///
/// Position and connectors are only written by the world (and by the
/// store's teardown); callers read them through accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brick {
    dimensions: Dimensions,
    /// Display tag, e.g. `#a8e6cf`. No effect on placement.
    color: String,
    /// Minimum corner while placed
    position: Option<Position>,
    /// Links across the top face, at layer `z + dz - 1`
    connectors_top: ConnectorPlane,
    /// Links across the bottom face, at layer `z`
    connectors_bottom: ConnectorPlane,
}

impl Brick {
    /// Create an unplaced brick.
    ///
    /// Every dimension must be at least 2 so the top and bottom faces are
    /// distinct layers with their own connectors.
    pub fn new(dimensions: Dimensions, color: impl Into<String>) -> Result<Self, BrickError> {
        if dimensions.cmple(Dimensions::ONE).any() {
            return Err(BrickError::DimensionTooSmall(dimensions));
        }
        Ok(Self {
            dimensions,
            color: color.into(),
            position: None,
            connectors_top: ConnectorPlane::new(dimensions.x, dimensions.y),
            connectors_bottom: ConnectorPlane::new(dimensions.x, dimensions.y),
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Covered cells while placed
    pub fn bounds(&self) -> Option<Aabb> {
        self.position.map(|p| Aabb::from_origin_size(p, self.dimensions))
    }

    pub fn top_connectors(&self) -> &ConnectorPlane {
        &self.connectors_top
    }

    pub fn bottom_connectors(&self) -> &ConnectorPlane {
        &self.connectors_bottom
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// Record `other` as touching this brick at world cell `at`.
    ///
    /// `at` must be one of this brick's own cells on its bottom layer
    /// (`z`) or its top layer (`z + dz - 1`).
    pub fn connect(&mut self, other: BrickId, at: Position) -> Result<(), BrickError> {
        let invalid = BrickError::InvalidConnector { at, position: self.position };
        let Some(position) = self.position else {
            return Err(invalid);
        };

        let offset = at - position;
        let footprint = self.dimensions.truncate().as_ivec2();
        if offset.x < 0 || offset.y < 0 || offset.x >= footprint.x || offset.y >= footprint.y {
            return Err(invalid);
        }
        let cell = UVec2::new(offset.x as u32, offset.y as u32);

        let top_layer = position.z + self.dimensions.z as i32 - 1;
        let plane = if at.z == position.z {
            &mut self.connectors_bottom
        } else if at.z == top_layer {
            &mut self.connectors_top
        } else {
            return Err(invalid);
        };
        plane.set(cell, other);
        Ok(())
    }

    /// Drop every link to `other`. No-op when not connected.
    pub fn disconnect_from(&mut self, other: BrickId) {
        self.connectors_top.clear_matching(other);
        self.connectors_bottom.clear_matching(other);
    }

    /// Clear both planes and forget the position.
    ///
    /// One-sided: neighbours still point here. Use
    /// [`BrickStore::disconnect`](super::BrickStore::disconnect) for the full teardown.
    pub(crate) fn detach(&mut self) {
        self.connectors_top.clear();
        self.connectors_bottom.clear();
        self.position = None;
    }

    /// Forget the position but keep connectors. Only for corrupting state in tests.
    #[cfg(test)]
    pub(crate) fn clear_position(&mut self) {
        self.position = None;
    }

    /// Every brick linked from either plane, deduplicated
    pub fn adjacent_bricks(&self) -> BTreeSet<BrickId> {
        self.connectors_top
            .iter()
            .chain(self.connectors_bottom.iter())
            .map(|(_, id)| id)
            .collect()
    }

    pub fn is_connected_to(&self, other: BrickId) -> bool {
        self.adjacent_bricks().contains(&other)
    }

    pub fn is_connected_to_any(&self) -> bool {
        !(self.connectors_top.is_empty() && self.connectors_bottom.is_empty())
    }
}
