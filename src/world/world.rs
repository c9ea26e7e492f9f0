//! World container: occupancy grid, placed roster and brick custody
//!
//! The grid is stored as a flat `Vec<Option<BrickId>>` indexed by
//! `x + y * size_x + z * size_x * size_y`. `z` is the vertical axis; the
//! floor is `z = 0`.
//!
//! The world is the only writer of brick positions and connectors. Every
//! placement goes through the same ordered checks, and nothing is mutated
//! until all of them pass.

use crate::brick::{Brick, BrickId, BrickStore};
use crate::config::WorldConfig;
use crate::core::error::PlacementError;
use crate::core::types::{Dimensions, Position};
use crate::math::Aabb;
use super::event::WorldEvent;

/// Bounded 3-D grid of unit cells that bricks are placed into
#[derive(Clone, Debug)]
pub struct World {
    dimensions: Dimensions,
    /// Brick covering each cell, if any
    space: Vec<Option<BrickId>>,
    /// Bricks in custody, placed or not
    bricks: BrickStore,
    /// Currently placed bricks in placement order
    placed: Vec<BrickId>,
    /// Events not yet drained by an observer
    events: Vec<WorldEvent>,
}

impl World {
    /// Create a new empty world of `dimensions` cells
    pub fn new(dimensions: Dimensions) -> Self {
        let total = dimensions.x as usize * dimensions.y as usize * dimensions.z as usize;
        Self {
            dimensions,
            space: vec![None; total],
            bricks: BrickStore::new(),
            placed: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(config.dimensions())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The whole world as a cell box
    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_size(Position::ZERO, self.dimensions)
    }

    /// Convert a cell to a flat index. Returns `None` if out of bounds.
    fn index(&self, cell: Position) -> Option<usize> {
        if !self.bounds().contains(cell) {
            return None;
        }
        let sx = self.dimensions.x as usize;
        let sy = self.dimensions.y as usize;
        Some(cell.x as usize + cell.y as usize * sx + cell.z as usize * sx * sy)
    }

    fn cell_at(&self, index: usize) -> Position {
        let sx = self.dimensions.x as usize;
        let sy = self.dimensions.y as usize;
        Position::new(
            (index % sx) as i32,
            (index / sx % sy) as i32,
            (index / (sx * sy)) as i32,
        )
    }

    /// Brick covering `cell`. `None` for empty or out-of-bounds cells.
    pub fn occupant(&self, cell: Position) -> Option<BrickId> {
        self.index(cell).and_then(|i| self.space[i])
    }

    pub fn is_occupied(&self, cell: Position) -> bool {
        self.occupant(cell).is_some()
    }

    /// Take custody of a brick. It stays unplaced until [`World::place`].
    pub fn add_brick(&mut self, brick: Brick) -> BrickId {
        self.bricks.insert(brick)
    }

    pub fn brick(&self, id: BrickId) -> Option<&Brick> {
        self.bricks.get(id)
    }

    /// Every brick in custody, placed or not
    pub fn bricks(&self) -> impl Iterator<Item = (BrickId, &Brick)> + '_ {
        self.bricks.iter()
    }

    pub fn brick_count(&self) -> usize {
        self.bricks.len()
    }

    /// Hand an unplaced brick back to the caller. Its handle becomes stale.
    pub fn take_brick(&mut self, id: BrickId) -> Result<Brick, PlacementError> {
        let brick = self.bricks.get(id).ok_or(PlacementError::UnknownBrick(id))?;
        if let Some(position) = brick.position() {
            return Err(PlacementError::AlreadyPlaced(position));
        }
        self.bricks.remove(id).ok_or(PlacementError::UnknownBrick(id))
    }

    /// Currently placed bricks in placement order
    pub fn placed(&self) -> &[BrickId] {
        &self.placed
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Place brick `id` with its minimum corner at `position`.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// bounds, already placed, already connected (both directions), already
    /// referenced by the grid, overlap, support. The world is untouched on
    /// failure.
    pub fn place(&mut self, id: BrickId, position: Position) -> Result<(), PlacementError> {
        let brick = self.bricks.get(id).ok_or(PlacementError::UnknownBrick(id))?;
        let bounds = self.validate(id, brick, position)?;
        self.commit(id, bounds)
    }

    fn validate(&self, id: BrickId, brick: &Brick, position: Position) -> Result<Aabb, PlacementError> {
        let bounds = self.check_bounds(position, brick.dimensions())?;

        if let Some(existing) = brick.position() {
            return Err(PlacementError::AlreadyPlaced(existing));
        }
        if brick.is_connected_to_any() {
            return Err(PlacementError::AlreadyConnected);
        }
        let claimed_by_other = self.placed.iter().any(|&other| {
            other != id && self.bricks.get(other).is_some_and(|b| b.is_connected_to(id))
        });
        if claimed_by_other {
            return Err(PlacementError::AlreadyConnected);
        }
        if let Some(index) = self.space.iter().position(|cell| *cell == Some(id)) {
            return Err(PlacementError::AlreadyReferenced(self.cell_at(index)));
        }
        if let Some(cell) = self.first_collision(&bounds) {
            log::trace!("Brick {} rejected at {}: occupied cell {}", id, position, cell);
            return Err(PlacementError::Occupied(cell));
        }
        if !self.is_supported(&bounds) {
            log::trace!("Brick {} rejected at {}: unsupported", id, position);
            return Err(PlacementError::Unsupported(position));
        }
        Ok(bounds)
    }

    /// Box covered by a brick of `dimensions` at `position`, if it lies
    /// entirely inside the world.
    pub(crate) fn check_bounds(&self, position: Position, dimensions: Dimensions) -> Result<Aabb, PlacementError> {
        let out_of_bounds = PlacementError::OutOfBounds { position, dimensions };
        if position.cmplt(Position::ZERO).any() {
            return Err(out_of_bounds);
        }
        let fits = (0..3).all(|axis| {
            position[axis] as i64 + dimensions[axis] as i64 <= self.dimensions[axis] as i64
        });
        if !fits {
            return Err(out_of_bounds);
        }
        Ok(Aabb::from_origin_size(position, dimensions))
    }

    /// First occupied cell of `bounds` in x, y, z scan order
    pub(crate) fn first_collision(&self, bounds: &Aabb) -> Option<Position> {
        bounds.cells().find(|&cell| self.is_occupied(cell))
    }

    /// Support rule: on the floor, or touching a brick directly below or
    /// directly above the footprint.
    pub(crate) fn is_supported(&self, bounds: &Aabb) -> bool {
        if bounds.bottom() == 0 {
            return true;
        }
        bounds.layer(bounds.bottom() - 1).any(|cell| self.is_occupied(cell))
            || bounds.layer(bounds.max.z).any(|cell| self.is_occupied(cell))
    }

    fn commit(&mut self, id: BrickId, bounds: Aabb) -> Result<(), PlacementError> {
        // (neighbour, neighbour's cell, own cell) across the bottom and top faces
        let below = bounds
            .layer(bounds.bottom() - 1)
            .filter_map(|cell| self.occupant(cell).map(|other| (other, cell, cell + Position::Z)));
        let above = bounds
            .layer(bounds.max.z)
            .filter_map(|cell| self.occupant(cell).map(|other| (other, cell, cell - Position::Z)));
        let links: Vec<_> = below.chain(above).collect();

        for cell in bounds.cells() {
            if let Some(i) = self.index(cell) {
                self.space[i] = Some(id);
            }
        }

        let brick = self.bricks.get_mut(id).ok_or(PlacementError::UnknownBrick(id))?;
        brick.set_position(bounds.min);
        for &(other, _, own_cell) in &links {
            brick.connect(other, own_cell)?;
        }
        for &(other, other_cell, _) in &links {
            if let Some(neighbour) = self.bricks.get_mut(other) {
                neighbour.connect(id, other_cell)?;
            }
        }
        self.placed.push(id);

        let brick = self.bricks.get(id).ok_or(PlacementError::UnknownBrick(id))?;
        log::debug!(
            "Placed brick {} ({}) at {} with {} connector links",
            id, brick.dimensions(), bounds.min, links.len()
        );
        self.events.push(WorldEvent::Placed {
            id,
            position: bounds.min,
            dimensions: brick.dimensions(),
            color: brick.color().to_string(),
        });
        Ok(())
    }

    /// Remove a placed brick from the world.
    ///
    /// Tears down connectors on both sides and clears every grid cell that
    /// references the brick. Never cascades: bricks that rested on it stay.
    pub fn remove(&mut self, id: BrickId) -> Result<(), PlacementError> {
        let brick = self.bricks.get(id).ok_or(PlacementError::UnknownBrick(id))?;
        let Some(position) = brick.position() else {
            return Err(PlacementError::NotPlaced);
        };
        let dimensions = brick.dimensions();

        let former = self.bricks.disconnect(id).unwrap_or_default();
        for cell in self.space.iter_mut().filter(|cell| **cell == Some(id)) {
            *cell = None;
        }
        self.placed.retain(|&p| p != id);

        log::debug!(
            "Removed brick {} from {} ({} neighbours disconnected)",
            id, position, former.len()
        );
        self.events.push(WorldEvent::Removed { id, position, dimensions });
        Ok(())
    }

    /// Remove every placed brick. Bricks stay in custody, unplaced.
    pub fn clear(&mut self) {
        for id in self.placed.clone() {
            if let Err(e) = self.remove(id) {
                log::warn!("Failed to remove brick {} while clearing: {}", id, e);
            }
        }
    }

    /// Take the pending events and clear the internal list
    pub fn take_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::from_config(&WorldConfig::default())
    }
}
