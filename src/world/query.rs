//! Legal-position enumeration

use crate::brick::Brick;
use crate::core::types::{Dimensions, Position};
use super::world::World;

impl World {
    /// Whether a fresh brick of `dimensions` could be placed at `position`
    /// right now: inside the world, on empty cells, and supported.
    pub fn can_place_at(&self, dimensions: Dimensions, position: Position) -> bool {
        match self.check_bounds(position, dimensions) {
            Ok(bounds) => self.first_collision(&bounds).is_none() && self.is_supported(&bounds),
            Err(_) => false,
        }
    }

    /// Every position where `brick` could be placed right now, ascending
    /// z, then x, then y.
    ///
    /// Only the brick's dimensions matter; whether it is already placed is
    /// for [`World::place`] to decide. The result is a snapshot and goes
    /// stale with the next placement or removal.
    pub fn possible_positions_for(&self, brick: &Brick) -> Vec<Position> {
        self.possible_positions_for_dimensions(brick.dimensions())
    }

    /// [`World::possible_positions_for`] by footprint alone
    pub fn possible_positions_for_dimensions(&self, dimensions: Dimensions) -> Vec<Position> {
        let world = self.dimensions();
        if dimensions.cmpgt(world).any() {
            log::trace!("No positions for {}: larger than world {}", dimensions, world);
            return Vec::new();
        }
        let span = (world - dimensions).as_ivec3();

        let mut positions = Vec::new();
        for z in 0..=span.z {
            for x in 0..=span.x {
                for y in 0..=span.y {
                    let position = Position::new(x, y, z);
                    if self.can_place_at(dimensions, position) {
                        positions.push(position);
                    }
                }
            }
        }
        log::trace!("{} possible positions for {}", positions.len(), dimensions);
        positions
    }
}
