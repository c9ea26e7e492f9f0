//! Axis-aligned box of grid cells

use crate::core::types::{Dimensions, Position, Vec3};

/// Half-open box of unit cells: `min` is inclusive, `max` exclusive.
///
/// A brick at `position` with `dimensions` covers
/// `[position, position + dimensions)` on every axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Aabb {
    pub min: Position,
    pub max: Position,
}

impl Aabb {
    /// Create box from min (inclusive) and max (exclusive) corners
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// Create box from a minimum corner and an extent
    pub fn from_origin_size(origin: Position, size: Dimensions) -> Self {
        Self {
            min: origin,
            max: origin + size.as_ivec3(),
        }
    }

    /// Get size (max - min), zero on collapsed axes
    pub fn size(&self) -> Dimensions {
        (self.max - self.min).max(Position::ZERO).as_uvec3()
    }

    /// Number of cells covered
    pub fn volume(&self) -> u64 {
        let s = self.size();
        s.x as u64 * s.y as u64 * s.z as u64
    }

    /// True when no cell is covered
    pub fn is_empty(&self) -> bool {
        self.volume() == 0
    }

    /// Check if a cell lies inside the box
    pub fn contains(&self, cell: Position) -> bool {
        cell.x >= self.min.x && cell.x < self.max.x &&
        cell.y >= self.min.y && cell.y < self.max.y &&
        cell.z >= self.min.z && cell.z < self.max.z
    }

    /// Check if `other` lies entirely inside this box
    pub fn contains_box(&self, other: &Aabb) -> bool {
        other.min.cmpge(self.min).all() && other.max.cmple(self.max).all()
    }

    /// Check if two boxes share at least one cell. Touching faces do not count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x &&
        self.min.y < other.max.y && self.max.y > other.min.y &&
        self.min.z < other.max.z && self.max.z > other.min.z
    }

    /// Every covered cell, x outermost, then y, then z.
    ///
    /// This is the scan order used for collision reports, so the first
    /// conflicting cell is reproducible.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (min, max) = (self.min, self.max);
        (min.x..max.x).flat_map(move |x| {
            (min.y..max.y).flat_map(move |y| {
                (min.z..max.z).map(move |z| Position::new(x, y, z))
            })
        })
    }

    /// The (x, y) cells of the footprint at height `z`, x outermost.
    pub fn layer(&self, z: i32) -> impl Iterator<Item = Position> + '_ {
        let (min, max) = (self.min, self.max);
        (min.x..max.x).flat_map(move |x| {
            (min.y..max.y).map(move |y| Position::new(x, y, z))
        })
    }

    /// Lowest covered layer
    pub fn bottom(&self) -> i32 {
        self.min.z
    }

    /// Highest covered layer
    pub fn top(&self) -> i32 {
        self.max.z - 1
    }

    /// Get world-space center point
    pub fn center(&self) -> Vec3 {
        (self.min.as_vec3() + self.max.as_vec3()) * 0.5
    }
}
