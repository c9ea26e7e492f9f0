//! Core type aliases and re-exports

pub use glam::{IVec3, UVec3, Vec3};

/// Minimum corner of a brick, or a single grid cell, in world coordinates.
/// Signed so callers can probe negative positions and get `OutOfBounds`.
pub type Position = IVec3;

/// Extent of a brick or of the world along x, y and z.
pub type Dimensions = UVec3;

/// Standard Result type for the engine
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
