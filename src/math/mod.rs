//! Integer grid geometry

pub mod aabb;

pub use aabb::Aabb;
