//! Rendering-side mirror of a world
//!
//! Keeps one box mesh description per placed brick, driven purely by
//! [`WorldEvent`](crate::world::WorldEvent)s. Nothing here can write to
//! the world.

pub mod mirror;

pub use mirror::{parse_hex_color, BrickMesh, SceneMirror};
