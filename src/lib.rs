//! Brickworld - brick placement engine
//!
//! A bounded 3-D occupancy grid that validates brick placements, keeps a
//! connector graph between stacked bricks and enumerates legal positions.
//! Rendering, timing and input live outside the core and talk to it
//! through [`world::WorldEvent`]s.

pub mod core;
pub mod math;
pub mod brick;
pub mod world;
pub mod scene;
pub mod builder;
pub mod config;

pub use brick::{Brick, BrickId, BrickStore, ConnectorPlane};
pub use world::{PlacementObserver, World, WorldEvent};
pub use config::BrickworldConfig;
