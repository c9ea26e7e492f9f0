//! Bounded occupancy grid and the placement rules over it

pub mod event;
pub mod world;
pub mod query;

pub use event::{PlacementObserver, WorldEvent};
pub use world::World;
