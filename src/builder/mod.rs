//! Calling-layer helpers: a box of bricks to build from and a randomized
//! builder that drains it into a world.

pub mod brick_box;
pub mod auto;

pub use brick_box::{BoxItem, BrickBox, BrickTemplate};
pub use auto::{AutoBuilder, BuildReport, StepOutcome};
