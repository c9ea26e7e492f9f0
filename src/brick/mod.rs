//! Bricks, their connector planes and the handle store that owns them

pub mod handle;
pub mod connector;
pub mod brick;
pub mod store;

pub use handle::BrickId;
pub use connector::ConnectorPlane;
pub use brick::Brick;
pub use store::BrickStore;
