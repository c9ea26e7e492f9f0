//! Error types for the brick engine

use thiserror::Error;

use crate::brick::BrickId;
use crate::core::types::{Dimensions, Position};

/// Errors raised by a single brick's own state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrickError {
    #[error("a brick must be at least 2x2x2 to hold top and bottom connectors, got {0}")]
    DimensionTooSmall(Dimensions),

    /// Caller defect: `at` is not on the brick's top or bottom layer, lies
    /// outside its footprint, or the brick is not placed at all.
    #[error("no connector at {at} for brick at {position:?}")]
    InvalidConnector {
        at: Position,
        position: Option<Position>,
    },
}

/// Reasons a world refuses to place or remove a brick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("brick of size {dimensions} does not fit in the world at {position}")]
    OutOfBounds {
        position: Position,
        dimensions: Dimensions,
    },

    #[error("brick is already placed at {0}")]
    AlreadyPlaced(Position),

    #[error("brick is already connected to other bricks, use a completely disconnected brick")]
    AlreadyConnected,

    #[error("brick is already referenced by the world at {0}")]
    AlreadyReferenced(Position),

    #[error("space is already occupied at {0}")]
    Occupied(Position),

    #[error("no adjacent brick above or below to rest against at {0}")]
    Unsupported(Position),

    #[error("brick is not placed")]
    NotPlaced,

    #[error("unknown brick {0}")]
    UnknownBrick(BrickId),

    #[error("connector error: {0}")]
    Connector(#[from] BrickError),
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Failures of the randomized auto builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("box is empty, create new bricks")]
    BoxEmpty,

    #[error("brick error: {0}")]
    Brick(#[from] BrickError),

    #[error("placement error: {0}")]
    Placement(#[from] PlacementError),
}

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    #[error("Brick error: {0}")]
    Brick(#[from] BrickError),

    #[error("Placement error: {0}")]
    Placement(#[from] PlacementError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
