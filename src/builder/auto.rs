//! Randomized auto builder
//!
//! Each step takes a random brick from the box, asks the world where it
//! could go, and places it at one of those positions at random. Timing
//! between steps is the caller's business; `tick` does one step per call
//! while a started run has progress left.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::brick::BrickId;
use crate::config::BrickworldConfig;
use crate::core::error::BuildError;
use crate::core::types::Position;
use crate::world::World;
use super::brick_box::{BrickBox, BrickTemplate};

/// Result of one builder step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A fresh brick was placed
    Placed { id: BrickId, position: Position },
    /// The picked brick fits nowhere; it still counts as taken from the box
    NoPosition { template: BrickTemplate },
}

/// Totals of a [`AutoBuilder::run`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub placed: u32,
    pub skipped: u32,
    /// The run ended early because the box ran out
    pub box_exhausted: bool,
}

/// Drains a [`BrickBox`] into a world at random legal positions
#[derive(Clone, Debug)]
pub struct AutoBuilder {
    rng: ChaCha8Rng,
    brick_box: BrickBox,
    /// Steps left in the current run
    progress: u32,
}

impl AutoBuilder {
    pub fn new(brick_box: BrickBox, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            brick_box,
            progress: 0,
        }
    }

    pub fn from_config(config: &BrickworldConfig) -> Self {
        Self::new(BrickBox::from_config(config), config.auto_build.seed)
    }

    pub fn brick_box(&self) -> &BrickBox {
        &self.brick_box
    }

    pub fn brick_box_mut(&mut self) -> &mut BrickBox {
        &mut self.brick_box
    }

    /// Place a single random brick at a random possible position
    pub fn step(&mut self, world: &mut World) -> Result<StepOutcome, BuildError> {
        let template = self.brick_box.pick_random(&mut self.rng)?;
        let brick = template.instantiate()?;

        let positions = world.possible_positions_for(&brick);
        if positions.is_empty() {
            log::warn!("Unable to put {} brick anywhere in this world", template.dimensions);
            return Ok(StepOutcome::NoPosition { template });
        }
        let position = positions[self.rng.gen_range(0..positions.len())];

        let id = world.add_brick(brick);
        if let Err(e) = world.place(id, position) {
            // Positions were computed against this exact world state
            log::error!("Placing {} at {} failed: {}", id, position, e);
            world.take_brick(id)?;
            return Err(e.into());
        }
        log::info!("Put brick {} at {}", id, position);
        Ok(StepOutcome::Placed { id, position })
    }

    /// Begin a run of `count` steps, replacing any run in progress
    pub fn start(&mut self, count: u32) {
        self.progress = count;
    }

    /// Stop the current run after the step in flight
    pub fn cancel(&mut self) {
        self.progress = 0;
    }

    pub fn remaining(&self) -> u32 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.progress > 0
    }

    /// One step of the current run, or `None` when no run is active.
    /// An empty box ends the run.
    pub fn tick(&mut self, world: &mut World) -> Result<Option<StepOutcome>, BuildError> {
        if self.progress == 0 {
            return Ok(None);
        }
        self.progress -= 1;
        match self.step(world) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(e) => {
                self.progress = 0;
                Err(e)
            }
        }
    }

    /// Run `count` steps back to back
    pub fn run(&mut self, world: &mut World, count: u32) -> Result<BuildReport, BuildError> {
        let mut report = BuildReport::default();
        self.start(count);
        loop {
            match self.tick(world) {
                Ok(Some(StepOutcome::Placed { .. })) => report.placed += 1,
                Ok(Some(StepOutcome::NoPosition { .. })) => report.skipped += 1,
                Ok(None) => break,
                Err(BuildError::BoxEmpty) => {
                    report.box_exhausted = true;
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        log::info!(
            "Auto build finished: {} placed, {} skipped{}",
            report.placed,
            report.skipped,
            if report.box_exhausted { ", box exhausted" } else { "" }
        );
        Ok(report)
    }
}
