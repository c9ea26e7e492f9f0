//! Auto build runner: fills a world from a brick box at a fixed pace.
//!
//! Usage: cargo run --release --bin auto_build -- [CONFIG]
//!
//!   CONFIG   JSON config file (default: built-in defaults)
//!
//! Every world event is printed to stdout as one JSON object per line, so
//! the output can be piped into a viewer. Progress goes to the log.

use std::io::Write;
use std::time::Duration;

use brickworld::builder::{AutoBuilder, StepOutcome};
use brickworld::core::error::BuildError;
use brickworld::core::{logging, Result};
use brickworld::scene::SceneMirror;
use brickworld::{BrickworldConfig, World};

fn main() -> Result<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => BrickworldConfig::load(path)?,
        None => BrickworldConfig::default(),
    };

    let mut world = World::from_config(&config.world);
    let mut builder = AutoBuilder::from_config(&config);
    let mut scene = SceneMirror::new();
    let interval = Duration::from_millis(config.auto_build.interval_ms);

    log::info!(
        "Auto building {} bricks in a {} world ({} in the box, seed {})",
        config.auto_build.count,
        world.dimensions(),
        builder.brick_box().total_remaining(),
        config.auto_build.seed,
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let (mut placed, mut skipped) = (0u32, 0u32);

    builder.start(config.auto_build.count);
    while builder.is_running() {
        match builder.tick(&mut world) {
            Ok(Some(StepOutcome::Placed { .. })) => placed += 1,
            Ok(Some(StepOutcome::NoPosition { .. })) => skipped += 1,
            Ok(None) => break,
            Err(BuildError::BoxEmpty) => {
                log::info!("Brick box is empty");
                break;
            }
            Err(e) => return Err(e.into()),
        }

        for event in world.take_events() {
            writeln!(out, "{}", serde_json::to_string(&event)?)?;
            scene.apply(&event);
        }
        out.flush()?;

        if builder.is_running() {
            std::thread::sleep(interval);
        }
    }

    log::info!(
        "Done: {} placed, {} skipped, {} meshes in scene, {} bricks left in the box",
        placed,
        skipped,
        scene.len(),
        builder.brick_box().total_remaining(),
    );
    Ok(())
}
