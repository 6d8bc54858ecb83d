//! Standalone shoot-'em-up.
//!
//! Difficulty comes from `SPACE_COWBOY_DIFFICULTY` (easy, medium, hard).

use anyhow::Result;

use space_cowboy::app::{init_runtime, run, Mode};

fn main() -> Result<()> {
    let config = init_runtime()?;
    let difficulty = config.difficulty;
    run(config, Mode::Shooter(difficulty))
}
