//! Space Cowboy runner (default binary).
//!
//! Main menu, planet picker and the world maps with all their encounters.

use anyhow::Result;

use space_cowboy::app::{init_runtime, run, Mode};

fn main() -> Result<()> {
    let config = init_runtime()?;
    run(config, Mode::Full)
}
