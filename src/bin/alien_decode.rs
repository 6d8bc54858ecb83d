//! Standalone Alien Code Breaker.

use anyhow::Result;

use space_cowboy::app::{init_runtime, run, Mode};

fn main() -> Result<()> {
    let config = init_runtime()?;
    run(config, Mode::Decode)
}
