//! Application layer: configuration, logging, the scene director and the
//! terminal event loop shared by every binary.

pub mod config;
pub mod director;
pub mod render;
pub mod runtime;
pub mod telemetry;

pub use space_cowboy_core as core;
pub use space_cowboy_input as input;
pub use space_cowboy_save as save;
pub use space_cowboy_term as term;
pub use space_cowboy_types as types;

pub use config::AppConfig;
pub use director::{Director, MapState, Origin, Scene};
pub use render::{render, render_into};
pub use runtime::{run, Mode};
pub use telemetry::{init_runtime, init_tracing};
