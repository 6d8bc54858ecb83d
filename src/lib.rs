//! Space Cowboy (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so binaries, integration
//! tests and benches can use `space_cowboy::{app,core,input,save,term,types}`.

pub use space_cowboy_app as app;
pub use space_cowboy_core as core;
pub use space_cowboy_input as input;
pub use space_cowboy_save as save;
pub use space_cowboy_term as term;
pub use space_cowboy_types as types;
