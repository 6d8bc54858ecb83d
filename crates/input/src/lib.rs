//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s and
//! pixel positions, and tracks held movement keys in a way that also works
//! on terminals without key-release events.

pub mod held;
pub mod map;

pub use space_cowboy_types as types;

pub use held::HeldKeys;
pub use map::{cell_center, click_position, handle_key_event, should_quit};
