//! Terminal front-end for the Space Cowboy scenes.
//!
//! Views draw into a plain cell framebuffer; [`TerminalRenderer`] flushes only
//! what changed since the previous frame.
//!
//! Scenes think in logical pixels; [`Viewport`] maps them onto the cell grid
//! (one cell is 8x16 px), so circles keep their shape on screen.
//!
//! Every view is a pure function of scene state into a [`FrameBuffer`]:
//! - [`render_main_menu_into`] / [`render_pause_menu_into`]
//! - [`render_planets_into`]
//! - [`render_map_into`] (+ [`render_dialogue_into`] on top)
//! - [`render_shooter_into`]
//! - [`render_decode_into`]

pub mod backdrop;
pub mod decode_view;
pub mod dialogue_view;
pub mod fb;
pub mod map_view;
pub mod menu_view;
pub mod renderer;
pub mod shooter_view;
pub mod theme;
pub mod viewport;

pub use space_cowboy_core as core;
pub use space_cowboy_types as types;

pub use backdrop::Backdrop;
pub use decode_view::{render_decode, render_decode_into};
pub use dialogue_view::render_dialogue_into;
pub use fb::{wrap_text, Cell, CellStyle, FrameBuffer, Rgb};
pub use map_view::{render_map, render_map_into};
pub use menu_view::{render_main_menu_into, render_pause_menu_into, render_planets, render_planets_into};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use shooter_view::{render_shooter, render_shooter_into};
pub use viewport::Viewport;
