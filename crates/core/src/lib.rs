//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains every rule and state machine of the game. It has
//! **zero dependencies** on terminal I/O, files or logging, making it:
//!
//! - **Deterministic**: every random decision goes through a seeded [`SimpleRng`]
//! - **Testable**: scenes are driven by explicit actions and [`FrameContext`]s
//! - **Portable**: the same logic runs under the terminal front-end or headless
//!
//! # Module Structure
//!
//! - [`projectile`]: generation-tagged bullet arena with pruning and hit tests
//! - [`scaling`]: ratio-based placement that survives window resizes
//! - [`encounter`]: tagged encounter model and canned dialogue
//! - [`placement`]: random / grid / explicit encounter layouts
//! - [`worlds`]: the four world maps and their fixed encounters
//! - [`adventure`]: explorer map scene
//! - [`dialogue`]: frame-driven dialogue session
//! - [`shooter`]: shoot-'em-up minigame, one config per difficulty
//! - [`cipher`]: Caesar-shift decoding puzzle
//! - [`menu`]: main/pause menus and the planet picker
//! - [`rng`]: small LCG
//!
//! # Example
//!
//! ```
//! use space_cowboy_core::{ProjectileStore, ScaledLayout};
//! use space_cowboy_types::{Size, Vec2};
//!
//! // Three bullets flying right leave a 50x50 field after one second.
//! let mut bullets = ProjectileStore::new();
//! for _ in 0..3 {
//!     bullets.spawn(Vec2::ZERO, Vec2::new(100.0, 0.0));
//! }
//! bullets.advance(1.0);
//! assert_eq!(bullets.prune_out_of_bounds(50.0, 50.0), 3);
//! assert!(bullets.is_empty());
//!
//! // A marker at the centre of the reference stays centred after a resize.
//! let reference = Size::new(1280, 720);
//! let mut layout = ScaledLayout::new(reference, reference);
//! let i = layout.insert("camp", Vec2::new(640.0, 360.0), None);
//! layout.on_resize(Size::new(1920, 1080));
//! assert_eq!(layout.get(i).unwrap().position, Vec2::new(960.0, 540.0));
//! ```
//!
//! # Timing
//!
//! Scenes advance by the elapsed frame time in seconds. The host loop targets
//! a 16ms tick and passes `dt = 0` on a stalled frame.

pub mod adventure;
pub mod cipher;
pub mod dialogue;
pub mod encounter;
pub mod menu;
pub mod placement;
pub mod projectile;
pub mod rng;
pub mod scaling;
pub mod shooter;
pub mod worlds;

pub use space_cowboy_types as types;

// Re-export commonly used types for convenience
pub use adventure::{AdventureMap, MapMarker, MarkerState};
pub use cipher::DecodeGame;
pub use dialogue::{DialogueOutcome, DialoguePhase, DialogueSession};
pub use encounter::{
    DialogueEncounter, DialogueOption, Encounter, EncounterKind, FlagValue, MinigameKind,
};
pub use menu::{Menu, MenuItem, PlanetSelect};
pub use placement::{PlacedEncounter, PlacementConfig, PlacementMode, PlacementSource};
pub use projectile::{Projectile, ProjectileId, ProjectileStore};
pub use rng::SimpleRng;
pub use scaling::{NormalizedPoint, ScaledLayout};
pub use shooter::{RoundState, ShooterConfig, ShooterGame};
pub use types::FrameContext;
pub use worlds::WorldId;
