//! Save files.
//!
//! Two JSON documents, both rewritten right after every mutation:
//! - [`ProfileStore`]: remembered dialogue choices and world flags
//! - [`ProgressStore`]: per-world completed encounters and stats
//!
//! Failures are logged and never abort the game; the in-memory state stays
//! authoritative for the rest of the session.

pub mod document;
pub mod profile;
pub mod progress;

pub use space_cowboy_core as core;

pub use profile::{choice_key, ProfileData, ProfileStore, SavedChoice};
pub use progress::{ProgressStore, Stat, WorldProgress, WorldStats};
