//! Adventure map - the explorer scene of a world
//!
//! The avatar walks over a background with encounter markers. Markers are
//! tracked in a [`ScaledLayout`] so they stay put relative to the background
//! when the terminal is resized. Walking within
//! [`ENCOUNTER_TRIGGER_DISTANCE`] of an open marker triggers it.
//!
//! A triggered marker stays suppressed until the player walks out of its
//! trigger radius, so an unresolved encounter (lost fight, backed-out
//! dialogue) does not fire again on the very next frame.

use crate::encounter::Encounter;
use crate::placement::PlacedEncounter;
use crate::scaling::{rescale, ScaledLayout};
use crate::types::{
    Direction, FrameContext, Size, Vec2, ENCOUNTER_MARKER_RADIUS, ENCOUNTER_TRIGGER_DISTANCE,
    PLAYER_SPEED,
};
use crate::worlds::{self, WorldId};

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub encounter: Encounter,
    pub completed: bool,
    /// Persisted dialogue choice, shown as a badge.
    pub choice: Option<usize>,
}

/// Persisted state of one marker, supplied by the caller on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerState {
    pub completed: bool,
    pub choice: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct AdventureMap {
    world: WorldId,
    layout: ScaledLayout<MapMarker>,
    window: Size,
    player: Vec2,
    facing: Direction,
    suppressed: Option<usize>,
}

impl AdventureMap {
    /// Build a world map.
    ///
    /// `reference` is the background size (or the initial window size when no
    /// background could be read); `generated` must already be in that space.
    pub fn new(
        world: WorldId,
        reference: Size,
        window: Size,
        generated: Vec<PlacedEncounter>,
        restore: impl Fn(&Encounter) -> MarkerState,
    ) -> Self {
        let mut layout = ScaledLayout::new(reference, window);

        let fixed = worlds::encounters(world)
            .into_iter()
            .map(|e| (e.encounter, e.position, e.radius));
        let placed = generated
            .into_iter()
            .map(|p| (p.encounter, p.position, ENCOUNTER_MARKER_RADIUS));

        for (encounter, position, radius) in fixed.chain(placed) {
            let state = restore(&encounter);
            layout.insert(
                MapMarker {
                    encounter,
                    completed: state.completed,
                    choice: state.choice,
                },
                position,
                Some(radius),
            );
        }
        layout.on_resize(window);

        Self {
            world,
            layout,
            window,
            player: window.center(),
            facing: Direction::Left,
            suppressed: None,
        }
    }

    pub fn world(&self) -> WorldId {
        self.world
    }

    pub fn window(&self) -> Size {
        self.window
    }

    pub fn layout(&self) -> &ScaledLayout<MapMarker> {
        &self.layout
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn marker(&self, index: usize) -> Option<&MapMarker> {
        self.layout.get(index).map(|e| &e.item)
    }

    pub fn on_resize(&mut self, window: Size) {
        if window == self.window {
            return;
        }
        self.player = window.clamp(rescale(self.player, self.window, window));
        self.layout.on_resize(window);
        self.window = window;
    }

    /// Move the avatar and report the marker it walked into, if any.
    pub fn tick(&mut self, ctx: &FrameContext, movement: Vec2) -> Option<usize> {
        if ctx.window != self.window {
            self.on_resize(ctx.window);
        }

        self.player = self
            .window
            .clamp(self.player + movement * (PLAYER_SPEED * ctx.dt));
        if movement.x > 0.0 {
            self.facing = Direction::Right;
        } else if movement.x < 0.0 {
            self.facing = Direction::Left;
        } else if movement.y > 0.0 {
            self.facing = Direction::Down;
        } else if movement.y < 0.0 {
            self.facing = Direction::Up;
        }

        if let Some(i) = self.suppressed {
            let still_inside = self
                .layout
                .get(i)
                .map(|e| e.position.distance(self.player) < ENCOUNTER_TRIGGER_DISTANCE)
                .unwrap_or(false);
            if !still_inside {
                self.suppressed = None;
            }
        }

        let hit = self.layout.iter().enumerate().find_map(|(i, e)| {
            let open = !e.item.completed && self.suppressed != Some(i);
            (open && e.position.distance(self.player) < ENCOUNTER_TRIGGER_DISTANCE).then_some(i)
        });
        if hit.is_some() {
            self.suppressed = hit;
        }
        hit
    }

    pub fn mark_completed(&mut self, index: usize) {
        if let Some(entry) = self.layout.get_mut(index) {
            entry.item.completed = true;
        }
    }

    pub fn set_choice(&mut self, index: usize, choice: usize) {
        if let Some(entry) = self.layout.get_mut(index) {
            entry.item.choice = Some(choice);
        }
    }

    /// Reopen every marker and forget choices.
    pub fn reset_progress(&mut self) {
        for entry in self.layout.iter_mut() {
            entry.item.completed = false;
            entry.item.choice = None;
        }
        self.suppressed = None;
    }

    /// Teleport the avatar (clamped to the window).
    pub fn set_player(&mut self, position: Vec2) {
        self.player = self.window.clamp(position);
    }
}
