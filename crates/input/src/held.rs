//! Held-direction tracker for terminal environments.
//!
//! Continuous movement needs to know which directions are held *right now*.
//! Terminals that report key releases clear a direction immediately; on the
//! rest a direction is auto-released when no press (or auto-repeat) for it has
//! arrived within the release timeout.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::types::{Direction, Vec2};

// Long enough to bridge the gap between typical auto-repeat events.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 200;

#[derive(Debug, Clone)]
pub struct HeldKeys {
    up: Option<Instant>,
    down: Option<Instant>,
    left: Option<Instant>,
    right: Option<Instant>,
    key_release_timeout_ms: u32,
}

fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            up: None,
            down: None,
            left: None,
            right: None,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    fn slot(&mut self, dir: Direction) -> &mut Option<Instant> {
        match dir {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Record a press (or auto-repeat). Returns the direction if it was one.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Direction> {
        let dir = direction_of(code)?;
        *self.slot(dir) = Some(Instant::now());
        Some(dir)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(dir) = direction_of(code) {
            *self.slot(dir) = None;
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up.is_some(),
            Direction::Down => self.down.is_some(),
            Direction::Left => self.left.is_some(),
            Direction::Right => self.right.is_some(),
        }
    }

    /// Drop stale directions and return the per-axis movement in `-1..=1`.
    pub fn update(&mut self) -> Vec2 {
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        for slot in [&mut self.up, &mut self.down, &mut self.left, &mut self.right] {
            if slot.is_some_and(|t| t.elapsed() > timeout) {
                *slot = None;
            }
        }
        self.movement()
    }

    pub fn movement(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(
            axis(self.is_held(Direction::Left), self.is_held(Direction::Right)),
            axis(self.is_held(Direction::Up), self.is_held(Direction::Down)),
        )
    }

    pub fn reset(&mut self) {
        self.up = None;
        self.down = None;
        self.left = None;
        self.right = None;
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = HeldKeys::new().with_key_release_timeout_ms(10_000);
        assert_eq!(keys.handle_key_press(KeyCode::Char('d')), Some(Direction::Right));
        assert_eq!(keys.handle_key_press(KeyCode::Up), Some(Direction::Up));
        assert_eq!(keys.update(), Vec2::new(1.0, -1.0));

        keys.handle_key_release(KeyCode::Right);
        assert_eq!(keys.update(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut keys = HeldKeys::new().with_key_release_timeout_ms(10_000);
        keys.handle_key_press(KeyCode::Left);
        keys.handle_key_press(KeyCode::Right);
        assert_eq!(keys.update(), Vec2::ZERO);
    }

    #[test]
    fn test_non_movement_key_is_ignored() {
        let mut keys = HeldKeys::new();
        assert_eq!(keys.handle_key_press(KeyCode::Char(' ')), None);
        assert_eq!(keys.movement(), Vec2::ZERO);
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut keys = HeldKeys::new().with_key_release_timeout_ms(50);
        keys.handle_key_press(KeyCode::Left);
        assert!(keys.is_held(Direction::Left));

        // Simulate no key-release events by moving the press time into the past.
        keys.left = Some(Instant::now() - Duration::from_millis(51));

        assert_eq!(keys.update(), Vec2::ZERO);
        assert!(!keys.is_held(Direction::Left));
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(HeldKeys::new().key_release_timeout_ms() > 0);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut keys = HeldKeys::new().with_key_release_timeout_ms(10_000);
        keys.handle_key_press(KeyCode::Down);
        keys.reset();
        assert_eq!(keys.update(), Vec2::ZERO);
    }
}
