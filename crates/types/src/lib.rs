//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, persistence).
//!
//! # Coordinate Space
//!
//! Game logic runs in *logical pixels*. The terminal is the window, and every
//! terminal cell covers a fixed block of logical pixels:
//!
//! - **Cell width**: 8 px
//! - **Cell height**: 16 px
//!
//! A 160x45 terminal is therefore a 1280x720 logical window, which is the
//! default window size of every scene.
//!
//! # Timing and Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `PLAYER_SPEED` | 300 | Avatar speed in px/s |
//! | `BULLET_SPEED` | 700 | Easy-mode bullet speed in px/s |
//! | `PLAYER_BULLET_SPEED` | 600 | Player bullet speed in px/s |
//! | `ENEMY_BULLET_SPEED` | 400 | Enemy bullet speed in px/s |
//! | `HIT_RADIUS` | 50 | Target / player hitbox radius |
//! | `ENCOUNTER_TRIGGER_DISTANCE` | 60 | Encounter proximity trigger |
//!
//! # Examples
//!
//! ```
//! use space_cowboy_types::{Difficulty, Direction, Size, Vec2};
//!
//! let a = Vec2::new(3.0, 4.0);
//! assert_eq!(a.length(), 5.0);
//!
//! let step = Direction::Left.unit() * 10.0;
//! assert_eq!(a + step, Vec2::new(-7.0, 4.0));
//!
//! let window = Size::from_cells(160, 45);
//! assert_eq!(window, Size::new(1280, 720));
//!
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//! ```

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Logical pixels per terminal column.
pub const CELL_PX_W: u32 = 8;

/// Logical pixels per terminal row.
pub const CELL_PX_H: u32 = 16;

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Avatar speed in pixels per second (map and shooter).
pub const PLAYER_SPEED: f32 = 300.0;

/// Radius of the avatar on the explorer map.
pub const PLAYER_RADIUS: f32 = 40.0;

/// Bullet speed for the keyboard-aimed easy shooter.
pub const BULLET_SPEED: f32 = 700.0;

/// Bullet speed for the mouse-aimed shooters.
pub const PLAYER_BULLET_SPEED: f32 = 600.0;

/// Enemy bullet speed.
pub const ENEMY_BULLET_SPEED: f32 = 400.0;

/// Distance from the player centre where keyboard-fired bullets appear.
pub const BULLET_OFFSET: f32 = 40.0;

/// Drawn radius of a bullet.
pub const BULLET_RADIUS: f32 = 8.0;

/// Hitbox radius for both the shooter target and the player.
pub const HIT_RADIUS: f32 = 50.0;

/// Seconds before a destroyed target reappears.
pub const TARGET_RESPAWN_SECS: f32 = 0.5;

/// Distance at which the player triggers an encounter marker.
pub const ENCOUNTER_TRIGGER_DISTANCE: f32 = 60.0;

/// Drawn radius of an encounter marker.
pub const ENCOUNTER_MARKER_RADIUS: f32 = 30.0;

/// Maximum number of prompts a looping dialogue may show.
pub const MAX_DIALOGUE_LOOPS: u8 = 3;

/// Maximum number of options per dialogue prompt (number keys 1-9).
pub const MAX_DIALOGUE_OPTIONS: usize = 9;

/// Seconds a dialogue followup stays on screen before advancing on its own.
pub const FOLLOWUP_SECS: f32 = 1.4;

/// 2D vector in logical pixels (or pixels per second for velocities).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or zero for a zero-length vector.
    pub fn normalized_or_zero(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::ZERO
        }
    }

    pub fn from_angle(radians: f32) -> Vec2 {
        Vec2::new(radians.cos(), radians.sin())
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Logical size of a terminal with `cols` x `rows` cells.
    pub const fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as u32 * CELL_PX_W,
            height: rows as u32 * CELL_PX_H,
        }
    }

    /// True when either dimension is zero.
    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Larger of the two dimensions, never below 1.
    pub fn longest_side(self) -> f32 {
        self.width.max(self.height).max(1) as f32
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Clamp a point into `[0, width] x [0, height]`.
    pub fn clamp(self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(0.0, self.width as f32),
            p.y.clamp(0.0, self.height as f32),
        )
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}

/// Per-frame values handed to every scene instead of global window state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Current window size in logical pixels.
    pub window: Size,
    /// Pixel size of the scene background, when one is loaded.
    pub background: Option<Size>,
    /// Elapsed frame time in seconds (0 on a stalled frame).
    pub dt: f32,
}

impl FrameContext {
    pub fn new(window: Size, dt: f32) -> Self {
        Self {
            window,
            background: None,
            dt,
        }
    }

    pub fn with_background(mut self, background: Option<Size>) -> Self {
        self.background = background;
        self
    }
}

/// Cardinal direction, used for facing and keyboard aiming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector (screen coordinates, +Y down).
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Shooter difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use space_cowboy_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Map a combat rating (1-5) to a shooter difficulty.
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            0 | 1 => Difficulty::Easy,
            2 | 3 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

/// Actions produced by the input layer and consumed by scenes.
///
/// Scenes interpret actions in context: `Move(Left)` walks on the map,
/// rotates the dial in the cipher game and is ignored in menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Move(Direction),
    Shoot,
    Confirm,
    Back,
    /// Direct pick by number key (0-based).
    Pick(u8),
    Reset,
    NewRound,
}

impl GameAction {
    /// Parse game action from a camelCase name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "moveUp" => Some(GameAction::Move(Direction::Up)),
            "moveDown" => Some(GameAction::Move(Direction::Down)),
            "moveLeft" => Some(GameAction::Move(Direction::Left)),
            "moveRight" => Some(GameAction::Move(Direction::Right)),
            "shoot" => Some(GameAction::Shoot),
            "confirm" => Some(GameAction::Confirm),
            "back" => Some(GameAction::Back),
            "reset" => Some(GameAction::Reset),
            "newRound" => Some(GameAction::NewRound),
            _ => None,
        }
    }
}
