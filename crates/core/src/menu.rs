//! Menus and the planet picker

use crate::scaling::{NormalizedPoint, ScaledLayout};
use crate::types::{Direction, GameAction, Size, Vec2};
use crate::worlds::WorldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Quit,
    Continue,
    ResetProgress,
    MainMenu,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Play => "Play",
            MenuItem::Quit => "Quit",
            MenuItem::Continue => "Continue",
            MenuItem::ResetProgress => "Reset Progress",
            MenuItem::MainMenu => "Back to Main Menu",
        }
    }
}

pub const MAIN_MENU: &[MenuItem] = &[MenuItem::Play, MenuItem::Quit];
pub const PAUSE_MENU: &[MenuItem] = &[
    MenuItem::Continue,
    MenuItem::ResetProgress,
    MenuItem::MainMenu,
];

/// Vertical list with a wrapping cursor.
#[derive(Debug, Clone)]
pub struct Menu {
    title: &'static str,
    items: &'static [MenuItem],
    selected: usize,
}

impl Menu {
    pub fn new(title: &'static str, items: &'static [MenuItem]) -> Self {
        Self {
            title,
            items,
            selected: 0,
        }
    }

    pub fn main() -> Self {
        Self::new("SPACE COWBOY", MAIN_MENU)
    }

    pub fn pause() -> Self {
        Self::new("Menu", PAUSE_MENU)
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the activated item on Confirm or a valid number key.
    pub fn handle(&mut self, action: GameAction) -> Option<MenuItem> {
        let count = self.items.len();
        if count == 0 {
            return None;
        }
        match action {
            GameAction::Move(Direction::Up) => {
                self.selected = (self.selected + count - 1) % count;
                None
            }
            GameAction::Move(Direction::Down) => {
                self.selected = (self.selected + 1) % count;
                None
            }
            GameAction::Confirm => self.items.get(self.selected).copied(),
            GameAction::Pick(n) => {
                let item = self.items.get(n as usize).copied();
                if item.is_some() {
                    self.selected = n as usize;
                }
                item
            }
            _ => None,
        }
    }
}

/// Prompt in the bottom text box.
pub const PLANET_PROMPT: &str = "Select a planet to get started";

/// Bottom text box height as a fraction of the window height.
pub const PLANET_BOX_RATIO: f32 = 0.22;

/// Hotspot radius as a fraction of the longest window side.
pub const PLANET_RADIUS_RATIO: f32 = 0.06;

const PLANET_SPOTS: [(WorldId, f32, f32); 4] = [
    (WorldId::World1, 0.18, 0.38),
    (WorldId::World2, 0.39, 0.55),
    (WorldId::World3, 0.61, 0.32),
    (WorldId::World4, 0.82, 0.52),
];

#[derive(Debug, Clone)]
pub struct PlanetSelect {
    layout: ScaledLayout<WorldId>,
    selected: usize,
}

impl PlanetSelect {
    pub fn new(window: Size) -> Self {
        let mut layout = ScaledLayout::new(window, window);
        for (world, x, y) in PLANET_SPOTS {
            layout.insert_normalized(world, NormalizedPoint::new(x, y), Some(PLANET_RADIUS_RATIO));
        }
        Self {
            layout,
            selected: 0,
        }
    }

    pub fn layout(&self) -> &ScaledLayout<WorldId> {
        &self.layout
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn on_resize(&mut self, window: Size) {
        self.layout.on_resize(window);
    }

    pub fn handle(&mut self, action: GameAction) -> Option<WorldId> {
        let count = self.layout.len();
        match action {
            GameAction::Move(Direction::Left | Direction::Up) => {
                self.selected = (self.selected + count - 1) % count;
                None
            }
            GameAction::Move(Direction::Right | Direction::Down) => {
                self.selected = (self.selected + 1) % count;
                None
            }
            GameAction::Confirm => self.layout.get(self.selected).map(|e| e.item),
            GameAction::Pick(n) => self.layout.get(n as usize).map(|e| e.item),
            _ => None,
        }
    }

    /// Planet under a click, if any.
    pub fn click(&mut self, point: Vec2) -> Option<WorldId> {
        let (i, entry) = self.layout.iter().enumerate().find(|(_, e)| {
            let r = e.radius.unwrap_or(0.0);
            e.position.distance(point) <= r
        })?;
        self.selected = i;
        Some(entry.item)
    }
}
