//! Scene director.
//!
//! Owns the active scene, the save stores and the RNG. The host loop feeds it
//! actions, clicks, resizes and ticks; encounter results flow from here into
//! persistence.
//!
//! ```text
//! MainMenu ──Play──▶ Planets ──pick──▶ Map ◀──────────────┐
//!    ▲                  │               │ walk into marker │ leave / finish
//!    └──────Back────────┘               ├─▶ Dialogue ──────┤
//!    ▲                                  ├─▶ Shooter ───────┤
//!    └──Back to Main Menu── Pause ◀─Esc─┴─▶ Decode ────────┘
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::AppConfig;
use crate::core::placement::{self, PlacementConfig, PlacementSource};
use crate::core::scaling::reference_size;
use crate::core::{
    AdventureMap, DecodeGame, DialogueOutcome, DialogueSession, EncounterKind, MarkerState, Menu,
    MenuItem, MinigameKind, PlanetSelect, RoundState, ShooterGame, SimpleRng, WorldId,
};
use crate::save::{choice_key, ProfileStore, ProgressStore, Stat};
use crate::term::{theme, Backdrop};
use crate::types::{Difficulty, Direction, FrameContext, GameAction, Size, Vec2};

/// Seconds a map notice stays on screen.
pub const NOTICE_SECS: f32 = 2.5;

/// Credits per point of combat difficulty.
pub const CREDITS_PER_DIFFICULTY: u32 = 25;

/// Where a minigame was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Marker(usize),
    /// Launched by a standalone binary; leaving it quits.
    Standalone,
}

#[derive(Debug)]
pub enum Scene {
    MainMenu(Menu),
    Planets(PlanetSelect),
    Map,
    Pause(Menu),
    Dialogue {
        session: DialogueSession,
        marker: usize,
    },
    Shooter {
        game: ShooterGame,
        origin: Origin,
        won: bool,
    },
    Decode {
        game: DecodeGame,
        origin: Origin,
        solved: bool,
    },
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::MainMenu(_) => "main_menu",
            Scene::Planets(_) => "planets",
            Scene::Map => "map",
            Scene::Pause(_) => "pause",
            Scene::Dialogue { .. } => "dialogue",
            Scene::Shooter { .. } => "shooter",
            Scene::Decode { .. } => "decode",
        }
    }
}

/// The world currently being explored.
#[derive(Debug)]
pub struct MapState {
    pub map: AdventureMap,
    pub backdrop: Backdrop,
}

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    remaining: f32,
}

pub struct Director {
    config: AppConfig,
    profile: ProfileStore,
    progress: ProgressStore,
    rng: SimpleRng,
    window: Size,
    scene: Scene,
    map: Option<MapState>,
    notice: Option<Notice>,
    quit: bool,
}

impl Director {
    /// Full game, starting at the main menu.
    pub fn new(config: AppConfig, window: Size) -> Self {
        let profile = ProfileStore::open(&config.data_dir);
        let progress = ProgressStore::open(&config.save_dir);
        let rng = SimpleRng::new(config.seed);
        Self {
            config,
            profile,
            progress,
            rng,
            window,
            scene: Scene::MainMenu(Menu::main()),
            map: None,
            notice: None,
            quit: false,
        }
    }

    /// Just the shooter; leaving it quits.
    pub fn standalone_shooter(config: AppConfig, window: Size, difficulty: Difficulty) -> Self {
        let mut director = Self::new(config, window);
        let seed = director.rng.next_u32();
        director.scene = Scene::Shooter {
            game: ShooterGame::with_difficulty(difficulty, window, seed),
            origin: Origin::Standalone,
            won: false,
        };
        director
    }

    /// Just the cipher puzzle; leaving it quits.
    pub fn standalone_decode(config: AppConfig, window: Size) -> Self {
        let mut director = Self::new(config, window);
        let seed = director.rng.next_u32();
        director.scene = Scene::Decode {
            game: DecodeGame::new(seed),
            origin: Origin::Standalone,
            solved: false,
        };
        director
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn map(&self) -> Option<&MapState> {
        self.map.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    pub fn window(&self) -> Size {
        self.window
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn resize(&mut self, window: Size) {
        if window == self.window || window.is_degenerate() {
            return;
        }
        tracing::debug!(width = window.width, height = window.height, "window resized");
        self.window = window;
        if let Some(state) = self.map.as_mut() {
            state.map.on_resize(window);
        }
        match &mut self.scene {
            Scene::Planets(select) => select.on_resize(window),
            Scene::Shooter { game, .. } => game.on_resize(window),
            _ => {}
        }
    }

    pub fn handle(&mut self, action: GameAction) {
        match &mut self.scene {
            Scene::MainMenu(menu) => match menu.handle(action) {
                Some(MenuItem::Play) => self.scene = Scene::Planets(PlanetSelect::new(self.window)),
                Some(MenuItem::Quit) => self.quit = true,
                _ => {}
            },
            Scene::Planets(select) => {
                if action == GameAction::Back {
                    self.scene = Scene::MainMenu(Menu::main());
                } else if let Some(world) = select.handle(action) {
                    self.open_world(world);
                }
            }
            Scene::Map => {
                if action == GameAction::Back {
                    self.scene = Scene::Pause(Menu::pause());
                }
            }
            Scene::Pause(menu) => {
                if action == GameAction::Back {
                    self.scene = Scene::Map;
                    return;
                }
                match menu.handle(action) {
                    Some(MenuItem::Continue) => self.scene = Scene::Map,
                    Some(MenuItem::ResetProgress) => self.reset_world(),
                    Some(MenuItem::MainMenu) => {
                        self.map = None;
                        self.notice = None;
                        self.scene = Scene::MainMenu(Menu::main());
                    }
                    _ => {}
                }
            }
            Scene::Dialogue { session, marker } => {
                let marker = *marker;
                if let Some(outcome) = session.handle(action) {
                    self.record_choice(marker, &outcome);
                }
                self.finish_dialogue_if_done();
            }
            Scene::Shooter { game, won, .. } => match action {
                GameAction::Shoot => game.shoot(),
                GameAction::Reset => {
                    *won |= game.state() == RoundState::Won;
                    game.restart();
                }
                GameAction::Back => self.leave_shooter(),
                _ => {}
            },
            Scene::Decode { game, solved, .. } => match action {
                GameAction::Move(Direction::Left) => game.rotate_forward(),
                GameAction::Move(Direction::Right) => game.rotate_backward(),
                GameAction::Reset => game.reset_dial(),
                GameAction::NewRound => {
                    *solved |= game.is_won();
                    game.next_round();
                }
                GameAction::Back => self.leave_decode(),
                _ => {}
            },
        }
    }

    /// Left click at a logical pixel position.
    pub fn click(&mut self, point: Vec2) {
        match &mut self.scene {
            Scene::Planets(select) => {
                if let Some(world) = select.click(point) {
                    self.open_world(world);
                }
            }
            Scene::Shooter { game, .. } => {
                game.shoot_at(point);
            }
            _ => {}
        }
    }

    pub fn tick(&mut self, dt: f32, movement: Vec2) {
        if let Some(notice) = self.notice.as_mut() {
            notice.remaining -= dt;
            if notice.remaining <= 0.0 {
                self.notice = None;
            }
        }

        let ctx = FrameContext::new(self.window, dt);
        match &mut self.scene {
            Scene::Map => {
                let Some(state) = self.map.as_mut() else {
                    return;
                };
                let ctx = ctx.with_background(state.backdrop.size());
                if let Some(marker) = state.map.tick(&ctx, movement) {
                    self.start_encounter(marker);
                }
            }
            Scene::Dialogue { session, .. } => {
                session.tick(dt);
                self.finish_dialogue_if_done();
            }
            Scene::Shooter { game, won, .. } => {
                if game.tick(&ctx, movement) == RoundState::Won {
                    *won = true;
                }
            }
            _ => {}
        }
    }

    fn open_world(&mut self, world: WorldId) {
        let path = self.config.assets_dir.join(world.background_file());
        let backdrop = match Backdrop::load(&path) {
            Ok(backdrop) => backdrop,
            Err(err) => {
                tracing::warn!(world = world.as_str(), error = %err, "background unavailable, using placeholder");
                Backdrop::solid(theme::MAP_PLACEHOLDER)
            }
        };
        let reference = reference_size(backdrop.size(), self.window);

        let generated = if world.has_generated_encounters() {
            let (cfg, source) = load_placement(&self.config.encounters_path);
            tracing::info!(
                source = source.as_str(),
                mode = ?cfg.placement_mode,
                count = cfg.count,
                "encounter placement resolved"
            );
            placement::generate(&cfg, reference, &mut self.rng)
        } else {
            Vec::new()
        };

        let progress = &self.progress;
        let profile = &self.profile;
        let map = AdventureMap::new(world, reference, self.window, generated, |encounter| {
            MarkerState {
                completed: progress.is_completed(world, &encounter.id),
                choice: profile
                    .get_choice(&choice_key(world, &encounter.id))
                    .map(|c| c.selected),
            }
        });
        tracing::info!(world = world.as_str(), markers = map.layout().len(), "world opened");

        self.map = Some(MapState { map, backdrop });
        self.notice = None;
        self.scene = Scene::Map;
    }

    fn start_encounter(&mut self, index: usize) {
        let Some(state) = self.map.as_ref() else {
            return;
        };
        let Some(marker) = state.map.marker(index) else {
            return;
        };
        let world = state.map.world();
        let encounter = marker.encounter.clone();
        let remembered = marker.choice;
        tracing::info!(
            world = world.as_str(),
            encounter = %encounter.id,
            kind = encounter.kind.label(),
            "encounter started"
        );

        match encounter.kind {
            EncounterKind::Dialogue(dialogue) => {
                self.scene = Scene::Dialogue {
                    session: DialogueSession::new(dialogue, remembered),
                    marker: index,
                };
            }
            EncounterKind::Combat { difficulty, .. } => {
                self.start_shooter(Difficulty::from_rating(difficulty), Origin::Marker(index));
            }
            EncounterKind::Minigame { game, .. } => match game {
                MinigameKind::Shooter(difficulty) => {
                    self.start_shooter(difficulty, Origin::Marker(index))
                }
                MinigameKind::Decode => self.start_decode(Origin::Marker(index)),
            },
            EncounterKind::Shop { name, description } => {
                self.progress.add_stat(world, Stat::ItemsCollected, 1);
                self.complete_marker(index);
                self.show_notice(format!("{}: {} You stock up on supplies.", name, description));
            }
        }
    }

    fn start_shooter(&mut self, difficulty: Difficulty, origin: Origin) {
        let seed = self.rng.next_u32();
        self.scene = Scene::Shooter {
            game: ShooterGame::with_difficulty(difficulty, self.window, seed),
            origin,
            won: false,
        };
    }

    fn start_decode(&mut self, origin: Origin) {
        let seed = self.rng.next_u32();
        self.scene = Scene::Decode {
            game: DecodeGame::new(seed),
            origin,
            solved: false,
        };
    }

    fn record_choice(&mut self, marker: usize, outcome: &DialogueOutcome) {
        let Some(state) = self.map.as_mut() else {
            return;
        };
        let world = state.map.world();
        let Some(id) = state.map.marker(marker).map(|m| m.encounter.id.clone()) else {
            return;
        };
        state.map.set_choice(marker, outcome.index);
        self.profile
            .set_choice(&choice_key(world, &id), outcome.index, &outcome.text);
        self.profile.apply_effect(&outcome.effect);
        tracing::info!(
            world = world.as_str(),
            encounter = %id,
            choice = outcome.index,
            puzzle = outcome.wants_puzzle,
            "dialogue choice recorded"
        );
    }

    fn finish_dialogue_if_done(&mut self) {
        let (marker, abandoned, puzzle) = match &self.scene {
            Scene::Dialogue { session, marker } if session.is_finished() => {
                (*marker, session.is_abandoned(), session.puzzle_requested())
            }
            _ => return,
        };
        if abandoned {
            tracing::debug!(marker, "dialogue abandoned");
            self.scene = Scene::Map;
            return;
        }
        self.complete_marker(marker);
        if puzzle {
            self.start_decode(Origin::Marker(marker));
        } else {
            self.scene = Scene::Map;
        }
    }

    fn leave_shooter(&mut self) {
        let (origin, won) = match &self.scene {
            Scene::Shooter { game, origin, won } => {
                (*origin, *won || game.state() == RoundState::Won)
            }
            _ => return,
        };
        match origin {
            Origin::Standalone => self.quit = true,
            Origin::Marker(index) => {
                self.scene = Scene::Map;
                self.resolve_minigame(index, won);
            }
        }
    }

    fn leave_decode(&mut self) {
        let (origin, solved) = match &self.scene {
            Scene::Decode { game, origin, solved } => (*origin, *solved || game.is_won()),
            _ => return,
        };
        match origin {
            Origin::Standalone => self.quit = true,
            Origin::Marker(index) => {
                self.scene = Scene::Map;
                self.resolve_minigame(index, solved);
            }
        }
    }

    /// Apply the result of a shooter or decode run started from a marker.
    fn resolve_minigame(&mut self, index: usize, won: bool) {
        let Some(state) = self.map.as_ref() else {
            return;
        };
        let world = state.map.world();
        let Some(marker) = state.map.marker(index) else {
            return;
        };
        let title = marker.encounter.kind.title().to_string();
        let kind = marker.encounter.kind.clone();
        tracing::info!(world = world.as_str(), encounter = %marker.encounter.id, won, "minigame finished");

        if !won {
            self.show_notice(format!("{} will be waiting. Come back when you're ready.", title));
            return;
        }

        match kind {
            EncounterKind::Combat { difficulty, .. } => {
                let credits = CREDITS_PER_DIFFICULTY * difficulty as u32;
                self.progress.add_stat(world, Stat::CombatWins, 1);
                self.progress.add_stat(world, Stat::CreditsEarned, credits);
                self.complete_marker(index);
                self.show_notice(format!("{} defeated! +{} credits", title, credits));
            }
            EncounterKind::Minigame { .. } => {
                self.progress.add_stat(world, Stat::MinigamesCompleted, 1);
                self.complete_marker(index);
                self.show_notice(format!("{} complete!", title));
            }
            EncounterKind::Dialogue(_) => {
                self.progress.add_stat(world, Stat::MinigamesCompleted, 1);
                self.show_notice("The puzzle yields its secret.".to_string());
            }
            EncounterKind::Shop { .. } => {}
        }
    }

    fn complete_marker(&mut self, index: usize) {
        let Some(state) = self.map.as_mut() else {
            return;
        };
        let world = state.map.world();
        let Some(id) = state.map.marker(index).map(|m| m.encounter.id.clone()) else {
            return;
        };
        state.map.mark_completed(index);
        self.progress.complete_encounter(world, &id);
    }

    fn reset_world(&mut self) {
        let Some(state) = self.map.as_mut() else {
            self.scene = Scene::Map;
            return;
        };
        let world = state.map.world();
        state.map.reset_progress();
        self.progress.reset_world(world);
        self.profile.clear_world(world);
        self.scene = Scene::Map;
        self.show_notice(format!("{} progress reset.", world.display_name()));
    }

    fn show_notice(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            remaining: NOTICE_SECS,
        });
    }
}

/// Read the placement config; any problem falls back with a warning.
pub fn load_placement(path: &Path) -> (PlacementConfig, PlacementSource) {
    match fs::read_to_string(path) {
        Ok(text) => match PlacementConfig::from_json(&text) {
            Ok(cfg) => (cfg, PlacementSource::ConfigFile),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "malformed encounter config");
                (PlacementConfig::fallback(), PlacementSource::Fallback)
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => placement::resolve_config(None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "unreadable encounter config");
            (PlacementConfig::fallback(), PlacementSource::Fallback)
        }
    }
}
