//! Shooter minigame - one round of player vs. a single target
//!
//! # Difficulties
//!
//! | | Easy | Medium | Hard |
//! |---|---|---|---|
//! | Target movement | stationary | dodges bullets within 250 px | wanders, dodges within 200 px |
//! | Enemy fire | none | aimed, every 1.0 s | predictive + random, every 0.5 s |
//! | Player bullet speed | 700 | 600 | 600 |
//! | Kills to win | 3 | 5 | 5 |
//!
//! Player bullets that reach the target are consumed and score a kill; the
//! target reappears 0.5 s later. An enemy bullet reaching the player ends the
//! round. While the target is down it neither moves, fires nor takes hits.
//!
//! # Frame order
//!
//! 1. Move the player (clamped to the window) and update facing
//! 2. Move the target
//! 3. Enemy fire
//! 4. Advance and prune both projectile stores
//! 5. Resolve hits on the target, then on the player
//! 6. Respawn timer

use crate::projectile::ProjectileStore;
use crate::rng::SimpleRng;
use crate::scaling::rescale;
use crate::types::{
    Difficulty, Direction, FrameContext, Size, Vec2, BULLET_OFFSET, BULLET_SPEED,
    ENEMY_BULLET_SPEED, HIT_RADIUS, PLAYER_BULLET_SPEED, PLAYER_SPEED, TARGET_RESPAWN_SECS,
};

/// How far the target keeps from the window edges while dodging or wandering.
pub const TARGET_EDGE_MARGIN: f32 = 50.0;

/// Respawn points keep at least this far from every edge.
pub const RESPAWN_MARGIN: i32 = 100;

/// Lead time used by predictive enemy shots.
pub const PREDICTION_LEAD_SECS: f32 = 0.3;

/// Per-tick chance that a wandering target picks a new heading.
pub const WANDER_TURN_CHANCE: f32 = 0.01;

/// Jitter added to each dodge component.
pub const DODGE_JITTER: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetBehavior {
    Stationary,
    /// Distance-weighted repulsion from nearby bullets.
    Dodge { radius: f32, speed: f32 },
    /// Constant heading, bouncing off edges, flipping away from bullets.
    Wander { radius: f32, speed: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyFire {
    None,
    Aimed { interval: f32 },
    PredictiveAndRandom { interval: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShooterConfig {
    pub difficulty: Difficulty,
    pub bullet_speed: f32,
    pub enemy_bullet_speed: f32,
    pub hit_radius: f32,
    pub respawn_secs: f32,
    pub kills_to_win: u32,
    pub target: TargetBehavior,
    pub fire: EnemyFire,
}

impl ShooterConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let base = Self {
            difficulty,
            bullet_speed: PLAYER_BULLET_SPEED,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            hit_radius: HIT_RADIUS,
            respawn_secs: TARGET_RESPAWN_SECS,
            kills_to_win: 5,
            target: TargetBehavior::Stationary,
            fire: EnemyFire::None,
        };
        match difficulty {
            Difficulty::Easy => Self {
                bullet_speed: BULLET_SPEED,
                kills_to_win: 3,
                ..base
            },
            Difficulty::Medium => Self {
                target: TargetBehavior::Dodge {
                    radius: 250.0,
                    speed: 200.0,
                },
                fire: EnemyFire::Aimed { interval: 1.0 },
                ..base
            },
            Difficulty::Hard => Self {
                target: TargetBehavior::Wander {
                    radius: 200.0,
                    speed: 120.0,
                },
                fire: EnemyFire::PredictiveAndRandom { interval: 0.5 },
                ..base
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub position: Vec2,
    pub alive: bool,
    respawn_timer: f32,
    heading: Vec2,
}

#[derive(Debug, Clone)]
pub struct ShooterGame {
    config: ShooterConfig,
    window: Size,
    player: Vec2,
    player_velocity: Vec2,
    facing: Direction,
    target: Target,
    player_bullets: ProjectileStore,
    enemy_bullets: ProjectileStore,
    fire_cooldown: f32,
    kills: u32,
    state: RoundState,
    rng: SimpleRng,
}

impl ShooterGame {
    pub fn new(config: ShooterConfig, window: Size, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let target = Target {
            position: random_spawn(window, &mut rng),
            alive: true,
            respawn_timer: 0.0,
            heading: random_heading(&mut rng, &[-1.0, 1.0]),
        };
        Self {
            config,
            window,
            player: window.center(),
            player_velocity: Vec2::ZERO,
            facing: Direction::Up,
            target,
            player_bullets: ProjectileStore::new(),
            enemy_bullets: ProjectileStore::new(),
            fire_cooldown: 0.0,
            kills: 0,
            state: RoundState::Playing,
            rng,
        }
    }

    pub fn with_difficulty(difficulty: Difficulty, window: Size, seed: u32) -> Self {
        Self::new(ShooterConfig::for_difficulty(difficulty), window, seed)
    }

    /// Start a fresh round with the same configuration and window.
    pub fn restart(&mut self) {
        let seed = self.rng.next_u32();
        *self = Self::new(self.config, self.window, seed);
    }

    /// Reposition both actors (scripted setups and tests).
    pub fn place(&mut self, player: Vec2, target: Vec2) {
        self.player = self.window.clamp(player);
        self.target.position = target;
    }

    pub fn config(&self) -> &ShooterConfig {
        &self.config
    }

    pub fn window(&self) -> Size {
        self.window
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn player_bullets(&self) -> &ProjectileStore {
        &self.player_bullets
    }

    pub fn enemy_bullets(&self) -> &ProjectileStore {
        &self.enemy_bullets
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != RoundState::Playing
    }

    /// Fire in the facing direction from the muzzle offset.
    pub fn shoot(&mut self) {
        if self.is_over() {
            return;
        }
        let dir = self.facing.unit();
        self.player_bullets.spawn(
            self.player + dir * BULLET_OFFSET,
            dir * self.config.bullet_speed,
        );
    }

    /// Fire toward a point. A point on the player itself fires nothing.
    pub fn shoot_at(&mut self, point: Vec2) -> bool {
        if self.is_over() {
            return false;
        }
        let dir = (point - self.player).normalized_or_zero();
        if dir == Vec2::ZERO {
            return false;
        }
        self.player_bullets
            .spawn(self.player, dir * self.config.bullet_speed);
        true
    }

    /// Keep player and target at the same relative spot in a new window.
    pub fn on_resize(&mut self, window: Size) {
        if window == self.window {
            return;
        }
        self.player = window.clamp(rescale(self.player, self.window, window));
        self.target.position = rescale(self.target.position, self.window, window);
        self.window = window;
    }

    /// Advance one frame. `movement` holds per-axis input in `-1..=1`.
    pub fn tick(&mut self, ctx: &FrameContext, movement: Vec2) -> RoundState {
        if ctx.window != self.window {
            self.on_resize(ctx.window);
        }
        if self.is_over() {
            return self.state;
        }
        let dt = ctx.dt;

        self.move_player(movement, dt);
        if self.target.alive {
            self.move_target(dt);
            self.enemy_fire(dt);
        }

        let (w, h) = (self.window.width as f32, self.window.height as f32);
        self.player_bullets.advance(dt);
        self.enemy_bullets.advance(dt);
        self.player_bullets.prune_out_of_bounds(w, h);
        self.enemy_bullets.prune_out_of_bounds(w, h);

        self.resolve_hits();
        if self.is_over() {
            return self.state;
        }

        if !self.target.alive {
            self.target.respawn_timer += dt;
            if self.target.respawn_timer >= self.config.respawn_secs {
                self.target.position = random_spawn(self.window, &mut self.rng);
                self.target.alive = true;
                self.target.respawn_timer = 0.0;
            }
        }
        self.state
    }

    fn move_player(&mut self, movement: Vec2, dt: f32) {
        self.player_velocity = movement * PLAYER_SPEED;
        self.player = self.window.clamp(self.player + self.player_velocity * dt);

        // Horizontal input wins over vertical when both are held.
        if movement.x > 0.0 {
            self.facing = Direction::Right;
        } else if movement.x < 0.0 {
            self.facing = Direction::Left;
        } else if movement.y > 0.0 {
            self.facing = Direction::Down;
        } else if movement.y < 0.0 {
            self.facing = Direction::Up;
        }
    }

    fn move_target(&mut self, dt: f32) {
        let w = self.window.width as f32;
        let h = self.window.height as f32;
        match self.config.target {
            TargetBehavior::Stationary => {}
            TargetBehavior::Dodge { radius, speed } => {
                let mut dodge = Vec2::ZERO;
                for (_, b) in self.player_bullets.iter() {
                    let away = self.target.position - b.position;
                    let dist = away.length();
                    if dist < radius && dist > 0.0 {
                        dodge += away * (1.0 / dist) * ((radius - dist) / radius);
                    }
                }
                let mut dir = dodge.normalized_or_zero();
                dir.x += self.rng.next_f32_range(-DODGE_JITTER, DODGE_JITTER);
                dir.y += self.rng.next_f32_range(-DODGE_JITTER, DODGE_JITTER);

                let p = self.target.position + dir * (speed * dt);
                self.target.position = Vec2::new(
                    clamp_axis(p.x, TARGET_EDGE_MARGIN, w - TARGET_EDGE_MARGIN),
                    clamp_axis(p.y, TARGET_EDGE_MARGIN, h - TARGET_EDGE_MARGIN),
                );
            }
            TargetBehavior::Wander { radius, speed } => {
                let t = &mut self.target;
                t.position += t.heading * (speed * dt);

                let r = self.config.hit_radius;
                if t.position.x < r {
                    t.position.x = r;
                    t.heading.x = t.heading.x.abs();
                } else if t.position.x > w - r {
                    t.position.x = w - r;
                    t.heading.x = -t.heading.x.abs();
                }
                if t.position.y < r {
                    t.position.y = r;
                    t.heading.y = t.heading.y.abs();
                } else if t.position.y > h - r {
                    t.position.y = h - r;
                    t.heading.y = -t.heading.y.abs();
                }

                if self.rng.chance(WANDER_TURN_CHANCE) {
                    self.target.heading = random_heading(&mut self.rng, &[-1.0, 0.0, 1.0]);
                }

                // Last bullet in range decides the dodge heading.
                let pos = self.target.position;
                for (_, b) in self.player_bullets.iter() {
                    if b.position.distance(pos) < radius {
                        self.target.heading = Vec2::new(
                            if b.position.x < pos.x { 1.0 } else { -1.0 },
                            if b.position.y < pos.y { 1.0 } else { -1.0 },
                        );
                    }
                }
            }
        }
    }

    fn enemy_fire(&mut self, dt: f32) {
        let interval = match self.config.fire {
            EnemyFire::None => return,
            EnemyFire::Aimed { interval } | EnemyFire::PredictiveAndRandom { interval } => interval,
        };
        self.fire_cooldown += dt;
        if self.fire_cooldown < interval {
            return;
        }
        self.fire_cooldown = 0.0;

        let origin = self.target.position;
        let speed = self.config.enemy_bullet_speed;
        match self.config.fire {
            EnemyFire::Aimed { .. } => {
                let dir = (self.player - origin).normalized_or_zero();
                self.enemy_bullets.spawn(origin, dir * speed);
            }
            EnemyFire::PredictiveAndRandom { .. } => {
                let predicted = self.player + self.player_velocity * PREDICTION_LEAD_SECS;
                let dir = (predicted - origin).normalized_or_zero();
                self.enemy_bullets.spawn(origin, dir * speed);

                let angle = self.rng.next_f32_range(0.0, std::f32::consts::TAU);
                self.enemy_bullets
                    .spawn(origin, Vec2::from_angle(angle) * speed);
            }
            EnemyFire::None => {}
        }
    }

    fn resolve_hits(&mut self) {
        let radius = self.config.hit_radius;

        if self.target.alive {
            let hits = self.player_bullets.hits_on(self.target.position, radius);
            if !hits.is_empty() {
                for id in hits {
                    self.player_bullets.remove(id);
                }
                self.kills += 1;
                self.target.alive = false;
                self.target.respawn_timer = 0.0;
                if self.kills >= self.config.kills_to_win {
                    self.state = RoundState::Won;
                    return;
                }
            }
        }

        let hits = self.enemy_bullets.hits_on(self.player, radius);
        if !hits.is_empty() {
            for id in hits {
                self.enemy_bullets.remove(id);
            }
            self.state = RoundState::Lost;
        }
    }
}

fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    if hi < lo {
        return lo;
    }
    v.clamp(lo, hi)
}

fn random_spawn(window: Size, rng: &mut SimpleRng) -> Vec2 {
    let x = rng.next_between(RESPAWN_MARGIN, window.width as i32 - RESPAWN_MARGIN);
    let y = rng.next_between(RESPAWN_MARGIN, window.height as i32 - RESPAWN_MARGIN);
    Vec2::new(x as f32, y as f32)
}

fn random_heading(rng: &mut SimpleRng, choices: &[f32]) -> Vec2 {
    let x = rng.choose(choices).copied().unwrap_or(0.0);
    let y = rng.choose(choices).copied().unwrap_or(0.0);
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(dt: f32) -> FrameContext {
        FrameContext::new(Size::new(1280, 720), dt)
    }

    #[test]
    fn configs_follow_difficulty_table() {
        let easy = ShooterConfig::for_difficulty(Difficulty::Easy);
        assert_eq!(easy.bullet_speed, 700.0);
        assert_eq!(easy.fire, EnemyFire::None);
        assert_eq!(easy.target, TargetBehavior::Stationary);

        let medium = ShooterConfig::for_difficulty(Difficulty::Medium);
        assert_eq!(medium.bullet_speed, 600.0);
        assert_eq!(medium.fire, EnemyFire::Aimed { interval: 1.0 });

        let hard = ShooterConfig::for_difficulty(Difficulty::Hard);
        assert_eq!(hard.fire, EnemyFire::PredictiveAndRandom { interval: 0.5 });
    }

    #[test]
    fn spawn_keeps_away_from_edges() {
        for seed in 1..50 {
            let game = ShooterGame::with_difficulty(Difficulty::Easy, Size::new(1280, 720), seed);
            let p = game.target().position;
            assert!(p.x >= 100.0 && p.x <= 1180.0);
            assert!(p.y >= 100.0 && p.y <= 620.0);
        }
    }

    #[test]
    fn keyboard_shot_uses_facing_and_offset() {
        let mut game = ShooterGame::with_difficulty(Difficulty::Easy, Size::new(1280, 720), 1);
        game.tick(&ctx(0.0), Vec2::new(-1.0, 0.0));
        assert_eq!(game.facing(), Direction::Left);

        game.shoot();
        let (_, b) = game.player_bullets().iter().next().unwrap();
        assert_eq!(b.position, Vec2::new(600.0, 360.0));
        assert_eq!(b.velocity, Vec2::new(-700.0, 0.0));
    }

    #[test]
    fn click_on_player_spawns_nothing() {
        let mut game = ShooterGame::with_difficulty(Difficulty::Medium, Size::new(1280, 720), 1);
        assert!(!game.shoot_at(game.player()));
        assert!(game.player_bullets().is_empty());

        assert!(game.shoot_at(Vec2::new(640.0, 0.0)));
        let (_, b) = game.player_bullets().iter().next().unwrap();
        assert_eq!(b.velocity, Vec2::new(0.0, -600.0));
    }

    #[test]
    fn hit_consumes_bullet_and_respawns_target() {
        let mut game = ShooterGame::with_difficulty(Difficulty::Easy, Size::new(1280, 720), 5);
        game.place(Vec2::new(640.0, 600.0), Vec2::new(640.0, 300.0));
        game.shoot_at(Vec2::new(640.0, 300.0));

        let mut ticks = 0;
        while game.kills() == 0 && ticks < 100 {
            game.tick(&ctx(0.016), Vec2::ZERO);
            ticks += 1;
        }
        assert_eq!(game.kills(), 1);
        assert!(!game.target().alive);
        assert!(game.player_bullets().is_empty());

        for _ in 0..40 {
            game.tick(&ctx(0.016), Vec2::ZERO);
        }
        assert!(game.target().alive);
        assert_eq!(game.state(), RoundState::Playing);
    }

    #[test]
    fn enough_kills_win_the_round() {
        let mut game = ShooterGame::with_difficulty(Difficulty::Easy, Size::new(1280, 720), 5);
        for _ in 0..3 {
            let target = game.target().position;
            game.place(target + Vec2::new(0.0, 120.0), target);
            game.shoot_at(target);
            for _ in 0..60 {
                game.tick(&ctx(0.016), Vec2::ZERO);
            }
        }
        assert_eq!(game.kills(), 3);
        assert_eq!(game.state(), RoundState::Won);

        game.shoot();
        assert!(game.player_bullets().is_empty());
    }

    #[test]
    fn medium_fires_once_per_second() {
        let mut game = ShooterGame::with_difficulty(Difficulty::Medium, Size::new(1280, 720), 2);
        game.place(Vec2::new(100.0, 100.0), Vec2::new(1100.0, 600.0));
        for _ in 0..3 {
            game.tick(&ctx(0.25), Vec2::ZERO);
        }
        assert!(game.enemy_bullets().is_empty());
        game.tick(&ctx(0.25), Vec2::ZERO);
        assert_eq!(game.enemy_bullets().len(), 1);
        assert_eq!(game.state(), RoundState::Playing);
    }

    #[test]
    fn hard_fires_two_bullets_per_volley() {
        let mut game = ShooterGame::with_difficulty(Difficulty::Hard, Size::new(1280, 720), 3);
        game.place(Vec2::new(100.0, 100.0), Vec2::new(1100.0, 600.0));
        game.tick(&ctx(0.25), Vec2::ZERO);
        assert!(game.enemy_bullets().is_empty());
        game.tick(&ctx(0.25), Vec2::ZERO);
        // The random shot may already have left the playfield near the edge.
        assert!(game.enemy_bullets().len() >= 1);
    }

    #[test]
    fn enemy_hit_ends_round() {
        let mut game = ShooterGame::with_difficulty(Difficulty::Medium, Size::new(1280, 720), 4);
        game.place(Vec2::new(640.0, 360.0), Vec2::new(640.0, 200.0));
        let mut ticks = 0;
        while !game.is_over() && ticks < 200 {
            game.tick(&ctx(0.016), Vec2::ZERO);
            ticks += 1;
        }
        assert_eq!(game.state(), RoundState::Lost);
        let frozen = game.player();
        game.tick(&ctx(0.016), Vec2::new(1.0, 0.0));
        assert_eq!(game.player(), frozen);
    }

    #[test]
    fn medium_target_moves_away_from_bullet() {
        let mut game = ShooterGame::with_difficulty(Difficulty::Medium, Size::new(1280, 720), 6);
        game.place(Vec2::new(640.0, 700.0), Vec2::new(640.0, 300.0));
        game.shoot_at(Vec2::new(640.0, 0.0));
        // Bring the bullet within dodge range.
        for _ in 0..30 {
            game.tick(&ctx(0.016), Vec2::ZERO);
        }
        assert!(game.target().position.y < 300.0);
    }

    #[test]
    fn player_is_clamped_to_window() {
        let mut game = ShooterGame::with_difficulty(Difficulty::Easy, Size::new(1280, 720), 1);
        for _ in 0..300 {
            game.tick(&ctx(0.05), Vec2::new(-1.0, -1.0));
        }
        assert_eq!(game.player(), Vec2::ZERO);
    }

    #[test]
    fn resize_keeps_relative_positions() {
        let mut game = ShooterGame::with_difficulty(Difficulty::Easy, Size::new(1280, 720), 1);
        game.place(Vec2::new(320.0, 180.0), Vec2::new(960.0, 540.0));
        game.on_resize(Size::new(640, 360));
        assert_eq!(game.player(), Vec2::new(160.0, 90.0));
        assert_eq!(game.target().position, Vec2::new(480.0, 270.0));
        assert_eq!(game.window(), Size::new(640, 360));
    }
}
