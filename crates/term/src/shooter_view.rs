//! ShooterView: the shoot-'em-up arena.
//!
//! Pure mapping from a [`ShooterGame`] into a framebuffer.

use crate::core::{RoundState, ShooterGame};
use crate::fb::{CellStyle, FrameBuffer};
use crate::theme;
use crate::types::{Difficulty, Direction, HIT_RADIUS, PLAYER_RADIUS};
use crate::viewport::Viewport;

pub const SHOOTER_HINT: &str = "WASD move  Space shoot  Click aim  r restart  Esc leave";

/// Render the arena into an existing framebuffer.
pub fn render_shooter_into(game: &ShooterGame, viewport: Viewport, fb: &mut FrameBuffer) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::new(theme::TEXT, theme::FIELD).into_cell(' '));

    let target = game.target();
    let target_color = if target.alive {
        theme::TARGET_ALIVE
    } else {
        theme::TARGET_DOWN
    };
    viewport.paint_disc(fb, target.position, HIT_RADIUS, target_color);

    let (player_color, player_radius) = match game.config().difficulty {
        Difficulty::Easy => (theme::EASY_PLAYER, PLAYER_RADIUS),
        _ => (theme::SHOOTER_PLAYER, HIT_RADIUS),
    };
    viewport.paint_disc(fb, game.player(), player_radius, player_color);
    viewport.put_glyph(fb, game.player(), facing_glyph(game.facing()), theme::TEXT);

    for (_, bullet) in game.player_bullets().iter() {
        viewport.put_glyph(fb, bullet.position, '•', theme::PLAYER_BULLET);
    }
    for (_, bullet) in game.enemy_bullets().iter() {
        viewport.put_glyph(fb, bullet.position, '*', theme::ENEMY_BULLET);
    }

    draw_hud(game, viewport, fb);

    match game.state() {
        RoundState::Playing => {}
        RoundState::Won => draw_banner(fb, viewport, "YOU WIN!", "r: play again   Esc: leave"),
        RoundState::Lost => draw_banner(fb, viewport, "YOU GOT HIT", "r: try again   Esc: leave"),
    }
}

/// Convenience helper that allocates a new framebuffer.
pub fn render_shooter(game: &ShooterGame, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    render_shooter_into(game, viewport, &mut fb);
    fb
}

pub fn facing_glyph(dir: Direction) -> char {
    match dir {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

fn draw_hud(game: &ShooterGame, viewport: Viewport, fb: &mut FrameBuffer) {
    let style = CellStyle::new(theme::ACCENT, theme::FIELD).bold();
    fb.put_str(1, 0, "SHOOTER", style);
    fb.put_str(9, 0, game.config().difficulty.as_str(), style);

    let label = CellStyle::new(theme::TEXT, theme::FIELD);
    let x = viewport.width.saturating_sub(14);
    fb.put_str(x, 0, "Kills", label);
    fb.put_u32(x + 6, 0, game.kills(), label);
    let kills_w = game.kills().to_string().len() as u16;
    fb.put_char(x + 6 + kills_w, 0, '/', label);
    fb.put_u32(x + 7 + kills_w, 0, game.config().kills_to_win, label);

    theme::hint_bar(fb, viewport, SHOOTER_HINT);
}

fn draw_banner(fb: &mut FrameBuffer, viewport: Viewport, title: &str, hint: &str) {
    let w = (hint.chars().count() as u16 + 6).min(viewport.width);
    let h = 5;
    let x = viewport.width.saturating_sub(w) / 2;
    let y = viewport.height.saturating_sub(h) / 2;
    theme::panel(fb, x, y, w, h);
    fb.put_str_centered(y + 1, title, theme::heading());
    fb.put_str_centered(y + 3, hint, theme::text());
}

