//! DecodeView: the Alien Code Breaker screen.

use crate::core::DecodeGame;
use crate::fb::{wrap_text, CellStyle, FrameBuffer};
use crate::theme;
use crate::viewport::Viewport;

pub const DECODE_TITLE: &str = "ALIEN CODE BREAKER";
pub const DECODE_HINT: &str = "a rotate forward  d rotate back  r reset dial  Esc leave";

pub fn render_decode_into(game: &DecodeGame, viewport: Viewport, fb: &mut FrameBuffer) {
    theme::paint_starfield(fb, viewport);
    let sky = CellStyle::new(theme::TEXT, theme::SPACE);

    fb.put_str_centered(1, DECODE_TITLE, CellStyle::new(theme::ACCENT, theme::SPACE).bold());
    fb.put_str_centered(3, "Turn the dial until the transmission makes sense.", sky);

    let w = viewport.width.saturating_mul(4) / 5;
    let inner = w.saturating_sub(4);
    let x = viewport.width.saturating_sub(w) / 2;

    let mut y = 5;
    y = text_panel(fb, x, y, w, inner, "Encrypted Transmission", game.cipher_text()) + 1;
    y = text_panel(fb, x, y, w, inner, "Your Decoded Guess", &game.decoded()) + 1;

    let status = match game.last_move() {
        Some(step) => format!("Dial {}   (last move {})", game.dial(), step),
        None => format!("Dial {}", game.dial()),
    };
    fb.put_str_centered(y, &status, sky);

    if game.is_won() {
        let banner = CellStyle::new(theme::TARGET_ALIVE, theme::SPACE).bold();
        fb.put_str_centered(y + 2, "ACCESS GRANTED! Transmission decoded.", banner);
        fb.put_str_centered(y + 3, "Press n for a new transmission", sky);
    }

    theme::hint_bar(fb, viewport, DECODE_HINT);
}

pub fn render_decode(game: &DecodeGame, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    render_decode_into(game, viewport, &mut fb);
    fb
}

/// Titled panel around wrapped text; returns the row after the panel.
fn text_panel(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, inner: u16, title: &str, body: &str) -> u16 {
    let lines = wrap_text(body, inner);
    let h = lines.len().max(1) as u16 + 3;
    theme::panel(fb, x, y, w, h);
    fb.put_str(x + 2, y + 1, title, theme::heading());
    for (i, line) in lines.iter().enumerate() {
        fb.put_str(x + 2, y + 2 + i as u16, line, theme::text());
    }
    y + h
}
