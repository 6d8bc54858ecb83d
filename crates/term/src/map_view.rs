//! MapView: the explorer map with encounter markers and the avatar.

use crate::backdrop::Backdrop;
use crate::core::{AdventureMap, EncounterKind, MapMarker};
use crate::fb::{wrap_text, CellStyle, FrameBuffer, Rgb};
use crate::shooter_view::facing_glyph;
use crate::theme;
use crate::types::{Vec2, ENCOUNTER_MARKER_RADIUS, PLAYER_RADIUS};
use crate::viewport::Viewport;

pub const MAP_HINT: &str = "WASD/arrows move  Esc menu  q quit";

pub fn render_map_into(
    map: &AdventureMap,
    backdrop: &Backdrop,
    notice: Option<&str>,
    viewport: Viewport,
    fb: &mut FrameBuffer,
) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().into_cell(' '));
    backdrop.paint(fb, viewport);

    for entry in map.layout().iter() {
        let radius = entry.radius.unwrap_or(ENCOUNTER_MARKER_RADIUS);
        draw_marker(fb, viewport, &entry.item, entry.position, radius);
    }

    viewport.paint_disc(fb, map.player(), PLAYER_RADIUS, theme::PLAYER);
    viewport.put_glyph(fb, map.player(), facing_glyph(map.facing()), theme::TEXT);

    draw_title(map, viewport, fb);
    theme::hint_bar(fb, viewport, MAP_HINT);

    if let Some(text) = notice {
        draw_notice(fb, viewport, text);
    }
}

pub fn render_map(
    map: &AdventureMap,
    backdrop: &Backdrop,
    notice: Option<&str>,
    viewport: Viewport,
) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    render_map_into(map, backdrop, notice, viewport, &mut fb);
    fb
}

fn marker_color(marker: &MapMarker) -> Rgb {
    if marker.completed {
        return theme::MARKER_DONE;
    }
    match marker.encounter.kind {
        EncounterKind::Dialogue(_) => theme::MARKER_OPEN,
        EncounterKind::Combat { .. } => Rgb::new(220, 90, 40),
        EncounterKind::Minigame { .. } => Rgb::new(170, 80, 220),
        EncounterKind::Shop { .. } => Rgb::new(210, 180, 40),
    }
}

fn marker_glyph(marker: &MapMarker) -> char {
    if marker.completed {
        return '✓';
    }
    match marker.encounter.kind {
        EncounterKind::Dialogue(_) => '?',
        EncounterKind::Combat { .. } => '!',
        EncounterKind::Minigame { .. } => '*',
        EncounterKind::Shop { .. } => '$',
    }
}

fn draw_marker(fb: &mut FrameBuffer, viewport: Viewport, marker: &MapMarker, at: Vec2, radius: f32) {
    viewport.paint_disc(fb, at, radius, marker_color(marker));
    viewport.put_glyph(fb, at, marker_glyph(marker), theme::TEXT);

    // Remembered dialogue choice, 1-based.
    if let Some(choice) = marker.choice {
        let badge = at + Vec2::new(radius * 0.8, -radius * 0.8);
        if let Some(digit) = char::from_digit((choice + 1) as u32, 10) {
            if let Some((col, row)) = viewport.to_cell(badge) {
                fb.put_char(col, row, digit, CellStyle::new(theme::PANEL, theme::ACCENT).bold());
            }
        }
    }
}

fn draw_title(map: &AdventureMap, viewport: Viewport, fb: &mut FrameBuffer) {
    let style = theme::heading();
    fb.fill_rect(0, 0, viewport.width, 1, ' ', style);
    fb.put_str(1, 0, map.world().display_name(), style);

    let total = map.layout().len();
    let done = map.layout().iter().filter(|e| e.item.completed).count();
    let progress = format!("{}/{} done", done, total);
    let x = viewport.width.saturating_sub(progress.len() as u16 + 1);
    fb.put_str(x, 0, &progress, style);
}

fn draw_notice(fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
    let w = viewport.width.saturating_mul(3) / 5;
    let inner = w.saturating_sub(4);
    let lines = wrap_text(text, inner).len() as u16;
    let h = lines + 2;
    let x = viewport.width.saturating_sub(w) / 2;
    let y = viewport.height.saturating_sub(h + 3);
    theme::panel(fb, x, y, w, h);
    fb.put_wrapped(x + 2, y + 1, inner, text, theme::text());
}
