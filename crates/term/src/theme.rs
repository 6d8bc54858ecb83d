//! Colours and shared panel styles.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::viewport::Viewport;

pub const SPACE: Rgb = Rgb::new(8, 8, 20);
pub const STAR: Rgb = Rgb::new(150, 150, 180);
pub const FIELD: Rgb = Rgb::new(18, 18, 30);
pub const MAP_PLACEHOLDER: Rgb = Rgb::new(40, 30, 20);
pub const TEXT: Rgb = Rgb::new(230, 230, 230);
pub const MUTED: Rgb = Rgb::new(140, 140, 150);
pub const ACCENT: Rgb = Rgb::new(255, 215, 0);
pub const PANEL: Rgb = Rgb::new(20, 20, 34);
pub const PANEL_BORDER: Rgb = Rgb::new(190, 190, 200);

pub const PLAYER: Rgb = Rgb::new(200, 40, 40);
pub const SHOOTER_PLAYER: Rgb = Rgb::new(139, 69, 19);
pub const EASY_PLAYER: Rgb = Rgb::new(40, 90, 220);
pub const TARGET_ALIVE: Rgb = Rgb::new(40, 190, 60);
pub const TARGET_DOWN: Rgb = Rgb::new(200, 40, 40);
pub const PLAYER_BULLET: Rgb = Rgb::new(255, 230, 60);
pub const ENEMY_BULLET: Rgb = Rgb::new(255, 70, 70);

pub const MARKER_OPEN: Rgb = Rgb::new(0, 200, 200);
pub const MARKER_DONE: Rgb = Rgb::new(100, 100, 100);

pub fn text() -> CellStyle {
    CellStyle::new(TEXT, PANEL)
}

pub fn muted() -> CellStyle {
    CellStyle::new(MUTED, PANEL)
}

pub fn heading() -> CellStyle {
    CellStyle::new(ACCENT, PANEL).bold()
}

pub fn highlight() -> CellStyle {
    CellStyle::new(PANEL, ACCENT).bold()
}

pub fn border() -> CellStyle {
    CellStyle::new(PANEL_BORDER, PANEL)
}

/// Bordered text panel.
pub fn panel(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    fb.draw_panel(x, y, w, h, text(), border());
}

/// Dark sky with a fixed scatter of stars.
pub fn paint_starfield(fb: &mut FrameBuffer, viewport: Viewport) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::new(STAR, SPACE).into_cell(' '));
    for row in 0..viewport.height {
        for col in 0..viewport.width {
            let h = (col as u32)
                .wrapping_mul(73_856_093)
                ^ (row as u32).wrapping_mul(19_349_663);
            if h % 37 == 0 {
                let ch = if h % 3 == 0 { '*' } else { '.' };
                fb.put_char(col, row, ch, CellStyle::new(STAR, SPACE));
            }
        }
    }
}

/// One-line hint on the bottom row.
pub fn hint_bar(fb: &mut FrameBuffer, viewport: Viewport, hint: &str) {
    if viewport.height == 0 {
        return;
    }
    let y = viewport.height - 1;
    fb.fill_rect(0, y, viewport.width, 1, ' ', muted());
    fb.put_str(1, y, hint, muted());
}
