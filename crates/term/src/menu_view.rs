//! Menus and the planet picker.

use crate::core::menu::{PLANET_BOX_RATIO, PLANET_PROMPT};
use crate::core::{Menu, PlanetSelect, WorldId};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::theme;
use crate::viewport::Viewport;

pub const MENU_HINT: &str = "Up/Down select  Enter confirm  q quit";
pub const PLANET_HINT: &str = "1-4 or click a planet  Arrows + Enter  Esc back";

/// Full-screen main menu on a starfield.
pub fn render_main_menu_into(menu: &Menu, viewport: Viewport, fb: &mut FrameBuffer) {
    theme::paint_starfield(fb, viewport);
    let title_y = viewport.height / 3;
    let title_style = CellStyle::new(theme::ACCENT, theme::SPACE).bold();
    fb.put_str_centered(title_y, menu.title(), title_style);

    let items_y = title_y + 3;
    draw_items(menu, fb, items_y, theme::SPACE);
    theme::hint_bar(fb, viewport, MENU_HINT);
}

/// Pause menu panel drawn over the current scene.
pub fn render_pause_menu_into(menu: &Menu, viewport: Viewport, fb: &mut FrameBuffer) {
    let widest = menu
        .items()
        .iter()
        .map(|i| i.label().chars().count())
        .max()
        .unwrap_or(0) as u16;
    let w = (widest + 10).min(viewport.width);
    let h = menu.items().len() as u16 + 5;
    let x = viewport.width.saturating_sub(w) / 2;
    let y = viewport.height.saturating_sub(h) / 2;

    theme::panel(fb, x, y, w, h);
    fb.put_str_centered(y + 1, menu.title(), theme::heading());
    draw_items(menu, fb, y + 3, theme::PANEL);
}

fn draw_items(menu: &Menu, fb: &mut FrameBuffer, y: u16, bg: Rgb) {
    for (i, item) in menu.items().iter().enumerate() {
        let label = format!(" {}. {} ", i + 1, item.label());
        let style = if i == menu.selected() {
            theme::highlight()
        } else {
            CellStyle::new(theme::TEXT, bg)
        };
        fb.put_str_centered(y + i as u16, &label, style);
    }
}

pub fn planet_color(world: WorldId) -> Rgb {
    match world {
        WorldId::World1 => Rgb::new(196, 140, 70),
        WorldId::World2 => Rgb::new(120, 120, 140),
        WorldId::World3 => Rgb::new(60, 170, 200),
        WorldId::World4 => Rgb::new(200, 60, 90),
    }
}

/// Planet picker: hotspots on a starfield plus the bottom prompt box.
pub fn render_planets_into(select: &PlanetSelect, viewport: Viewport, fb: &mut FrameBuffer) {
    theme::paint_starfield(fb, viewport);

    for (i, entry) in select.layout().iter().enumerate() {
        let radius = entry.radius.unwrap_or(0.0);
        viewport.paint_disc(fb, entry.position, radius, planet_color(entry.item));
        if let Some(digit) = char::from_digit(i as u32 + 1, 10) {
            viewport.put_glyph(fb, entry.position, digit, theme::TEXT);
        }
        if let Some((col, row)) = viewport.to_cell(entry.position) {
            let name = entry.item.display_name();
            let label_row = row + (radius / crate::types::CELL_PX_H as f32) as u16 + 1;
            let label_col = col.saturating_sub(name.chars().count() as u16 / 2);
            let style = if i == select.selected() {
                CellStyle::new(theme::PANEL, theme::ACCENT).bold()
            } else {
                CellStyle::new(theme::TEXT, theme::SPACE)
            };
            fb.put_str(label_col, label_row, name, style);
        }
    }

    let box_h = ((viewport.height as f32 * PLANET_BOX_RATIO).round() as u16).max(3);
    let box_y = viewport.height.saturating_sub(box_h);
    theme::panel(fb, 0, box_y, viewport.width, box_h);
    fb.put_str_centered(box_y + 1, PLANET_PROMPT, theme::heading());
    if box_h > 3 {
        fb.put_str_centered(box_y + box_h - 2, PLANET_HINT, theme::muted());
    }
}

pub fn render_planets(select: &PlanetSelect, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    render_planets_into(select, viewport, &mut fb);
    fb
}
