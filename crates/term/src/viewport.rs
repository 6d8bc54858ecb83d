//! Terminal viewport and the cell <-> logical pixel mapping.
//!
//! Scenes run in logical pixels; one terminal cell covers
//! `CELL_PX_W x CELL_PX_H` of them.

use crate::fb::{FrameBuffer, Rgb};
use crate::types::{Size, Vec2, CELL_PX_H, CELL_PX_W};

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Logical window size handed to the scenes.
    pub fn logical_size(&self) -> Size {
        Size::from_cells(self.width, self.height)
    }

    /// Cell containing a logical point, if it is on screen.
    pub fn to_cell(&self, point: Vec2) -> Option<(u16, u16)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / CELL_PX_W as f32) as u32;
        let row = (point.y / CELL_PX_H as f32) as u32;
        if col >= self.width as u32 || row >= self.height as u32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    pub fn cell_center(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as u32 * CELL_PX_W) as f32 + CELL_PX_W as f32 / 2.0,
            (row as u32 * CELL_PX_H) as f32 + CELL_PX_H as f32 / 2.0,
        )
    }

    /// Paint the cells whose centres fall inside a logical-pixel circle.
    ///
    /// The cell under the centre is always painted so that small shapes stay
    /// visible.
    pub fn paint_disc(&self, fb: &mut FrameBuffer, center: Vec2, radius: f32, color: Rgb) {
        let r = radius.max(0.0);
        let min = self.to_cell_clamped(center - Vec2::new(r, r));
        let max = self.to_cell_clamped(center + Vec2::new(r, r));
        for row in min.1..=max.1 {
            for col in min.0..=max.0 {
                if self.cell_center(col, row).distance(center) <= r {
                    fb.tint(col, row, color);
                }
            }
        }
        if let Some((col, row)) = self.to_cell(center) {
            fb.tint(col, row, color);
        }
    }

    /// Place a glyph at a logical point, keeping the cell background.
    pub fn put_glyph(&self, fb: &mut FrameBuffer, point: Vec2, ch: char, fg: Rgb) {
        if let Some((col, row)) = self.to_cell(point) {
            fb.overlay_char(col, row, ch, fg, true);
        }
    }

    fn to_cell_clamped(&self, point: Vec2) -> (u16, u16) {
        let max_col = self.width.saturating_sub(1) as f32;
        let max_row = self.height.saturating_sub(1) as f32;
        let col = (point.x / CELL_PX_W as f32).clamp(0.0, max_col);
        let row = (point.y / CELL_PX_H as f32).clamp(0.0, max_row);
        (col as u16, row as u16)
    }
}
