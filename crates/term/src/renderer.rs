//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and every frame after a resize) is a full redraw; the rest
//! only emit the runs of cells that changed.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{Attribute, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    key_release_events: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            key_release_events: false,
        }
    }

    /// Whether the terminal agreed to report key releases.
    ///
    /// When it did not, held movement falls back to auto-release timeouts.
    pub fn key_release_events(&self) -> bool {
        self.key_release_events
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.key_release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if self.key_release_events {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.key_release_events {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
        }
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Drop the remembered frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush `fb` to the terminal, then trade it for the previous frame.
    ///
    /// On return `fb` holds stale contents of the right size, ready to be
    /// cleared and drawn into again.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut shown = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut shown, fb);
        self.last = Some(shown);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Clear the screen and paint every cell of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::new(out);
    for y in 0..fb.height() {
        pen.paint_at(0, y, fb.row(y))?;
    }
    pen.finish()
}

/// Paint only the cells of `next` that differ from `prev`.
///
/// Frames of different sizes fall back to a full redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }
    let mut pen = Pen::new(out);
    for y in 0..next.height() {
        let row = next.row(y);
        for span in dirty_spans(prev.row(y), row) {
            pen.paint_at(span.start as u16, y, &row[span])?;
        }
    }
    pen.finish()
}

/// Writes cells while remembering the last style sent, so runs of equal
/// style cost one set of color commands.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn paint_at(&mut self, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        if cells.is_empty() {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                self.switch_to(cell.style)?;
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn switch_to(&mut self, style: CellStyle) -> Result<()> {
        // Attributes are sticky; reset before applying the new set.
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(SetColors(Colors::new(style.fg.into(), style.bg.into())))?;
        match (style.bold, style.dim) {
            (true, _) => {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            (false, true) => {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            _ => {}
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(ResetColor)?;
        Ok(())
    }
}

/// Maximal runs of column indices where the two rows disagree.
fn dirty_spans(before: &[Cell], after: &[Cell]) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = Vec::new();
    let changed = after
        .iter()
        .enumerate()
        .filter(|(i, cell)| before.get(*i) != Some(*cell))
        .map(|(i, _)| i);
    for i in changed {
        match spans.last_mut() {
            Some(span) if span.end == i => span.end = i + 1,
            _ => spans.push(i..i + 1),
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Rgb;

    fn text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn full_redraw_paints_each_row() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "HUD ", CellStyle::default());
        fb.put_str(0, 1, "@ <>", CellStyle::default());

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let drawn = text(&out);
        assert!(drawn.contains("HUD "));
        assert!(drawn.contains("@ <>"));
    }

    #[test]
    fn identical_frames_paint_nothing() {
        let mut a = FrameBuffer::new(6, 2);
        a.put_str(1, 1, "*o*", CellStyle::default());
        let b = a.clone();

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(!text(&out).contains('*'));
    }

    #[test]
    fn moved_bullet_repaints_only_two_cells() {
        let style = CellStyle::default();
        let mut a = FrameBuffer::new(8, 1);
        a.put_char(2, 0, '|', style);
        let mut b = FrameBuffer::new(8, 1);
        b.put_char(3, 0, '|', style);

        assert_eq!(dirty_spans(a.row(0), b.row(0)), vec![2..4]);
    }

    #[test]
    fn separate_changes_stay_separate_spans() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(7, 1);
        let mut b = FrameBuffer::new(7, 1);
        b.put_char(0, 0, 'x', style);
        b.put_char(4, 0, 'y', style);
        b.put_char(5, 0, 'z', style);

        assert_eq!(dirty_spans(a.row(0), b.row(0)), vec![0..1, 4..6]);
    }

    #[test]
    fn style_is_sent_once_per_run() {
        let red = CellStyle::new(Rgb::new(255, 0, 0), Rgb::new(0, 0, 0));
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", red);

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert_eq!(text(&out).matches("38;2;255;0;0").count(), 1);
    }

    #[test]
    fn resized_frame_is_redrawn_in_full() {
        let small = FrameBuffer::new(2, 1);
        let mut big = FrameBuffer::new(3, 1);
        big.put_str(0, 0, "abc", CellStyle::default());

        let mut out = Vec::new();
        encode_diff_into(&small, &big, &mut out).unwrap();
        assert!(text(&out).contains("abc"));
    }
}
