//! DialogueView: the conversation box drawn over the map.

use crate::core::{DialoguePhase, DialogueSession};
use crate::fb::{wrap_text, FrameBuffer};
use crate::theme;
use crate::viewport::Viewport;

pub const DIALOGUE_HINT: &str = "Up/Down select  Enter confirm  1-9 pick  Esc leave";

// Top of the box, in rows (130 logical px).
const BOX_TOP: u16 = 8;

/// Draw the dialogue box over whatever is already in `fb`.
pub fn render_dialogue_into(session: &DialogueSession, viewport: Viewport, fb: &mut FrameBuffer) {
    let w = viewport.width.saturating_mul(4) / 5;
    let inner = w.saturating_sub(4);
    let x = viewport.width.saturating_sub(w) / 2;

    let body = match session.phase() {
        DialoguePhase::Choosing => Body::Options,
        DialoguePhase::Followup { .. } | DialoguePhase::Finished => Body::Message,
    };

    let prompt = wrap_text(session.prompt(), inner);
    let body_rows = match body {
        Body::Options => session.options().len() as u16,
        Body::Message => wrap_text(session.message(), inner).len() as u16,
    };
    // Name, prompt, gap, body, gap, hint, plus the border.
    let h = 2 + 1 + prompt.len() as u16 + 1 + body_rows + 1 + 1;
    let y = BOX_TOP.min(viewport.height.saturating_sub(h));

    theme::panel(fb, x, y, w, h);
    let mut row = y + 1;
    fb.put_str(x + 2, row, session.character(), theme::heading());
    row += 1;
    for line in &prompt {
        fb.put_str(x + 2, row, line, theme::text());
        row += 1;
    }
    row += 1;

    match body {
        Body::Options => {
            for (i, option) in session.options().iter().enumerate() {
                let selected = i == session.selected();
                let style = if selected {
                    theme::highlight()
                } else {
                    theme::text()
                };
                let marker = if selected { '>' } else { ' ' };
                let line = format!("{} {}. {}", marker, i + 1, option.text);
                fb.put_str(x + 2, row, &truncate(&line, inner), style);
                row += 1;
            }
        }
        Body::Message => {
            row += fb.put_wrapped(x + 2, row, inner, session.message(), theme::heading());
        }
    }
    row += 1;
    fb.put_str(x + 2, row, DIALOGUE_HINT, theme::muted());
}

enum Body {
    Options,
    Message,
}

fn truncate(s: &str, w: u16) -> String {
    s.chars().take(w as usize).collect()
}
