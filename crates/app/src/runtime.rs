//! Terminal event loop.
//!
//! Render, poll input until the next tick, then advance the director by the
//! real elapsed time. Everything runs on one thread.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::config::AppConfig;
use crate::director::Director;
use crate::input::{click_position, handle_key_event, should_quit, HeldKeys};
use crate::render::render_into;
use crate::term::{FrameBuffer, TerminalRenderer, Viewport};
use crate::types::{Difficulty, TICK_MS};

// Longest step fed to the scenes after a stall.
const MAX_FRAME_SECS: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Full,
    Shooter(Difficulty),
    Decode,
}

/// Take over the terminal, run `mode` until quit and restore the terminal.
pub fn run(config: AppConfig, mode: Mode) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let window = Viewport::new(w, h).logical_size();
    let key_release_ms = config.key_release_ms;
    let mut director = match mode {
        Mode::Full => Director::new(config, window),
        Mode::Shooter(difficulty) => Director::standalone_shooter(config, window, difficulty),
        Mode::Decode => Director::standalone_decode(config, window),
    };
    tracing::info!(
        ?mode,
        width = w,
        height = h,
        key_release_events = term.key_release_events(),
        scene = director.scene().name(),
        "session started"
    );

    let result = event_loop(&mut term, &mut director, key_release_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => tracing::info!("session ended"),
        Err(err) => tracing::error!(error = %err, "session ended with error"),
    }
    result
}

fn event_loop(term: &mut TerminalRenderer, director: &mut Director, key_release_ms: u32) -> Result<()> {
    let mut held = HeldKeys::new().with_key_release_timeout_ms(key_release_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        director.resize(viewport.logical_size());
        render_into(director, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            director.quit();
                        } else {
                            held.handle_key_press(key.code);
                            if let Some(action) = handle_key_event(key) {
                                director.handle(action);
                            }
                        }
                    }
                    KeyEventKind::Release => held.handle_key_release(key.code),
                },
                Event::Mouse(mouse) => {
                    if let Some(point) = click_position(mouse) {
                        director.click(point);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let dt = last_tick.elapsed().as_secs_f32().min(MAX_FRAME_SECS);
            last_tick = Instant::now();
            director.tick(dt, held.update());
        }

        if director.should_quit() {
            return Ok(());
        }
    }
}
