//! Director state into a framebuffer.

use crate::director::{Director, Scene};
use crate::term::{
    render_decode_into, render_dialogue_into, render_main_menu_into, render_map_into,
    render_pause_menu_into, render_planets_into, render_shooter_into, theme, FrameBuffer,
    Viewport,
};

pub fn render_into(director: &Director, viewport: Viewport, fb: &mut FrameBuffer) {
    match director.scene() {
        Scene::MainMenu(menu) => render_main_menu_into(menu, viewport, fb),
        Scene::Planets(select) => render_planets_into(select, viewport, fb),
        Scene::Map => draw_map(director, director.notice(), viewport, fb),
        Scene::Pause(menu) => {
            draw_map(director, None, viewport, fb);
            render_pause_menu_into(menu, viewport, fb);
        }
        Scene::Dialogue { session, .. } => {
            draw_map(director, None, viewport, fb);
            render_dialogue_into(session, viewport, fb);
        }
        Scene::Shooter { game, .. } => render_shooter_into(game, viewport, fb),
        Scene::Decode { game, .. } => render_decode_into(game, viewport, fb),
    }
}

pub fn render(director: &Director, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    render_into(director, viewport, &mut fb);
    fb
}

fn draw_map(director: &Director, notice: Option<&str>, viewport: Viewport, fb: &mut FrameBuffer) {
    match director.map() {
        Some(state) => render_map_into(&state.map, &state.backdrop, notice, viewport, fb),
        None => theme::paint_starfield(fb, viewport),
    }
}
