//! Whole-frame drawing

use super::{DrawSurface, TextAlign};
use crate::consts::{GROUND_THICKNESS, SCORE_TEXT_POS};
use crate::sim::GameState;

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const RESTART_HINT_TEXT: &str = "PRESS SPACEBAR TO RESTART";

/// Draw one frame of the game. Reads the state, never changes it.
pub fn render_scene(state: &GameState, surface: &mut dyn DrawSurface) {
    let width = state.config.canvas_width;
    let height = state.config.canvas_height;

    surface.clear_rect(0.0, 0.0, width, height);

    // Leaves the inverse shade active for everything below
    state.background.draw(surface);

    surface.fill_rect(0.0, state.ground_y(), width, GROUND_THICKNESS);
    surface.fill_text(
        &format!("score: {}", state.score),
        SCORE_TEXT_POS.0,
        SCORE_TEXT_POS.1,
        TextAlign::Left,
    );

    state.player.draw(&state.config.player.image_sources, surface);
    state.spawner.draw(surface);

    if state.game_over {
        let cx = width / 2.0;
        let cy = height / 2.0;
        surface.fill_text(GAME_OVER_TEXT, cx, cy + 5.0, TextAlign::Center);
        surface.fill_text(RESTART_HINT_TEXT, cx, cy - 5.0, TextAlign::Center);
    }
}
