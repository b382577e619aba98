pub mod flappy_scene;
pub mod game_common;
pub mod responsive;

use crate::assets::{Assets, Theme};
use crate::game::Game;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &Game, assets: &Assets, theme: Theme) {
    let size = frame.size();
    if !responsive::fits(size.width, size.height) {
        responsive::render_too_small(frame);
        return;
    }
    flappy_scene::render_flappy(frame, size, game, assets, theme);
}
