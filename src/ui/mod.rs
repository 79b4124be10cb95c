//! Terminal rendering. Drawing reads the session and never changes it.

pub mod flappy_scene;
pub mod game_common;
pub mod play_field;

use crate::assets::Assets;
use crate::game::GameSession;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Smallest terminal the game screen fits in.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 16;

/// Draw one frame.
pub fn draw(frame: &mut Frame, session: &GameSession, assets: &Assets) {
    let area = frame.size();
    if area.width < MIN_COLS || area.height < MIN_ROWS {
        render_too_small(frame, area);
        return;
    }
    flappy_scene::render_flappy(frame, area, session, assets);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let text = format!(
        "Terminal too small ({}x{}), need {}x{}",
        area.width, area.height, MIN_COLS, MIN_ROWS
    );
    let y = area.y + area.height / 2;
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, Rect::new(area.x, y, area.width, 1.min(area.height)));
}
