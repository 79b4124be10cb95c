//! Rasterizes the world (background, pipes, ground, bird) into terminal
//! cells.
//!
//! Each terminal cell shows whatever lies under its center point in world
//! coordinates, so the 450×712 field scales to any terminal size.

use crate::assets::{Assets, Sprite, SKY_COLOR};
use crate::game::{GameSession, PipePair};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Largest area inside `area` with the world's aspect ratio, centered.
pub fn fit_field(area: Rect, world_width: f64, world_height: f64) -> Rect {
    if area.width == 0 || area.height == 0 || world_width <= 0.0 || world_height <= 0.0 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    let cols_per_row = world_width / world_height * CELL_ASPECT;
    let mut height = area.height;
    let mut width = (f64::from(height) * cols_per_row).round() as u16;
    if width > area.width {
        width = area.width;
        height = ((f64::from(width) / cols_per_row).round() as u16).clamp(1, area.height);
    }
    let width = width.max(1);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Maps between terminal cells of a field area and world coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FieldView {
    pub area: Rect,
    pub world_width: f64,
    pub world_height: f64,
}

impl FieldView {
    pub fn new(area: Rect, world_width: f64, world_height: f64) -> Self {
        Self {
            area,
            world_width,
            world_height,
        }
    }

    /// World point under the center of cell (`col`, `row`), relative to the area.
    pub fn world_point(&self, col: u16, row: u16) -> (f64, f64) {
        let x = (f64::from(col) + 0.5) * self.world_width / f64::from(self.area.width);
        let y = (f64::from(row) + 0.5) * self.world_height / f64::from(self.area.height);
        (x, y)
    }

    /// Absolute terminal row showing world y.
    pub fn row_for(&self, world_y: f64) -> i32 {
        let row = world_y / self.world_height * f64::from(self.area.height);
        i32::from(self.area.y) + row.floor() as i32
    }
}

/// What one terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldCell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
}

impl FieldCell {
    fn sky() -> Self {
        Self {
            symbol: ' ',
            fg: SKY_COLOR,
            bg: SKY_COLOR,
        }
    }

    fn sprite(symbol: char, sprite: &Sprite) -> Self {
        Self {
            symbol,
            fg: sprite.color,
            bg: SKY_COLOR,
        }
    }
}

/// Resolve the cell at world point (`x`, `y`). Drawing order, back to
/// front: background, pipes, ground, bird.
pub fn cell_at(session: &GameSession, assets: &Assets, x: f64, y: f64) -> FieldCell {
    if let Some(c) = sample_bird(session, &assets.bird, x, y) {
        return FieldCell::sprite(c, &assets.bird);
    }
    if y >= session.ground.y {
        return ground_cell(session, &assets.ground, x, y);
    }
    for pair in &session.pipes {
        if let Some(c) = sample_pipe(pair, &assets.pipe, x, y) {
            return FieldCell::sprite(c, &assets.pipe);
        }
    }
    if let Some(background) = &assets.background {
        let u = x / session.config.screen_width;
        let v = y / session.config.screen_height;
        if let Some(c) = background.sample(u, v) {
            return FieldCell::sprite(c, background);
        }
    }
    FieldCell::sky()
}

/// Sample the rotated bird sprite.
fn sample_bird(session: &GameSession, sprite: &Sprite, x: f64, y: f64) -> Option<char> {
    let bird = &session.bird;
    if !bird.rect().contains(x, y) {
        return None;
    }
    let (sin, cos) = bird.rotation.to_radians().sin_cos();
    let (dx, dy) = (x - bird.x, y - bird.y);
    // Undo the counter-clockwise tilt to land in unrotated sprite space.
    let sx = dx * cos - dy * sin;
    let sy = dx * sin + dy * cos;
    sprite.sample(sx / sprite.width + 0.5, sy / sprite.height + 0.5)
}

/// Sample a pipe pair. The top segment shows the tile flipped, so both
/// segments put the tile's first row at the gap.
fn sample_pipe(pair: &PipePair, sprite: &Sprite, x: f64, y: f64) -> Option<char> {
    let top = pair.top_rect();
    let bottom = pair.bottom_rect();
    let u = (x - pair.x) / pair.width;
    let tile = sprite.height.max(1.0);
    if top.contains(x, y) {
        let from_gap = (pair.top_height - y).rem_euclid(tile);
        sprite.sample(u, from_gap / tile)
    } else if bottom.contains(x, y) {
        let from_gap = (y - pair.bottom_y()).rem_euclid(tile);
        sprite.sample(u, from_gap / tile)
    } else {
        None
    }
}

fn ground_cell(session: &GameSession, sprite: &Sprite, x: f64, y: f64) -> FieldCell {
    let ground = &session.ground;
    let depth = session.config.screen_height - ground.y;
    let v = if depth > 0.0 { (y - ground.y) / depth } else { 0.0 };
    let symbol = ground
        .offsets
        .iter()
        .find(|&&left| x >= left && x < left + ground.segment_width)
        .and_then(|&left| sprite.sample((x - left) / ground.segment_width, v))
        .unwrap_or(' ');
    FieldCell {
        symbol,
        fg: sprite.color,
        bg: darken(sprite.color),
    }
}

fn darken(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(r / 2, g / 2, b / 2),
        other => other,
    }
}

/// Build the field's lines, one span per cell.
pub fn render_lines(
    session: &GameSession,
    assets: &Assets,
    view: &FieldView,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(view.area.height as usize);
    for row in 0..view.area.height {
        let mut spans = Vec::with_capacity(view.area.width as usize);
        for col in 0..view.area.width {
            let (x, y) = view.world_point(col, row);
            let cell = cell_at(session, assets, x, y);
            spans.push(Span::styled(
                cell.symbol.to_string(),
                Style::default().fg(cell.fg).bg(cell.bg),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn session_and_assets() -> (GameSession, Assets) {
        let config = GameConfig::default();
        let assets = Assets::placeholders(&config);
        (GameSession::new(config), assets)
    }

    #[test]
    fn test_fit_field_keeps_aspect_and_centers() {
        let field = fit_field(Rect::new(0, 0, 100, 40), 450.0, 712.0);
        assert_eq!(field.height, 40);
        assert_eq!(field.width, 51);
        assert_eq!(field.x, 24);

        let narrow = fit_field(Rect::new(0, 0, 20, 40), 450.0, 712.0);
        assert_eq!(narrow.width, 20);
        assert!(narrow.height < 40);
    }

    #[test]
    fn test_world_point_maps_cell_centers() {
        let view = FieldView::new(Rect::new(5, 5, 45, 71), 450.0, 712.0);
        let (x, y) = view.world_point(0, 0);
        assert_eq!(x, 5.0);
        assert!((y - 712.0 / 71.0 / 2.0).abs() < 1e-9);
        assert_eq!(view.row_for(0.0), 5);
        assert_eq!(view.row_for(356.0), 5 + 35);
    }

    #[test]
    fn test_cell_layers() {
        let (mut session, assets) = session_and_assets();
        session.pipes.push(PipePair::new(&session.config, 200.0, 200));

        assert_eq!(cell_at(&session, &assets, 300.0, 100.0), FieldCell::sky());

        let bird = cell_at(&session, &assets, 50.0, 356.0);
        assert_eq!(bird.fg, assets.bird.color);

        let pipe_top = cell_at(&session, &assets, 220.0, 100.0);
        assert_eq!(pipe_top.fg, assets.pipe.color);
        let gap = cell_at(&session, &assets, 220.0, 250.0);
        assert_eq!(gap, FieldCell::sky());
        let pipe_bottom = cell_at(&session, &assets, 220.0, 400.0);
        assert_eq!(pipe_bottom.fg, assets.pipe.color);

        let ground = cell_at(&session, &assets, 220.0, 650.0);
        assert_eq!(ground.fg, assets.ground.color);
    }

    #[test]
    fn test_rotated_bird_is_sampled_in_sprite_space() {
        let (mut session, mut assets) = session_and_assets();
        // Sprite whose right half only is visible.
        assets.bird = Sprite::parse(" █", Color::Yellow, 34.0, 24.0).unwrap();
        session.bird.rotation = 0.0;
        assert!(sample_bird(&session, &assets.bird, 60.0, 356.0).is_some());
        assert!(sample_bird(&session, &assets.bird, 40.0, 356.0).is_none());
    }

    #[test]
    fn test_render_lines_dimensions() {
        let (session, assets) = session_and_assets();
        let view = FieldView::new(Rect::new(0, 0, 30, 20), 450.0, 712.0);
        let lines = render_lines(&session, &assets, &view);
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().all(|l| l.spans.len() == 30));
    }
}
