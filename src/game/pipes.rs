//! Pipe pairs: spawning, scrolling and off-screen removal.

use super::geometry::{Mask, Rect};
use crate::core::GameConfig;
use rand::Rng;

/// Which half of a pair a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeRole {
    Top,
    Bottom,
}

/// A top and a bottom pipe sharing one gap. Both segments always have the
/// same `x` and width, so the pair scrolls, scores and despawns as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Left edge of both segments.
    pub x: f64,
    pub width: f64,
    /// Height of the top segment; the gap starts at this y.
    pub top_height: f64,
    /// Vertical size of the opening.
    pub gap: f64,
    /// Y where the bottom segment ends (the ground surface).
    pub floor_y: f64,
    /// Set once the bird has cleared this pair.
    pub passed: bool,
}

impl PipePair {
    /// Build a pair at `x` whose gap starts at `top_height`.
    pub fn new(config: &GameConfig, x: f64, top_height: u32) -> Self {
        Self {
            x,
            width: config.pipe_width,
            top_height: f64::from(top_height),
            gap: f64::from(config.pipe_gap),
            floor_y: config.ground_y(),
            passed: false,
        }
    }

    /// Spawn a pair just past the right edge with a uniformly random gap
    /// origin drawn from [`GameConfig::top_height_range`].
    pub fn spawn<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let top_height = rng.gen_range(config.top_height_range());
        Self::new(config, config.screen_width + config.pipe_spawn_offset, top_height)
    }

    /// Y coordinate where the bottom segment begins.
    pub fn bottom_y(&self) -> f64 {
        self.top_height + self.gap
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn segment(&self, role: PipeRole) -> Rect {
        match role {
            PipeRole::Top => Rect::new(self.x, 0.0, self.width, self.top_height.max(1.0)),
            PipeRole::Bottom => {
                let height = (self.floor_y - self.bottom_y()).max(1.0);
                Rect::new(self.x, self.bottom_y(), self.width, height)
            }
        }
    }

    pub fn top_rect(&self) -> Rect {
        self.segment(PipeRole::Top)
    }

    pub fn bottom_rect(&self) -> Rect {
        self.segment(PipeRole::Bottom)
    }

    pub fn segments(&self) -> [Rect; 2] {
        [self.top_rect(), self.bottom_rect()]
    }

    /// Whether `(x, y)` lands on an opaque point of the pair.
    ///
    /// `tile` spans the pipe width and one tile length; it repeats away from
    /// the gap, so the top segment sees it flipped.
    pub fn is_solid_at(&self, tile: &Mask, x: f64, y: f64) -> bool {
        let from_gap = if self.top_rect().contains(x, y) {
            self.top_height - y
        } else if self.bottom_rect().contains(x, y) {
            y - self.bottom_y()
        } else {
            return false;
        };
        let col = (x - self.x) * tile.width() as f64 / self.width;
        let row = from_gap.rem_euclid(tile.height() as f64);
        tile.get(col as usize, row as usize)
    }

    /// Fully scrolled past the left edge of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Scroll every pair left by the pipe speed and drop the ones that are no
/// longer visible. Order of the remaining pairs is preserved.
pub fn update_pipes(pipes: &mut Vec<PipePair>, config: &GameConfig) {
    for pipe in pipes.iter_mut() {
        pipe.x -= config.pipe_speed;
    }
    pipes.retain(|p| !p.is_off_screen());
}
