//! Endlessly scrolling ground strip.

use crate::core::GameConfig;

/// Two abutting segments that leapfrog each other as they scroll left.
#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    /// Left edges of the two segments.
    pub offsets: [f64; 2],
    pub segment_width: f64,
    /// Surface y; also the collision plane.
    pub y: f64,
}

impl Ground {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            offsets: [0.0, config.screen_width],
            segment_width: config.screen_width,
            y: config.ground_y(),
        }
    }

    pub fn update(&mut self, config: &GameConfig) {
        self.offsets[0] -= config.ground_speed;
        self.offsets[1] -= config.ground_speed;
        if self.offsets[0] + self.segment_width <= 0.0 {
            self.offsets[0] = self.offsets[1] + self.segment_width;
        }
        if self.offsets[1] + self.segment_width <= 0.0 {
            self.offsets[1] = self.offsets[0] + self.segment_width;
        }
    }
}
