//! The player-controlled bird and its per-tick physics.

use super::geometry::{Mask, Rect};
use crate::core::GameConfig;

/// Player bird. Its horizontal center never changes; only `y`, the vertical
/// velocity and the tilt evolve.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Horizontal center (constant).
    pub x: f64,
    /// Vertical center.
    pub y: f64,
    /// Vertical velocity in units per tick (positive = downward).
    pub velocity_y: f64,
    /// Visual tilt in degrees (positive = nose up).
    pub rotation: f64,
    base_mask: Mask,
    mask: Mask,
}

impl Bird {
    /// Create a bird at the configured start position with a solid hitbox.
    pub fn new(config: &GameConfig) -> Self {
        let mask = Mask::solid(
            config.bird_width.round() as usize,
            config.bird_height.round() as usize,
        );
        Self::with_mask(config, mask)
    }

    /// Create a bird whose collision shape is `mask` (unrotated).
    pub fn with_mask(config: &GameConfig, mask: Mask) -> Self {
        Self {
            x: config.bird_x,
            y: config.bird_start_y,
            velocity_y: 0.0,
            rotation: 0.0,
            mask: mask.clone(),
            base_mask: mask,
        }
    }

    /// Put the bird back at its canonical start state.
    pub fn reset(&mut self, config: &GameConfig) {
        self.x = config.bird_x;
        self.y = config.bird_start_y;
        self.velocity_y = 0.0;
        self.rotation = 0.0;
        self.mask = self.base_mask.clone();
    }

    /// Jump: override the velocity and snap the nose fully up.
    pub fn flap(&mut self, config: &GameConfig) {
        self.velocity_y = config.flap_velocity;
        self.rotation = config.max_upward_rotation;
    }

    /// Advance one tick of gravity, movement and tilt.
    pub fn update(&mut self, config: &GameConfig) {
        self.velocity_y += config.gravity;
        self.y += self.velocity_y;

        if self.velocity_y < 0.0 {
            self.rotation += config.rotation_speed * 2.0;
        } else if self.velocity_y > config.tilt_threshold {
            self.rotation -= config.rotation_speed;
        }
        self.rotation = self
            .rotation
            .clamp(config.max_downward_rotation, config.max_upward_rotation);

        // Rotating changes the bounding box; the center stays put.
        self.mask = self.base_mask.rotated(self.rotation);

        if self.rect().top() < 0.0 {
            self.set_top(0.0);
            self.velocity_y = 0.0;
        }
    }

    /// Bounding box of the current (rotated) shape.
    pub fn rect(&self) -> Rect {
        let w = self.mask.width() as f64;
        let h = self.mask.height() as f64;
        Rect::new(self.x - w / 2.0, self.y - h / 2.0, w, h)
    }

    /// Current collision mask, aligned with [`Bird::rect`].
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn set_top(&mut self, top: f64) {
        self.y = top + self.mask.height() as f64 / 2.0;
    }

    pub fn set_bottom(&mut self, bottom: f64) {
        self.y = bottom - self.mask.height() as f64 / 2.0;
    }

    /// Overlap with the part of `rect` where `is_solid(x, y)` holds.
    ///
    /// Bounding-box mode ignores `is_solid` and treats `rect` as filled.
    pub fn collides_with(
        &self,
        rect: &Rect,
        pixel_precise: bool,
        is_solid: impl Fn(f64, f64) -> bool,
    ) -> bool {
        let bounds = self.rect();
        if pixel_precise {
            self.mask.overlaps_shape((bounds.x, bounds.y), rect, is_solid)
        } else {
            bounds.overlaps(rect)
        }
    }
}
