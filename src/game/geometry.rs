//! Axis-aligned rectangles and pixel collision masks in world units.

/// Axis-aligned rectangle; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the interiors intersect; touching edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// Opaque/transparent bitmap with one bit per world unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// Fully opaque mask (what a placeholder rectangle collides with).
    pub fn solid(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            bits: vec![true; width * height],
        }
    }

    /// Build a mask by sampling `is_opaque(u, v)` at each pixel center,
    /// with `u` and `v` normalized to `[0, 1)`.
    pub fn from_fn(width: usize, height: usize, is_opaque: impl Fn(f64, f64) -> bool) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut bits = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let u = (col as f64 + 0.5) / width as f64;
                let v = (row as f64 + 0.5) / height as f64;
                bits.push(is_opaque(u, v));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height && self.bits[row * self.width + col]
    }

    #[cfg(test)]
    pub fn count_opaque(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Rotate counter-clockwise by `degrees` around the center.
    ///
    /// The result is sized to the rotated bounding box, so it grows for
    /// angles that are not multiples of 180°. Sampling is nearest-neighbour.
    pub fn rotated(&self, degrees: f64) -> Mask {
        if degrees == 0.0 {
            return self.clone();
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (w, h) = (self.width as f64, self.height as f64);
        let new_w = ((w * cos).abs() + (h * sin).abs()).round().max(1.0) as usize;
        let new_h = ((w * sin).abs() + (h * cos).abs()).round().max(1.0) as usize;

        let mut bits = Vec::with_capacity(new_w * new_h);
        for row in 0..new_h {
            for col in 0..new_w {
                let dx = col as f64 + 0.5 - new_w as f64 / 2.0;
                let dy = row as f64 + 0.5 - new_h as f64 / 2.0;
                // Inverse rotation back into source space (screen y points down).
                let sx = dx * cos - dy * sin + w / 2.0;
                let sy = dx * sin + dy * cos + h / 2.0;
                let opaque = sx >= 0.0
                    && sy >= 0.0
                    && self.get(sx.floor() as usize, sy.floor() as usize);
                bits.push(opaque);
            }
        }
        Mask {
            width: new_w,
            height: new_h,
            bits,
        }
    }

    /// True if any opaque pixel, placed with its top-left at `origin`, has
    /// its center inside `rect` on a point where `is_solid(x, y)` holds.
    pub fn overlaps_shape(
        &self,
        origin: (f64, f64),
        rect: &Rect,
        is_solid: impl Fn(f64, f64) -> bool,
    ) -> bool {
        let bounds = Rect::new(origin.0, origin.1, self.width as f64, self.height as f64);
        if !bounds.overlaps(rect) {
            return false;
        }
        for row in 0..self.height {
            for col in 0..self.width {
                if !self.get(col, row) {
                    continue;
                }
                let x = origin.0 + col as f64 + 0.5;
                let y = origin.1 + row as f64 + 0.5;
                if rect.contains(x, y) && is_solid(x, y) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 5.0, 5.0);
        assert_eq!(a.right(), 10.0);
        assert_eq!(a.bottom(), 10.0);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&touching));
    }

    #[test]
    fn test_rotation_by_zero_is_identity() {
        let mask = Mask::from_fn(6, 4, |u, _| u < 0.5);
        assert_eq!(mask.rotated(0.0), mask);
    }

    #[test]
    fn test_rotation_by_90_swaps_dimensions() {
        let mask = Mask::solid(34, 24);
        let rotated = mask.rotated(90.0);
        assert_eq!(rotated.width(), 24);
        assert_eq!(rotated.height(), 34);
        assert_eq!(rotated.count_opaque(), 34 * 24);
    }

    #[test]
    fn test_rotation_grows_bounding_box() {
        let mask = Mask::solid(34, 24);
        let rotated = mask.rotated(25.0);
        assert!(rotated.width() > 34);
        assert!(rotated.height() > 24);
    }

    #[test]
    fn test_counter_clockwise_rotation_lifts_right_side() {
        // Only the right half is opaque; after +90° it should occupy the top half.
        let mask = Mask::from_fn(10, 10, |u, _| u >= 0.5);
        let rotated = mask.rotated(90.0);
        assert!(rotated.get(5, 0));
        assert!(!rotated.get(5, 9));
    }

    #[test]
    fn test_mask_overlap_ignores_transparent_corners() {
        // Opaque only in the left column.
        let mask = Mask::from_fn(4, 4, |u, _| u < 0.25);
        let right_rect = Rect::new(3.0, 0.0, 5.0, 4.0);
        let left_rect = Rect::new(-2.0, 0.0, 3.0, 4.0);
        assert!(!mask.overlaps_shape((0.0, 0.0), &right_rect, |_, _| true));
        assert!(mask.overlaps_shape((0.0, 0.0), &left_rect, |_, _| true));
    }

    #[test]
    fn test_shape_overlap_skips_transparent_points_of_other_shape() {
        let mask = Mask::solid(4, 4);
        let rect = Rect::new(2.0, 0.0, 10.0, 4.0);
        // Solid only from x = 3 on: the pixel centered at 2.5 misses it.
        assert!(mask.overlaps_shape((0.0, 0.0), &rect, |x, _| x >= 3.0));
        assert!(!mask.overlaps_shape((-1.0, 0.0), &rect, |x, _| x >= 3.0));
    }
}
