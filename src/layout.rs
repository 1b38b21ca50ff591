//! Screen-space placement of portal thumbnails.

use nalgebra::{Point2, Vector2};

/// Axis-aligned rectangle in window pixels, y pointing down
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub min: Point2<f32>,
    pub max: Point2<f32>,
}

impl Rect {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            min: Point2::new(x1, y1),
            max: Point2::new(x2, y2),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Grow (or shrink, for negative `amount`) by `amount` on every side
    pub fn inflated(&self, amount: f32) -> Self {
        let delta = Vector2::repeat(amount);
        Self {
            min: self.min - delta,
            max: self.max + delta,
        }
    }
}

/// Square thumbnails of side `size`, in a row centered along the bottom edge of the window.
pub fn thumbnail_rects((width, height): (u32, u32), size: f32, count: usize) -> Vec<Rect> {
    let x = 0.5 * (width as f32 - count as f32 * size);
    let y = height as f32 - size;
    (0..count)
        .map(|i| {
            let left = x + i as f32 * size;
            Rect::new(left, y, left + size, y + size)
        })
        .collect()
}
