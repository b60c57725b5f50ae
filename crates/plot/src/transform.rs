use crate::Point;

/// Linear map from math space to pixel space for a single render.
///
/// `x` maps `[x0, x1] → [0, width]` and `y` maps `[y0, y1] → [height, 0]`;
/// the y axis is flipped because pixel rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    x: [f64; 2],
    y: [f64; 2],
    width: f64,
    height: f64,
}

impl ViewTransform {
    /// Creates a transform for the given math ranges and pixel size.
    ///
    /// A range with zero extent is widened by ±1 around its value.
    #[must_use]
    pub fn new(x_range: [f64; 2], y_range: [f64; 2], width: f32, height: f32) -> Self {
        Self {
            x: widen(x_range),
            y: widen(y_range),
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Returns the math-space x range.
    #[must_use]
    pub fn x_range(&self) -> [f64; 2] {
        self.x
    }

    /// Returns the math-space y range.
    #[must_use]
    pub fn y_range(&self) -> [f64; 2] {
        self.y
    }

    /// Maps a math-space x to a pixel column.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_canvas_x(&self, x: f64) -> f32 {
        let [x0, x1] = self.x;
        ((x - x0) / (x1 - x0) * self.width) as f32
    }

    /// Maps a math-space y to a pixel row.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_canvas_y(&self, y: f64) -> f32 {
        let [y0, y1] = self.y;
        (self.height - (y - y0) / (y1 - y0) * self.height) as f32
    }

    /// Maps a math-space point to pixel space.
    #[must_use]
    pub fn to_canvas(&self, [x, y]: [f64; 2]) -> Point {
        Point::new(self.to_canvas_x(x), self.to_canvas_y(y))
    }
}

fn widen([lo, hi]: [f64; 2]) -> [f64; 2] {
    if lo == hi {
        [lo - 1.0, hi + 1.0]
    } else {
        [lo, hi]
    }
}
