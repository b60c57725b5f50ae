/// Current search bracket and the cached function value at its left end.
///
/// Only `f(left)` decides which end moves, so the right value is not kept.
/// Endpoints stay in the order the caller supplied them; nothing here
/// requires `left < right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_value: f64,
}

impl Bracket {
    pub(super) fn new(bounds: [f64; 2], left_value: f64) -> Self {
        let [left, right] = bounds;
        Self {
            left,
            right,
            left_value,
        }
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(super) fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub(super) fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    /// Replaces one endpoint with the midpoint `x`.
    ///
    /// The right end moves only on a strict sign change `f(left)·f(x) < 0`.
    /// Otherwise the left end moves, including when the product is exactly
    /// zero.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if self.left_value * value < 0.0 {
            self.right = x;
        } else {
            self.left = x;
            self.left_value = value;
        }
    }
}
