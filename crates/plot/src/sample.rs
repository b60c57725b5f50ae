use rootscope_core::Model;

/// Finite samples of a function across a bracket, built fresh per render.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    points: Vec<[f64; 2]>,
    y_range: [f64; 2],
}

impl SampledCurve {
    /// Samples `model` at `intervals + 1` evenly spaced points across
    /// `bracket`, both ends included.
    ///
    /// Samples that fail or are not finite are dropped and do not affect
    /// the y range. A flat range is widened by ±1; if no sample survives,
    /// the range is `[-1, 1]`.
    pub fn sample<M>(model: &M, bracket: [f64; 2], intervals: usize) -> Self
    where
        M: Model<Input = f64, Output = f64>,
    {
        let [a, b] = bracket;
        let intervals = intervals.max(1);
        #[allow(clippy::cast_precision_loss)]
        let step = (b - a) / intervals as f64;

        let mut points = Vec::with_capacity(intervals + 1);
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for i in 0..=intervals {
            #[allow(clippy::cast_precision_loss)]
            let x = a + i as f64 * step;
            let Some(y) = model.call(&x).ok().filter(|y| y.is_finite()) else {
                continue;
            };
            min = min.min(y);
            max = max.max(y);
            points.push([x, y]);
        }

        let y_range = if points.is_empty() {
            [-1.0, 1.0]
        } else if min == max {
            [min - 1.0, max + 1.0]
        } else {
            [min, max]
        };

        Self { points, y_range }
    }

    /// Returns the finite samples in x order.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Returns the normalized `[min, max]` of the sampled y values.
    #[must_use]
    pub fn y_range(&self) -> [f64; 2] {
        self.y_range
    }
}
