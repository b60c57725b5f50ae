use super::Record;

/// Iteration event emitted by the bisection solver.
///
/// Observers receive one event per iteration, after the midpoint has been
/// evaluated and before the convergence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket the midpoint was taken from.
    pub bracket: [f64; 2],
    /// The evaluated midpoint.
    pub x: f64,
    /// Function value at the midpoint.
    pub value: f64,
}

impl From<&Record> for Event {
    fn from(record: &Record) -> Self {
        Self {
            iter: record.iter,
            bracket: record.bracket(),
            x: record.midpoint,
            value: record.value,
        }
    }
}
