use super::{Number, Record};

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Status {
    /// `|f(m)|` or the bracket width fell below the tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
///
/// Owned by the caller; the solver keeps nothing between calls.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Midpoint computed in the last executed iteration.
    pub root: f64,
    /// One record per iteration, in order.
    pub history: Vec<Record>,
}

impl Solution {
    /// Returns true if the solver met the tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.history.len()
    }

    /// Returns the last iteration record.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.history.last()
    }

    /// Human-readable description of each step.
    ///
    /// One line per iteration, followed by a summary line when the solver
    /// converged.
    #[must_use]
    pub fn narrative(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.history.iter().map(ToString::to_string).collect();
        if self.converged() {
            lines.push(format!(
                "Converged in {} iterations. Approximate root: {}",
                self.iters(),
                Number(self.root)
            ));
        }
        lines
    }
}
