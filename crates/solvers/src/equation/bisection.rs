//! Bisection root finding with a full iteration history.
//!
//! # Algorithm
//!
//! Starting from a bracket `[a, b]` where `f(a)` and `f(b)` do not share a
//! sign, each iteration evaluates the midpoint `m = (a + b) / 2`, records
//! it, and stops once `|f(m)| < tolerance` or `|b - a| < tolerance`.
//! Otherwise `b` moves to `m` when `f(a)·f(m) < 0` and `a` moves to `m` in
//! every other case, including an exact zero at `m`.
//!
//! The reported root is always the last computed midpoint. When the
//! iteration cap is reached first, [`Solution::status`] is
//! [`Status::MaxIters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the midpoint is
//! evaluated and recorded. Observers can return [`Action::StopEarly`] to end
//! the solve with [`Status::StoppedByObserver`].

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod record;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use record::{Number, Record};
pub use solution::{Solution, Status};

use rootscope_core::{Model, Observer};

use bracket::Bracket;

/// Finds a root of `model` on `bracket` using the bisection method.
///
/// Observers see each iteration's record.
///
/// # Errors
///
/// - [`Error::InvalidFunction`] if `f(a)` or `f(b)` is `NaN`.
/// - [`Error::NoSignChange`] if `f(a)·f(b) > 0`.
/// - [`Error::Model`] if the model itself returns an error.
pub fn solve<M, Obs>(
    model: &M,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: Observer<Event, Action>,
{
    let eval = |x: f64| -> Result<f64, Error> {
        model.call(&x).map_err(|e| Error::Model(Box::new(e)))
    };

    let [a, b] = bracket;
    let fa = eval(a)?;
    let fb = eval(b)?;

    if fa.is_nan() {
        return Err(Error::InvalidFunction { x: a });
    }
    if fb.is_nan() {
        return Err(Error::InvalidFunction { x: b });
    }
    if fa * fb > 0.0 {
        return Err(Error::NoSignChange { a, b, fa, fb });
    }

    let tolerance = config.tolerance();
    let mut bracket = Bracket::new([a, b], fa);
    let mut history = Vec::with_capacity(config.max_iters().min(256));

    for iter in 1..=config.max_iters() {
        let midpoint = bracket.midpoint();
        let value = eval(midpoint)?;
        let [a, b] = bracket.as_array();

        let record = Record {
            iter,
            a,
            b,
            midpoint,
            value,
        };
        history.push(record);

        if let Some(Action::StopEarly) = observer.observe(&Event::from(&record)) {
            return Ok(finish(Status::StoppedByObserver, history));
        }

        if value.abs() < tolerance || bracket.width() < tolerance {
            return Ok(finish(Status::Converged, history));
        }

        bracket.shrink(midpoint, value);
    }

    Ok(finish(Status::MaxIters, history))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M>(model: &M, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve(model, bracket, config, ())
}

/// Builds the solution; `history` is never empty since `max_iters >= 1`.
fn finish(status: Status, history: Vec<Record>) -> Solution {
    let root = history.last().map_or(f64::NAN, |record| record.midpoint);
    Solution {
        status,
        root,
        history,
    }
}
