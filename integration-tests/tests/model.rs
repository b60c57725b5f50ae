use std::{convert::Infallible, error::Error as StdError, fmt};

use approx::assert_relative_eq;

use rootscope_core::{Model, Observer};
use rootscope_plot::{Command, Recorder, render};
use rootscope_solvers::equation::bisection::{self, Action, Config, Error, Event, Status};

/// `x³ - x - 2`, written out by hand.
struct Cubic;

impl Model for Cubic {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Infallible> {
        Ok(x.powi(3) - x - 2.0)
    }
}

#[derive(Debug)]
struct OutOfRange(f64);

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is outside the table", self.0)
    }
}

impl StdError for OutOfRange {}

/// A lookup that only covers `[0, 1]`.
struct Table;

impl Model for Table {
    type Input = f64;
    type Output = f64;
    type Error = OutOfRange;

    fn call(&self, x: &f64) -> Result<f64, OutOfRange> {
        if (0.0..=1.0).contains(x) {
            Ok(x - 0.25)
        } else {
            Err(OutOfRange(*x))
        }
    }
}

/// Stops once the bracket is narrower than `width`.
struct StopBelow {
    width: f64,
}

impl Observer<Event, Action> for StopBelow {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        let [a, b] = event.bracket;
        ((b - a).abs() < self.width).then_some(Action::StopEarly)
    }
}

#[test]
fn hand_written_model_solves_and_renders() {
    let config = Config::new(1e-9, 100).expect("valid config");
    let solution =
        bisection::solve_unobserved(&Cubic, [1.0, 2.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, 1.521_379_706_804_567_5, epsilon = 1e-8);

    let mut surface = Recorder::new(600.0, 400.0);
    render(&mut surface, &Cubic, [1.0, 2.0], &solution.history, solution.root);

    let curve = surface.commands().iter().find_map(|command| match command {
        Command::Path { points, .. } if points.len() > 2 => Some(points.len()),
        _ => None,
    });
    assert_eq!(curve, Some(401));
}

#[test]
fn model_errors_surface_from_the_solver() {
    let config = Config::default();

    let err =
        bisection::solve_unobserved(&Table, [0.0, 2.0], &config).expect_err("out of range");
    let Error::Model(source) = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(source.to_string(), "2 is outside the table");

    let solution = bisection::solve_unobserved(&Table, [0.0, 1.0], &config).expect("in range");
    assert_relative_eq!(solution.root, 0.25);
}

#[test]
fn renderer_skips_samples_the_model_rejects() {
    let mut surface = Recorder::new(600.0, 400.0);
    render(&mut surface, &Table, [-1.0, 1.0], &[], f64::NAN);

    let curve = surface.commands().iter().find_map(|command| match command {
        Command::Path { points, .. } if points.len() > 2 => Some(points.len()),
        _ => None,
    });
    // Only x in [0, 1] is covered: samples 200..=400.
    assert_eq!(curve, Some(201));
}

#[test]
fn struct_observer_stops_the_solve() {
    let config = Config::new(1e-12, 100).expect("valid config");
    let observer = StopBelow { width: 0.1 };

    let solution = bisection::solve(&Cubic, [1.0, 2.0], &config, observer).expect("should run");

    // Widths halve from 1, so the fifth bracket (0.0625) is the first below 0.1.
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters(), 5);
    assert!(solution.last().is_some_and(|record| record.width() < 0.1));
}
