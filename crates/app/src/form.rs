//! Parsing and validation of the input fields.
//!
//! Everything the UI needs to turn text fields into a finished solve lives
//! here, so it can be tested without a window.

use std::str::FromStr;

use thiserror::Error;

use rootscope_expr::Formula;
use rootscope_solvers::equation::bisection::{self, Action, Config, ConfigError, Event, Solution};

/// Errors reported to the user instead of a result.
#[derive(Debug, Error)]
pub(crate) enum FormError {
    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solve(#[from] bisection::Error),
}

/// The raw text of each input field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Form {
    pub(crate) function: String,
    pub(crate) a: String,
    pub(crate) b: String,
    pub(crate) tolerance: String,
    pub(crate) max_iters: String,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            function: "x^2 - 2".into(),
            a: "0".into(),
            b: "2".into(),
            tolerance: "1e-6".into(),
            max_iters: "100".into(),
        }
    }
}

/// A successful solve, kept around so the trace can be redrawn every frame.
#[derive(Debug, Clone)]
pub(crate) struct Run {
    pub(crate) formula: Formula,
    pub(crate) bracket: [f64; 2],
    pub(crate) solution: Solution,
}

impl Form {
    /// Parses the fields and runs the solver.
    ///
    /// With `verbose` set, every iteration is echoed to stderr.
    pub(crate) fn submit(&self, verbose: bool) -> Result<Run, FormError> {
        let a: f64 = parse("a", &self.a)?;
        let b: f64 = parse("b", &self.b)?;
        let tolerance: f64 = parse("tolerance", &self.tolerance)?;
        let max_iters: usize = parse("max iterations", &self.max_iters)?;

        let config = Config::new(tolerance, max_iters)?;
        let formula = Formula::new(self.function.trim());
        let bracket = [a, b];

        let solution = bisection::solve(&formula, bracket, &config, |event: &Event| {
            if verbose {
                eprintln!(
                    "bisection: iter={} bracket=[{}, {}] m={} f(m)={}",
                    event.iter, event.bracket[0], event.bracket[1], event.x, event.value
                );
            }
            None::<Action>
        })?;

        Ok(Run {
            formula,
            bracket,
            solution,
        })
    }
}

fn parse<T: FromStr>(field: &'static str, value: &str) -> Result<T, FormError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use rootscope_solvers::equation::bisection::Status;

    fn form(function: &str, a: &str, b: &str) -> Form {
        Form {
            function: function.into(),
            a: a.into(),
            b: b.into(),
            ..Form::default()
        }
    }

    #[test]
    fn default_form_solves() {
        let run = Form::default().submit(false).expect("should solve");

        assert_eq!(run.solution.status, Status::Converged);
        assert_relative_eq!(run.solution.root, 2.0_f64.sqrt(), epsilon = 1e-5);
        assert_eq!(run.bracket, [0.0, 2.0]);
    }

    #[test]
    fn trims_whitespace() {
        let run = form("  x - 1 ", " 0 ", "2\n").submit(false).expect("should solve");
        assert_relative_eq!(run.solution.root, 1.0);
        assert_eq!(run.formula.text(), "x - 1");
    }

    #[test]
    fn reports_unparsable_number() {
        let err = form("x", "zero", "1").submit(false).expect_err("should fail");
        assert!(matches!(err, FormError::InvalidNumber { field: "a", .. }));
        assert_eq!(err.to_string(), "a is not a valid number: 'zero'");
    }

    #[test]
    fn reports_invalid_config() {
        let mut input = Form::default();
        input.max_iters = "0".into();

        let err = input.submit(false).expect_err("should fail");
        assert!(matches!(err, FormError::Config(ConfigError::MaxIters)));
    }

    #[test]
    fn reports_negative_max_iters_as_bad_number() {
        let mut input = Form::default();
        input.max_iters = "-3".into();

        let err = input.submit(false).expect_err("should fail");
        assert!(matches!(
            err,
            FormError::InvalidNumber {
                field: "max iterations",
                ..
            }
        ));
    }

    #[test]
    fn reports_solver_errors() {
        let err = form("x + 5", "0", "1").submit(false).expect_err("should fail");
        assert!(matches!(
            err,
            FormError::Solve(bisection::Error::NoSignChange { .. })
        ));

        let err = form("x +", "0", "1").submit(false).expect_err("should fail");
        assert!(matches!(
            err,
            FormError::Solve(bisection::Error::InvalidFunction { .. })
        ));
    }
}
