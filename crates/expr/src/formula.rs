use std::{convert::Infallible, fmt};

use rootscope_core::Model;

use crate::{Expr, ParseError};

/// A compiled single-variable formula whose evaluation never fails.
///
/// Construction always succeeds. If the text does not parse, the formula
/// keeps the [`ParseError`] and evaluates to `NaN` at every point, so
/// callers only need to check for the sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    text: String,
    compiled: Result<Expr, ParseError>,
}

impl Formula {
    /// Compiles formula text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let compiled = Expr::parse(&text);
        Self { text, compiled }
    }

    /// Evaluates the formula at `x`.
    ///
    /// Returns `NaN` if the formula failed to compile; domain errors yield
    /// whatever non-finite value the arithmetic produces.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match &self.compiled {
            Ok(expr) => expr.eval(x),
            Err(_) => f64::NAN,
        }
    }

    /// Returns the original formula text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the text compiled.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.compiled.is_ok()
    }

    /// Returns the parse error, if compilation failed.
    #[must_use]
    pub fn error(&self) -> Option<&ParseError> {
        self.compiled.as_ref().err()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Model for Formula {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok(self.eval(*input))
    }
}

/// Evaluates formula text at `x`, returning `NaN` on any failure.
///
/// Compiles the text on every call; prefer [`Formula`] when evaluating the
/// same text repeatedly.
#[must_use]
pub fn evaluate(text: &str, x: f64) -> f64 {
    Formula::new(text).eval(x)
}
