use std::error::Error as StdError;

use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during bisection solving.
///
/// All of them are terminal: no partial history is returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid function: f({x}) is not a number")]
    InvalidFunction { x: f64 },

    #[error("f(a) and f(b) must have opposite signs: f({a})={fa}, f({b})={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}
