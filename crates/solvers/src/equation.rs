//! Solvers for equations `f(x) = 0` in one variable.
//!
//! The function is any [`Model`] mapping `f64` to `f64`. A parsed formula
//! from `rootscope-expr` is the usual choice, but tests and callers may
//! supply their own models.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed progress on a sign-changing bracket
//!
//! [`Model`]: rootscope_core::Model

pub mod bisection;
