//! Numerical solvers for Rootscope.
//!
//! # Modules
//!
//! - [`equation`]: root finding for single-variable functions

pub mod equation;
