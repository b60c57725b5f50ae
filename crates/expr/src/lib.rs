//! Restricted arithmetic expressions in one free variable `x`.
//!
//! Formula text is tokenized and parsed by a recursive-descent parser into an
//! [`Expr`] tree. Only numeric literals, the variable `x`, the constants `pi`
//! and `e`, the operators `+ - * / % ^` (and `**`), parentheses, and a fixed
//! whitelist of named [`Func`]tions are accepted. Nothing is ever executed
//! beyond that grammar.
//!
//! Two entry points are provided:
//!
//! - [`Expr::parse`]: strict, reports a [`ParseError`] for malformed text.
//! - [`Formula`] / [`evaluate`]: total, malformed text compiles into a
//!   formula that evaluates to `NaN` everywhere, so callers only ever check
//!   for the sentinel.
//!
//! ```
//! use rootscope_expr::{Formula, evaluate};
//!
//! let f = Formula::new("x^2 - 2");
//! assert_eq!(f.eval(3.0), 7.0);
//!
//! assert!(evaluate("x +", 1.0).is_nan());
//! assert!(evaluate("sqrt(x)", -1.0).is_nan());
//! ```

mod ast;
mod error;
mod formula;
mod func;
mod lexer;
mod parser;

pub use ast::{BinaryOp, Expr};
pub use error::ParseError;
pub use formula::{Formula, evaluate};
pub use func::Func;
