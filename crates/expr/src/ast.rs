use crate::{Func, ParseError, parser};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinaryOp {
    /// Applies the operator using IEEE semantics.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Rem => lhs % rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }
}

/// A parsed expression tree in the single free variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal or named constant.
    Num(f64),
    /// The free variable.
    Var,
    /// Unary negation.
    Neg(Box<Expr>),
    /// A binary operation.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// A call to a whitelisted function.
    Call(Func, Vec<Expr>),
}

impl Expr {
    /// Parses formula text into an expression tree.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is empty, contains characters or
    /// names outside the grammar, or is not a complete expression.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parser::parse(text)
    }

    /// Evaluates the expression with `x` bound to the given value.
    ///
    /// Domain errors produce `NaN` or an infinity, never a panic.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Num(value) => *value,
            Expr::Var => x,
            Expr::Neg(inner) => -inner.eval(x),
            Expr::Binary(op, lhs, rhs) => op.apply(lhs.eval(x), rhs.eval(x)),
            Expr::Call(func, args) => {
                let values: Vec<f64> = args.iter().map(|arg| arg.eval(x)).collect();
                func.apply(&values)
            }
        }
    }
}
