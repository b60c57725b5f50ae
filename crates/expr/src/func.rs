/// The whitelist of named functions a formula may call.
///
/// Each name is mapped explicitly in [`Func::from_name`]; anything else is
/// rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Sign,
    Pow,
    Atan2,
    Min,
    Max,
}

impl Func {
    /// Looks up a function by name.
    ///
    /// `log` is the natural logarithm.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "asin" => Func::Asin,
            "acos" => Func::Acos,
            "atan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "exp" => Func::Exp,
            "ln" | "log" => Func::Ln,
            "log10" => Func::Log10,
            "log2" => Func::Log2,
            "sqrt" => Func::Sqrt,
            "cbrt" => Func::Cbrt,
            "abs" => Func::Abs,
            "floor" => Func::Floor,
            "ceil" => Func::Ceil,
            "round" => Func::Round,
            "sign" => Func::Sign,
            "pow" => Func::Pow,
            "atan2" => Func::Atan2,
            "min" => Func::Min,
            "max" => Func::Max,
            _ => return None,
        };
        Some(func)
    }

    /// Returns the canonical name of the function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log10 => "log10",
            Func::Log2 => "log2",
            Func::Sqrt => "sqrt",
            Func::Cbrt => "cbrt",
            Func::Abs => "abs",
            Func::Floor => "floor",
            Func::Ceil => "ceil",
            Func::Round => "round",
            Func::Sign => "sign",
            Func::Pow => "pow",
            Func::Atan2 => "atan2",
            Func::Min => "min",
            Func::Max => "max",
        }
    }

    /// Returns the number of arguments the function takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Func::Pow | Func::Atan2 | Func::Min | Func::Max => 2,
            _ => 1,
        }
    }

    /// Applies the function to already evaluated arguments.
    ///
    /// `args` must hold exactly [`arity`](Func::arity) values; the parser
    /// guarantees this for every call in an [`Expr`](crate::Expr).
    #[must_use]
    pub fn apply(self, args: &[f64]) -> f64 {
        let a = args.first().copied().unwrap_or(f64::NAN);
        let b = args.get(1).copied().unwrap_or(f64::NAN);

        match self {
            Func::Sin => a.sin(),
            Func::Cos => a.cos(),
            Func::Tan => a.tan(),
            Func::Asin => a.asin(),
            Func::Acos => a.acos(),
            Func::Atan => a.atan(),
            Func::Sinh => a.sinh(),
            Func::Cosh => a.cosh(),
            Func::Tanh => a.tanh(),
            Func::Exp => a.exp(),
            Func::Ln => a.ln(),
            Func::Log10 => a.log10(),
            Func::Log2 => a.log2(),
            Func::Sqrt => a.sqrt(),
            Func::Cbrt => a.cbrt(),
            Func::Abs => a.abs(),
            Func::Floor => a.floor(),
            Func::Ceil => a.ceil(),
            Func::Round => round_half_up(a),
            Func::Sign => sign(a),
            Func::Pow => a.powf(b),
            Func::Atan2 => a.atan2(b),
            Func::Min => nan_aware(a, b, f64::min),
            Func::Max => nan_aware(a, b, f64::max),
        }
    }
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Like `signum`, but zero and `NaN` map to themselves.
fn sign(v: f64) -> f64 {
    if v == 0.0 || v.is_nan() { v } else { v.signum() }
}

/// `f64::min`/`max` drop a `NaN` operand; here it propagates.
fn nan_aware(a: f64, b: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        pick(a, b)
    }
}
