use std::fmt;

/// One pass of the bisection loop.
///
/// `a` and `b` are the bracket the midpoint was taken from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Record {
    /// Iteration counter, starting at 1.
    pub iter: usize,
    /// Left end of the bracket.
    pub a: f64,
    /// Right end of the bracket.
    pub b: f64,
    /// Midpoint of the bracket.
    pub midpoint: f64,
    /// Function value at the midpoint.
    pub value: f64,
}

impl Record {
    /// Returns the bracket as an array.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Iteration {}: a={}, b={}, m={}, f(m)={}",
            self.iter,
            Number(self.a),
            Number(self.b),
            Number(self.midpoint),
            Number(self.value)
        )
    }
}

/// Displays a value the way the narrative and trace table show numbers.
///
/// Magnitudes below `1e-6` or from `1e21` up switch to exponent notation;
/// everything else uses the shortest decimal that round-trips. Zero of
/// either sign prints as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl Number {
    const SMALL: f64 = 1e-6;
    const LARGE: f64 = 1e21;
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let magnitude = value.abs();
        if value == 0.0 {
            f.write_str("0")
        } else if magnitude.is_finite() && !(Self::SMALL..Self::LARGE).contains(&magnitude) {
            write!(f, "{value:e}")
        } else {
            write!(f, "{value}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_narrative_line() {
        let record = Record {
            iter: 2,
            a: 1.0,
            b: 2.0,
            midpoint: 1.5,
            value: 0.25,
        };
        assert_eq!(
            record.to_string(),
            "Iteration 2: a=1, b=2, m=1.5, f(m)=0.25"
        );
    }

    #[test]
    fn tiny_values_use_exponent_notation() {
        let record = Record {
            iter: 30,
            a: 1.414_213_5,
            b: 1.414_213_6,
            midpoint: 1.414_213_55,
            value: -1.23e-10,
        };
        assert_eq!(
            record.to_string(),
            "Iteration 30: a=1.4142135, b=1.4142136, m=1.41421355, f(m)=-1.23e-10"
        );
    }

    #[test]
    fn number_formatting() {
        assert_eq!(Number(0.000_001).to_string(), "0.000001");
        assert_eq!(Number(5e-324).to_string(), "5e-324");
        assert_eq!(Number(-0.0).to_string(), "0");
        assert_eq!(Number(123_456.75).to_string(), "123456.75");
        assert_eq!(Number(2.5e21).to_string(), "2.5e21");
        assert_eq!(Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Number(f64::NEG_INFINITY).to_string(), "-inf");
    }
}
