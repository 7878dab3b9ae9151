//! Numeric literal representation (§3 Data Model).

/// A MathJSON number value.
///
/// Kept deliberately free of a bignum dependency: `Decimal` carries the
/// normalized decimal text verbatim rather than parsing it into an
/// arbitrary-precision type, since nothing in this workspace's scope
/// (parsing, serialization, interval arithmetic) performs arithmetic on
/// decimals wider than `f64` — only round-trips them. See `DESIGN.md`.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// Machine double.
    Float(f64),
    /// Arbitrary-precision decimal, stored as normalized text (e.g. `"3.14159265358979323846"`).
    Decimal(Box<str>),
    /// Exact rational `numerator / denominator`, denominator non-zero.
    Rational(i64, i64),
    /// Complex pair `(re, im)`.
    Complex(Box<Number>, Box<Number>),
}

impl Number {
    #[must_use]
    pub fn int(v: i64) -> Self {
        Number::Rational(v, 1)
    }

    /// Best-effort conversion to `f64`, used by the interval-arithmetic
    /// collaborator and by pretty-printing heuristics. Decimal text that
    /// doesn't parse as `f64` yields `f64::NAN` rather than panicking —
    /// this conversion is advisory, never load-bearing for correctness of
    /// the parsed tree itself.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Float(v) => *v,
            Number::Decimal(text) => text.parse().unwrap_or(f64::NAN),
            Number::Rational(n, d) => *n as f64 / *d as f64,
            Number::Complex(re, _) => re.to_f64(),
        }
    }
}
