//! Elementary functions (§4.5 "Elementary"): `sqrt`, `ln`, `log10`, `log2`,
//! `pow`, `exp`, `abs`, `floor`, `ceil`, `round`, `fract`, `sign`, `min`,
//! `max`, `mod`.

use crate::interval::Interval;
use crate::result::{operand, Clipped, Continuity, IntervalResult};
use crate::IntoIntervalResult;

fn unary(a: impl IntoIntervalResult, f: impl FnOnce(Interval) -> IntervalResult) -> IntervalResult {
    let a = a.into_interval_result();
    match operand(&a) {
        Ok(i) => f(i),
        Err(r) => r,
    }
}

#[must_use]
pub fn sqrt(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| {
        if a.hi < 0.0 {
            IntervalResult::Empty
        } else if a.lo < 0.0 {
            IntervalResult::partial(Interval::new(0.0, a.hi.sqrt()), Clipped::Lo)
        } else {
            IntervalResult::Value(Interval::new(a.lo.sqrt(), a.hi.sqrt()))
        }
    })
}

#[must_use]
pub fn ln(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| {
        if a.hi <= 0.0 {
            IntervalResult::Empty
        } else if a.lo <= 0.0 {
            IntervalResult::partial(Interval::new(f64::NEG_INFINITY, a.hi.ln()), Clipped::Lo)
        } else {
            IntervalResult::Value(Interval::new(a.lo.ln(), a.hi.ln()))
        }
    })
}

#[must_use]
pub fn log10(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| {
        if a.hi <= 0.0 {
            IntervalResult::Empty
        } else if a.lo <= 0.0 {
            IntervalResult::partial(Interval::new(f64::NEG_INFINITY, a.hi.log10()), Clipped::Lo)
        } else {
            IntervalResult::Value(Interval::new(a.lo.log10(), a.hi.log10()))
        }
    })
}

#[must_use]
pub fn log2(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| {
        if a.hi <= 0.0 {
            IntervalResult::Empty
        } else if a.lo <= 0.0 {
            IntervalResult::partial(Interval::new(f64::NEG_INFINITY, a.hi.log2()), Clipped::Lo)
        } else {
            IntervalResult::Value(Interval::new(a.lo.log2(), a.hi.log2()))
        }
    })
}

#[must_use]
pub fn exp(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| IntervalResult::Value(Interval::new(a.lo.exp(), a.hi.exp())))
}

#[must_use]
pub fn abs(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| {
        if a.lo >= 0.0 {
            IntervalResult::Value(a)
        } else if a.hi <= 0.0 {
            IntervalResult::Value(Interval::new(-a.hi, -a.lo))
        } else {
            IntervalResult::Value(Interval::new(0.0, a.lo.abs().max(a.hi.abs())))
        }
    })
}

/// Integer power. Negative exponents require the base to exclude 0
/// (§4.5); even exponents fold through 0 when the base straddles it; odd
/// exponents are monotonic.
#[must_use]
pub fn pow_i32(a: impl IntoIntervalResult, n: i32) -> IntervalResult {
    unary(a, |a| pow_i32_interval(a, n))
}

fn pow_i32_interval(a: Interval, n: i32) -> IntervalResult {
    if n == 0 {
        return IntervalResult::Value(Interval::degenerate(1.0));
    }
    if n < 0 {
        if a.contains(0.0) {
            return IntervalResult::pole(0.0);
        }
        return match pow_i32_interval(a, -n) {
            IntervalResult::Value(i) => IntervalResult::Value(Interval::new(1.0 / i.hi, 1.0 / i.lo)),
            other => other,
        };
    }
    if n % 2 == 0 {
        if a.contains(0.0) {
            let hi = a.lo.abs().max(a.hi.abs()).powi(n);
            IntervalResult::Value(Interval::new(0.0, hi))
        } else {
            let (lo_p, hi_p) = (a.lo.powi(n), a.hi.powi(n));
            IntervalResult::Value(Interval::new(lo_p.min(hi_p), lo_p.max(hi_p)))
        }
    } else {
        IntervalResult::Value(Interval::new(a.lo.powi(n), a.hi.powi(n)))
    }
}

/// Fractional power. The base must be non-negative; a base straddling 0
/// yields `partial` clipped to the non-negative sub-range (§4.5).
#[must_use]
pub fn pow_f64(a: impl IntoIntervalResult, p: f64) -> IntervalResult {
    unary(a, move |a| {
        if a.hi < 0.0 {
            IntervalResult::Empty
        } else if a.lo < 0.0 {
            IntervalResult::partial(Interval::new(0.0, a.hi.powf(p)), Clipped::Lo)
        } else {
            let (lo_p, hi_p) = (a.lo.powf(p), a.hi.powf(p));
            IntervalResult::Value(Interval::new(lo_p.min(hi_p), lo_p.max(hi_p)))
        }
    })
}

/// Detects a jump by comparing `f` at the two endpoints — the documented
/// simplification for `floor`/`ceil`/`round`/`fract`/`mod` (§4.5): a value
/// mismatch means an integer (or period boundary) was crossed somewhere in
/// the interval, reported at the right endpoint with right-continuity.
fn stepwise(a: Interval, f: impl Fn(f64) -> f64) -> IntervalResult {
    let lo_v = f(a.lo);
    let hi_v = f(a.hi);
    if lo_v == hi_v {
        IntervalResult::Value(Interval::degenerate(lo_v))
    } else {
        IntervalResult::jump(a.hi, Continuity::Right)
    }
}

#[must_use]
pub fn floor(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| stepwise(a, f64::floor))
}

#[must_use]
pub fn ceil(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| stepwise(a, f64::ceil))
}

#[must_use]
pub fn round(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| stepwise(a, f64::round))
}

#[must_use]
pub fn fract(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| stepwise(a, f64::fract))
}

/// `x mod divisor`. Period is conservatively `max(|divisor.lo|,
/// |divisor.hi|)` (documented open question — a loose but sound bound, not
/// tightened).
#[must_use]
pub fn modulo(a: impl IntoIntervalResult, divisor: Interval) -> IntervalResult {
    unary(a, move |a| {
        let period = divisor.lo.abs().max(divisor.hi.abs());
        if period == 0.0 {
            return IntervalResult::Empty;
        }
        stepwise(a, |x| x.rem_euclid(period))
    })
}

#[must_use]
pub fn sign(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| {
        if a.lo > 0.0 {
            IntervalResult::Value(Interval::degenerate(1.0))
        } else if a.hi < 0.0 {
            IntervalResult::Value(Interval::degenerate(-1.0))
        } else {
            IntervalResult::Value(Interval::new(-1.0, 1.0))
        }
    })
}

fn binary_pointwise(
    a: impl IntoIntervalResult,
    b: impl IntoIntervalResult,
    f: impl FnOnce(Interval, Interval) -> Interval,
) -> IntervalResult {
    let a = a.into_interval_result();
    let b = b.into_interval_result();
    let ia = match operand(&a) {
        Ok(i) => i,
        Err(r) => return r,
    };
    let ib = match operand(&b) {
        Ok(i) => i,
        Err(r) => return r,
    };
    IntervalResult::Value(f(ia, ib))
}

/// Pointwise minimum: monotone nondecreasing in both arguments, so the
/// range is `[min(a.lo, b.lo), min(a.hi, b.hi)]`.
#[must_use]
pub fn min(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> IntervalResult {
    binary_pointwise(a, b, |a, b| Interval::new(a.lo.min(b.lo), a.hi.min(b.hi)))
}

#[must_use]
pub fn max(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> IntervalResult {
    binary_pointwise(a, b, |a, b| Interval::new(a.lo.max(b.lo), a.hi.max(b.hi)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_of_a_negative_interval_is_empty() {
        assert!(matches!(sqrt(Interval::new(-3.0, -1.0)), IntervalResult::Empty));
    }

    #[test]
    fn sqrt_clips_a_straddling_interval_to_partial() {
        let result = sqrt(Interval::new(-1.0, 4.0));
        let IntervalResult::Partial { value, domain_clipped } = result else {
            panic!("expected partial, got {result:?}")
        };
        assert_eq!(value, Interval::new(0.0, 2.0));
        assert_eq!(domain_clipped, Clipped::Lo);
    }

    #[test]
    fn ln_of_an_interval_straddling_zero_clips_the_lower_bound() {
        let result = ln(Interval::new(-1.0, 1.0));
        let IntervalResult::Partial { value, domain_clipped } = result else {
            panic!("expected partial, got {result:?}")
        };
        assert_eq!(value, Interval::new(f64::NEG_INFINITY, 0.0));
        assert_eq!(domain_clipped, Clipped::Lo);
    }

    #[test]
    fn even_power_of_a_straddling_interval_bottoms_out_at_zero() {
        let result = pow_i32(Interval::new(-3.0, 2.0), 2);
        let IntervalResult::Value(i) = result else {
            panic!("expected value, got {result:?}")
        };
        assert_eq!(i, Interval::new(0.0, 9.0));
    }

    #[test]
    fn odd_power_is_monotonic() {
        let result = pow_i32(Interval::new(-2.0, 3.0), 3);
        let IntervalResult::Value(i) = result else {
            panic!("expected value, got {result:?}")
        };
        assert_eq!(i, Interval::new(-8.0, 27.0));
    }

    #[test]
    fn negative_power_of_an_interval_containing_zero_is_a_pole() {
        let result = pow_i32(Interval::new(-1.0, 1.0), -1);
        assert!(matches!(result, IntervalResult::Singular { continuity: None, .. }));
    }

    #[test]
    fn floor_with_no_integer_crossed_is_constant() {
        let result = floor(Interval::new(1.2, 1.8));
        let IntervalResult::Value(i) = result else {
            panic!("expected value, got {result:?}")
        };
        assert_eq!(i, Interval::degenerate(1.0));
    }

    #[test]
    fn floor_crossing_an_integer_is_singular() {
        let result = floor(Interval::new(1.2, 2.3));
        assert!(matches!(
            result,
            IntervalResult::Singular {
                continuity: Some(Continuity::Right),
                ..
            }
        ));
    }

    #[test]
    fn sign_of_a_straddling_interval_is_minus_one_to_one() {
        let result = sign(Interval::new(-2.0, 3.0));
        let IntervalResult::Value(i) = result else {
            panic!("expected value, got {result:?}")
        };
        assert_eq!(i, Interval::new(-1.0, 1.0));
    }
}
