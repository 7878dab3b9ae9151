//! `add`/`sub`/`mul`/`div` (§4.5 "Arithmetic").

use crate::interval::Interval;
use crate::result::{operand, Clipped, IntervalResult};

/// Accepts a bare `Interval` or an already-tagged `IntervalResult`,
/// matching §4.5's "every operation accepts `Interval | IntervalResult`".
pub trait IntoIntervalResult {
    fn into_interval_result(self) -> IntervalResult;
}

impl IntoIntervalResult for Interval {
    fn into_interval_result(self) -> IntervalResult {
        IntervalResult::Value(self)
    }
}

impl IntoIntervalResult for IntervalResult {
    fn into_interval_result(self) -> IntervalResult {
        self
    }
}

fn binary(
    a: impl IntoIntervalResult,
    b: impl IntoIntervalResult,
    f: impl FnOnce(Interval, Interval) -> IntervalResult,
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
    f(ia, ib)
}

#[must_use]
pub fn add(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> IntervalResult {
    binary(a, b, |a, b| IntervalResult::Value(Interval::new(a.lo + b.lo, a.hi + b.hi)))
}

#[must_use]
pub fn sub(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> IntervalResult {
    binary(a, b, |a, b| IntervalResult::Value(Interval::new(a.lo - b.hi, a.hi - b.lo)))
}

#[must_use]
pub fn mul(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> IntervalResult {
    binary(a, b, |a, b| {
        let corners = [a.lo * b.lo, a.lo * b.hi, a.hi * b.lo, a.hi * b.hi];
        let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        IntervalResult::Value(Interval::new(lo, hi))
    })
}

#[must_use]
pub fn div(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> IntervalResult {
    binary(a, b, |a, b| div_intervals(a, b))
}

fn div_intervals(a: Interval, b: Interval) -> IntervalResult {
    if b.is_zero() {
        return IntervalResult::Empty;
    }
    if b.strictly_positive() || b.strictly_negative() {
        let reciprocal = Interval::new(1.0 / b.hi, 1.0 / b.lo);
        let corners = [
            a.lo * reciprocal.lo,
            a.lo * reciprocal.hi,
            a.hi * reciprocal.lo,
            a.hi * reciprocal.hi,
        ];
        let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        return IntervalResult::Value(Interval::new(lo, hi));
    }
    if b.straddles_zero() {
        return IntervalResult::pole(0.0);
    }
    // b touches zero from one side ([0, c] or [c, 0]).
    if a.straddles_zero() {
        return IntervalResult::Entire;
    }
    let numerator_positive = a.lo >= 0.0;
    if b.touches_zero_from_above() {
        return if numerator_positive {
            IntervalResult::partial(Interval::new(a.lo / b.hi, f64::INFINITY), Clipped::Hi)
        } else {
            IntervalResult::partial(Interval::new(f64::NEG_INFINITY, a.hi / b.hi), Clipped::Lo)
        };
    }
    // b.touches_zero_from_below()
    if numerator_positive {
        IntervalResult::partial(Interval::new(f64::NEG_INFINITY, a.lo / b.lo), Clipped::Lo)
    } else {
        IntervalResult::partial(Interval::new(a.hi / b.lo, f64::INFINITY), Clipped::Hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sums_corresponding_bounds() {
        let result = add(Interval::new(1.0, 2.0), Interval::new(3.0, 4.0));
        let IntervalResult::Value(i) = result else {
            unreachable!("add always returns Value for finite inputs")
        };
        assert_eq!(i, Interval::new(4.0, 6.0));
    }

    #[test]
    fn sub_crosses_the_bounds() {
        let result = sub(Interval::new(1.0, 2.0), Interval::new(3.0, 4.0));
        let IntervalResult::Value(i) = result else {
            unreachable!("sub always returns Value for finite inputs")
        };
        assert_eq!(i, Interval::new(-3.0, -1.0));
    }

    #[test]
    fn mul_takes_the_min_and_max_corner_products() {
        let result = mul(Interval::new(-2.0, 3.0), Interval::new(-1.0, 4.0));
        let IntervalResult::Value(i) = result else {
            unreachable!("mul always returns Value for finite inputs")
        };
        assert_eq!(i, Interval::new(-8.0, 12.0));
    }

    #[test]
    fn div_by_an_interval_straddling_zero_is_singular() {
        let result = div(Interval::new(1.0, 2.0), Interval::new(-1.0, 1.0));
        assert!(matches!(result, IntervalResult::Singular { continuity: None, .. }));
    }

    #[test]
    fn div_by_exactly_zero_is_empty() {
        let result = div(Interval::new(1.0, 2.0), Interval::new(0.0, 0.0));
        assert!(matches!(result, IntervalResult::Empty));
    }

    #[test]
    fn div_by_a_positive_divisor_touching_zero_with_positive_numerator_is_partial() {
        let result = div(Interval::new(2.0, 4.0), Interval::new(0.0, 2.0));
        let IntervalResult::Partial { value, domain_clipped } = result else {
            panic!("expected a partial result, got {result:?}")
        };
        assert_eq!(value.lo, 1.0);
        assert_eq!(value.hi, f64::INFINITY);
        assert_eq!(domain_clipped, Clipped::Hi);
    }

    #[test]
    fn div_by_a_divisor_touching_zero_with_mixed_sign_numerator_is_entire() {
        let result = div(Interval::new(-1.0, 1.0), Interval::new(0.0, 2.0));
        assert!(matches!(result, IntervalResult::Entire));
    }

    #[test]
    fn div_propagates_an_already_tagged_operand() {
        let result = div(IntervalResult::Empty, Interval::new(1.0, 2.0));
        assert!(matches!(result, IntervalResult::Empty));
    }
}
