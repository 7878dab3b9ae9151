//! Trigonometric functions (§4.5 "Trigonometric"): `sin`/`cos` via the
//! extremum-containment primitive, `tan`/`cot`/`sec`/`csc` pole detection,
//! and domain-clipped inverse trig.

use std::f64::consts::PI;

use crate::interval::Interval;
use crate::result::{operand, Clipped, IntervalResult};
use crate::IntoIntervalResult;

fn unary(a: impl IntoIntervalResult, f: impl FnOnce(Interval) -> IntervalResult) -> IntervalResult {
    let a = a.into_interval_result();
    match operand(&a) {
        Ok(i) => f(i),
        Err(r) => r,
    }
}

/// True iff `base + n*period` falls inside `[x.lo - eps, x.hi + eps]` for
/// some integer `n` (§4.5 `containsExtremum`).
#[must_use]
pub fn contains_extremum(x: Interval, base: f64, period: f64, eps: f64) -> bool {
    let lo = x.lo - eps;
    let hi = x.hi + eps;
    let n_lo = ((lo - base) / period).ceil() as i64;
    let n_hi = ((hi - base) / period).floor() as i64;
    n_lo <= n_hi
}

const EPS: f64 = 1e-9;

#[must_use]
pub fn sin(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| {
        let mut i = a.map(f64::sin);
        if contains_extremum(a, PI / 2.0, 2.0 * PI, EPS) {
            i.hi = 1.0;
        }
        if contains_extremum(a, -PI / 2.0, 2.0 * PI, EPS) {
            i.lo = -1.0;
        }
        IntervalResult::Value(i)
    })
}

#[must_use]
pub fn cos(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| {
        let mut i = a.map(f64::cos);
        if contains_extremum(a, 0.0, 2.0 * PI, EPS) {
            i.hi = 1.0;
        }
        if contains_extremum(a, PI, 2.0 * PI, EPS) {
            i.lo = -1.0;
        }
        IntervalResult::Value(i)
    })
}

fn pole_guarded(a: Interval, base: f64, period: f64, f: impl Fn(f64) -> f64) -> IntervalResult {
    if contains_extremum(a, base, period, EPS) {
        IntervalResult::pole(base)
    } else {
        IntervalResult::Value(a.map(f))
    }
}

#[must_use]
pub fn tan(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| pole_guarded(a, PI / 2.0, PI, f64::tan))
}

#[must_use]
pub fn cot(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| pole_guarded(a, 0.0, PI, |x| 1.0 / x.tan()))
}

#[must_use]
pub fn sec(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| pole_guarded(a, PI / 2.0, PI, |x| 1.0 / x.cos()))
}

#[must_use]
pub fn csc(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| pole_guarded(a, 0.0, PI, |x| 1.0 / x.sin()))
}

fn clipped_inverse(a: Interval, domain: Interval, f: impl Fn(f64) -> f64) -> IntervalResult {
    if a.hi < domain.lo || a.lo > domain.hi {
        return IntervalResult::Empty;
    }
    let lo_clipped = a.lo < domain.lo;
    let hi_clipped = a.hi > domain.hi;
    if lo_clipped || hi_clipped {
        let clipped = Interval::new(a.lo.max(domain.lo), a.hi.min(domain.hi));
        let domain_clipped = match (lo_clipped, hi_clipped) {
            (true, true) => Clipped::Both,
            (true, false) => Clipped::Lo,
            (false, true) => Clipped::Hi,
            (false, false) => unreachable!("lo_clipped || hi_clipped guards this branch"),
        };
        return IntervalResult::partial(clipped.map(f), domain_clipped);
    }
    IntervalResult::Value(a.map(f))
}

#[must_use]
pub fn arcsin(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| clipped_inverse(a, Interval::new(-1.0, 1.0), f64::asin))
}

#[must_use]
pub fn arccos(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| clipped_inverse(a, Interval::new(-1.0, 1.0), f64::acos))
}

#[must_use]
pub fn arctan(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| IntervalResult::Value(a.map(f64::atan)))
}

/// `atan2(y, x)`: full `[-pi, pi]` conservative fallback when the input
/// rectangle can cross the negative x-axis with the origin inside
/// (documented open question — not refined further).
#[must_use]
pub fn atan2(y: impl IntoIntervalResult, x: impl IntoIntervalResult) -> IntervalResult {
    let y = y.into_interval_result();
    let x = x.into_interval_result();
    let iy = match operand(&y) {
        Ok(i) => i,
        Err(r) => return r,
    };
    let ix = match operand(&x) {
        Ok(i) => i,
        Err(r) => return r,
    };
    if ix.straddles_zero() && iy.straddles_zero() {
        return IntervalResult::Value(Interval::new(-PI, PI));
    }
    if ix.strictly_positive() {
        let corners = [
            iy.lo.atan2(ix.lo),
            iy.lo.atan2(ix.hi),
            iy.hi.atan2(ix.lo),
            iy.hi.atan2(ix.hi),
        ];
        let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        return IntervalResult::Value(Interval::new(lo, hi));
    }
    IntervalResult::Value(Interval::new(-PI, PI))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_clamps_to_one_when_the_peak_is_inside() {
        let result = sin(Interval::new(0.0, PI));
        let IntervalResult::Value(i) = result else {
            panic!("expected value, got {result:?}")
        };
        assert!((i.hi - 1.0).abs() < 1e-9);
    }

    #[test]
    fn tan_crossing_its_pole_is_singular() {
        let result = tan(Interval::new(1.0, 2.0));
        assert!(matches!(result, IntervalResult::Singular { .. }));
    }

    #[test]
    fn arcsin_outside_its_domain_is_empty() {
        assert!(matches!(arcsin(Interval::new(2.0, 3.0)), IntervalResult::Empty));
    }

    #[test]
    fn arcsin_straddling_the_domain_boundary_clips_to_partial() {
        let result = arcsin(Interval::new(0.5, 1.5));
        let IntervalResult::Partial { domain_clipped, .. } = result else {
            panic!("expected partial, got {result:?}")
        };
        assert_eq!(domain_clipped, Clipped::Hi);
    }

    #[test]
    fn atan2_with_the_origin_fully_inside_falls_back_to_the_full_range() {
        let result = atan2(Interval::new(-1.0, 1.0), Interval::new(-1.0, 1.0));
        let IntervalResult::Value(i) = result else {
            panic!("expected value, got {result:?}")
        };
        assert_eq!(i, Interval::new(-PI, PI));
    }
}
