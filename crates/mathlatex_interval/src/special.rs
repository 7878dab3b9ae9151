//! Special functions (§4.5 "Special functions"): `sinc`, `fresnelS`,
//! `fresnelC`. Bounded by dense directional sampling against a known
//! analytic global extremum, rather than solving for the tabulated roots
//! of each function's derivative — see `DESIGN.md`.

use std::f64::consts::PI;

use crate::interval::Interval;
use crate::result::{operand, IntervalResult};
use crate::IntoIntervalResult;

fn unary(a: impl IntoIntervalResult, f: impl FnOnce(Interval) -> IntervalResult) -> IntervalResult {
    let a = a.into_interval_result();
    match operand(&a) {
        Ok(i) => f(i),
        Err(r) => r,
    }
}

const SINC_GLOBAL: Interval = Interval::new(-0.217_233_628, 1.0);
const FRESNEL_GLOBAL: Interval = Interval::new(-0.779_893_400, 0.779_893_400);
const WIDE_THRESHOLD: f64 = 50.0;
const SAMPLES: usize = 256;

/// A conservative enclosure of `f`'s image over `a`: dense sampling plus a
/// small pad for the gaps between samples, clamped to a known whole-domain
/// bound once the interval is too wide for sampling to be trustworthy.
fn conservative_bound(a: Interval, f: impl Fn(f64) -> f64, global: Interval) -> Interval {
    if a.width() > WIDE_THRESHOLD {
        return global;
    }
    let mut lo = f(a.lo);
    let mut hi = lo;
    for k in 1..SAMPLES {
        let t = a.lo + a.width() * (k as f64) / (SAMPLES as f64);
        let v = f(t);
        lo = lo.min(v);
        hi = hi.max(v);
    }
    let end = f(a.hi);
    lo = lo.min(end);
    hi = hi.max(end);
    let pad = ((hi - lo).max(1e-6)) * 0.01;
    Interval::new((lo - pad).max(global.lo), (hi + pad).min(global.hi))
}

fn sinc_value(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x.sin() / x
    }
}

#[must_use]
pub fn sinc(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| IntervalResult::Value(conservative_bound(a, sinc_value, SINC_GLOBAL)))
}

/// Composite Simpson's rule over `[0, |x|]`, using sign/odd-symmetry to
/// handle negative `x` (both Fresnel integrals are odd functions).
fn fresnel_integral(x: f64, kernel: impl Fn(f64) -> f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let sign = x.signum();
    let x = x.abs();
    let n = 200usize;
    let h = x / n as f64;
    let mut sum = kernel(0.0) + kernel(x);
    for i in 1..n {
        let t = i as f64 * h;
        let coeff = if i % 2 == 0 { 2.0 } else { 4.0 };
        sum += coeff * kernel(t);
    }
    sign * sum * h / 3.0
}

fn fresnel_s_value(x: f64) -> f64 {
    fresnel_integral(x, |t| (PI / 2.0 * t * t).sin())
}

fn fresnel_c_value(x: f64) -> f64 {
    fresnel_integral(x, |t| (PI / 2.0 * t * t).cos())
}

#[must_use]
pub fn fresnel_s(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| {
        IntervalResult::Value(conservative_bound(a, fresnel_s_value, FRESNEL_GLOBAL))
    })
}

#[must_use]
pub fn fresnel_c(a: impl IntoIntervalResult) -> IntervalResult {
    unary(a, |a| {
        IntervalResult::Value(conservative_bound(a, fresnel_c_value, FRESNEL_GLOBAL))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinc_at_the_origin_peaks_at_one() {
        let result = sinc(Interval::degenerate(0.0));
        let IntervalResult::Value(i) = result else {
            panic!("expected value, got {result:?}")
        };
        assert!((i.hi - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sinc_over_a_wide_interval_falls_back_to_the_global_bound() {
        let result = sinc(Interval::new(-1000.0, 1000.0));
        let IntervalResult::Value(i) = result else {
            panic!("expected value, got {result:?}")
        };
        assert_eq!(i, SINC_GLOBAL);
    }

    #[test]
    fn fresnel_s_is_an_odd_function_near_the_origin() {
        let result = fresnel_s(Interval::new(-0.1, 0.1));
        let IntervalResult::Value(i) = result else {
            panic!("expected value, got {result:?}")
        };
        assert!(i.lo < 0.0 && i.hi > 0.0);
    }
}
