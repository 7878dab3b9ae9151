//! Interval arithmetic for bounding the image of a real function over a
//! range (§4.5). Every operation is total: domain violations, poles, and
//! jump discontinuities are reported through [`IntervalResult`] rather than
//! a panic.

mod arithmetic;
mod compare;
mod elementary;
mod interval;
mod result;
mod special;
mod trig;

pub use arithmetic::{add, div, mul, sub, IntoIntervalResult};
pub use compare::{greater, greater_equal, less, less_equal, piecewise, Tri};
pub use elementary::{
    abs, ceil, exp, floor, fract, ln, log10, log2, max, min, modulo, pow_f64, pow_i32, round, sign, sqrt,
};
pub use interval::Interval;
pub use result::{union_results, Clipped, Continuity, IntervalResult};
pub use special::{fresnel_c, fresnel_s, sinc};
pub use trig::{arccos, arcsin, arctan, atan2, contains_extremum, cos, cot, csc, sec, sin, tan};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_div_propagates_a_pole_through_the_chain() {
        let sum = add(Interval::new(-1.0, 2.0), Interval::new(-1.0, -1.0));
        let result = div(Interval::new(1.0, 1.0), sum);
        assert!(matches!(result, IntervalResult::Singular { continuity: None, .. }));
    }

    #[test]
    fn pow_of_an_already_empty_operand_stays_empty() {
        let missing = sqrt(Interval::new(-4.0, -1.0));
        assert!(matches!(missing, IntervalResult::Empty));
        let result = pow_i32(missing, 2);
        assert!(matches!(result, IntervalResult::Empty));
    }

    #[test]
    fn piecewise_over_sign_of_the_input_matches_the_decided_branch() {
        let x = Interval::new(2.0, 3.0);
        let cond = greater(x, Interval::degenerate(0.0));
        let on_true = mul(x, Interval::degenerate(2.0));
        let on_false = mul(x, Interval::degenerate(-2.0));
        let result = piecewise(cond, on_true, on_false);
        let IntervalResult::Value(i) = result else {
            panic!("expected a value result")
        };
        assert_eq!(i, Interval::new(4.0, 6.0));
    }

    #[test]
    fn piecewise_over_an_undecided_sign_hulls_both_outcomes() {
        let x = Interval::new(-1.0, 1.0);
        let cond = greater_equal(x, Interval::degenerate(0.0));
        assert_eq!(cond, Tri::Maybe);
        let on_true = Interval::new(0.0, 1.0).into_interval_result();
        let on_false = Interval::new(-1.0, 0.0).into_interval_result();
        let result = piecewise(cond, on_true, on_false);
        let IntervalResult::Value(i) = result else {
            panic!("expected a value result")
        };
        assert_eq!(i, Interval::new(-1.0, 1.0));
    }

    #[test]
    fn sin_squared_plus_cos_squared_encloses_one() {
        let x = Interval::new(0.3, 1.1);
        let s = sin(x);
        let c = cos(x);
        let IntervalResult::Value(s) = s else {
            panic!("expected a value result")
        };
        let IntervalResult::Value(c) = c else {
            panic!("expected a value result")
        };
        let IntervalResult::Value(sum) = add(pow_i32(s, 2), pow_i32(c, 2)) else {
            panic!("expected a value result")
        };
        assert!(sum.contains(1.0));
    }
}
