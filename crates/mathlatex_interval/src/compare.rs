//! Three-valued comparisons and `piecewise` (§4.5 "Comparisons", §8
//! "Testable Properties": `not(less(a,b)) = greaterEqual(b,a)`, `and` is
//! idempotent).

use crate::interval::Interval;
use crate::result::{union_results, IntervalResult};
use crate::IntoIntervalResult;

/// A comparison whose truth can't be decided from bounds alone: the two
/// intervals overlap in a way that makes both outcomes possible.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tri {
    True,
    False,
    Maybe,
}

impl Tri {
    #[must_use]
    pub const fn not(self) -> Tri {
        match self {
            Tri::True => Tri::False,
            Tri::False => Tri::True,
            Tri::Maybe => Tri::Maybe,
        }
    }

    #[must_use]
    pub const fn and(self, other: Tri) -> Tri {
        match (self, other) {
            (Tri::False, _) | (_, Tri::False) => Tri::False,
            (Tri::True, Tri::True) => Tri::True,
            _ => Tri::Maybe,
        }
    }

    #[must_use]
    pub const fn or(self, other: Tri) -> Tri {
        match (self, other) {
            (Tri::True, _) | (_, Tri::True) => Tri::True,
            (Tri::False, Tri::False) => Tri::False,
            _ => Tri::Maybe,
        }
    }
}

fn compare(a: Interval, b: Interval) -> Tri {
    if a.hi < b.lo {
        Tri::True
    } else if a.lo >= b.hi {
        Tri::False
    } else {
        Tri::Maybe
    }
}

fn binary_operands(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> Option<(Interval, Interval)> {
    let a = a.into_interval_result().enclosing_interval()?;
    let b = b.into_interval_result().enclosing_interval()?;
    Some((a, b))
}

/// `less(a, b)`: true iff every value `a` can take is below every value `b`
/// can take, false iff the reverse, maybe when the ranges overlap. Operands
/// without an enclosing interval (`empty`/`entire`/`singular`) are
/// undecidable.
#[must_use]
pub fn less(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> Tri {
    match binary_operands(a, b) {
        Some((a, b)) => compare(a, b),
        None => Tri::Maybe,
    }
}

#[must_use]
pub fn greater(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> Tri {
    less(b, a)
}

#[must_use]
pub fn less_equal(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> Tri {
    greater(a, b).not()
}

#[must_use]
pub fn greater_equal(a: impl IntoIntervalResult, b: impl IntoIntervalResult) -> Tri {
    less(a, b).not()
}

/// `piecewise(x, cond, on_true, on_false)`: when `cond` decides, returns the
/// matching branch's result; when `cond` is `maybe`, hulls both branches
/// together so the caller still gets a sound (if looser) enclosure (§4.5,
/// §8's `piecewise` law).
#[must_use]
pub fn piecewise(cond: Tri, on_true: IntervalResult, on_false: IntervalResult) -> IntervalResult {
    match cond {
        Tri::True => on_true,
        Tri::False => on_false,
        Tri::Maybe => union_results(on_true, on_false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn less_is_true_when_the_ranges_are_fully_separated() {
        assert_eq!(less(Interval::new(1.0, 2.0), Interval::new(3.0, 4.0)), Tri::True);
    }

    #[test]
    fn less_is_maybe_when_the_ranges_overlap() {
        assert_eq!(less(Interval::new(1.0, 3.0), Interval::new(2.0, 4.0)), Tri::Maybe);
    }

    #[test]
    fn not_of_less_equals_greater_equal_of_the_swapped_args() {
        let a = Interval::new(1.0, 2.0);
        let b = Interval::new(3.0, 4.0);
        assert_eq!(less(a, b).not(), greater_equal(b, a));
    }

    #[test]
    fn and_is_idempotent() {
        for v in [Tri::True, Tri::False, Tri::Maybe] {
            assert_eq!(v.and(v), v);
        }
    }

    #[test]
    fn piecewise_on_a_decided_condition_picks_the_matching_branch() {
        let t = IntervalResult::Value(Interval::degenerate(1.0));
        let f = IntervalResult::Value(Interval::degenerate(2.0));
        let IntervalResult::Value(i) = piecewise(Tri::True, t, f) else {
            panic!("expected a value result")
        };
        assert_eq!(i, Interval::degenerate(1.0));
    }

    #[test]
    fn piecewise_on_an_undecided_condition_hulls_both_branches() {
        let t = IntervalResult::Value(Interval::degenerate(1.0));
        let f = IntervalResult::Value(Interval::degenerate(2.0));
        let IntervalResult::Value(i) = piecewise(Tri::Maybe, t, f) else {
            panic!("expected a value result")
        };
        assert_eq!(i, Interval::new(1.0, 2.0));
    }
}
