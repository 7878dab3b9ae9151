//! Tagged result every operation returns instead of panicking (§4.5
//! "Failure semantics: no interval operation ever panics; every domain
//! violation or pole maps to a tagged result the caller handles").

use crate::interval::Interval;

/// Which side of a jump discontinuity the function value at the probed
/// endpoint reflects.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Continuity {
    Left,
    Right,
}

/// Which bound of a `partial` enclosure came from clipping the input to a
/// function's domain, rather than from the input itself (§3 `partial{ v,
/// domainClipped: lo|hi|both }`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Clipped {
    /// The input's lower bound fell outside the domain.
    Lo,
    /// The input's upper bound fell outside the domain.
    Hi,
    /// Both bounds fell outside the domain.
    Both,
}

/// The outcome of one interval operation.
#[derive(Copy, Clone, Debug)]
pub enum IntervalResult {
    /// A fully enclosing interval.
    Value(Interval),
    /// The domain/range is empty (e.g. dividing by `[0, 0]`).
    Empty,
    /// No bound can be given; treat as `(-inf, inf)`.
    Entire,
    /// A pole (continuity `None`) or jump discontinuity (continuity
    /// `Some`) was found inside the input interval.
    Singular {
        at: f64,
        continuity: Option<Continuity>,
    },
    /// A conservative enclosure that holds everywhere the input interval
    /// avoids an excluded sub-region (e.g. a domain boundary the input
    /// straddles). Still usable for further arithmetic.
    Partial {
        value: Interval,
        domain_clipped: Clipped,
    },
}

impl IntervalResult {
    #[must_use]
    pub const fn pole(at: f64) -> Self {
        IntervalResult::Singular { at, continuity: None }
    }

    #[must_use]
    pub const fn jump(at: f64, continuity: Continuity) -> Self {
        IntervalResult::Singular {
            at,
            continuity: Some(continuity),
        }
    }

    #[must_use]
    pub const fn partial(value: Interval, domain_clipped: Clipped) -> Self {
        IntervalResult::Partial { value, domain_clipped }
    }

    /// The interval this result currently encloses, if it has one —
    /// `Value` and `Partial` both carry one; `Empty`/`Entire`/`Singular`
    /// don't (§4.5 "unwrap helper returns early").
    #[must_use]
    pub fn enclosing_interval(&self) -> Option<Interval> {
        match self {
            IntervalResult::Value(i) => Some(*i),
            IntervalResult::Partial { value, .. } => Some(*value),
            IntervalResult::Empty | IntervalResult::Entire | IntervalResult::Singular { .. } => None,
        }
    }

    /// Which bound was clipped to reach this result, if it's a `Partial`.
    #[must_use]
    pub fn domain_clipped(&self) -> Option<Clipped> {
        match self {
            IntervalResult::Partial { domain_clipped, .. } => Some(*domain_clipped),
            _ => None,
        }
    }
}

impl From<Interval> for IntervalResult {
    fn from(i: Interval) -> Self {
        IntervalResult::Value(i)
    }
}

/// Extract the operand interval from an `Interval | IntervalResult` input,
/// or short-circuit with the tagged result it already carries (§4.5's
/// "propagates error tags" unwrap helper).
pub(crate) fn operand(r: &IntervalResult) -> Result<Interval, IntervalResult> {
    r.enclosing_interval().ok_or(*r)
}

/// The clip tag a hull of two results should carry: agreement keeps the
/// shared tag, one side lacking a tag defers to the other, and genuine
/// disagreement (or neither side having one) falls back to `Both` since
/// the hull can no longer vouch for just one bound.
fn combine_clipped(a: Option<Clipped>, b: Option<Clipped>) -> Clipped {
    match (a, b) {
        (Some(x), Some(y)) if x == y => x,
        (Some(x), None) | (None, Some(x)) => x,
        _ => Clipped::Both,
    }
}

/// Union two results into one enclosure: hulls two intervals, and treats
/// `Empty` as an identity (used by `piecewise`'s `maybe` branch, §4.5/§8).
#[must_use]
pub fn union_results(a: IntervalResult, b: IntervalResult) -> IntervalResult {
    match (a, b) {
        (IntervalResult::Empty, other) | (other, IntervalResult::Empty) => other,
        (IntervalResult::Entire, _) | (_, IntervalResult::Entire) => IntervalResult::Entire,
        (IntervalResult::Singular { .. }, _) | (_, IntervalResult::Singular { .. }) => {
            match (a.enclosing_interval(), b.enclosing_interval()) {
                (Some(ia), Some(ib)) => {
                    IntervalResult::partial(ia.hull(&ib), combine_clipped(a.domain_clipped(), b.domain_clipped()))
                }
                (Some(i), None) | (None, Some(i)) => {
                    IntervalResult::partial(i, combine_clipped(a.domain_clipped(), b.domain_clipped()))
                }
                (None, None) => IntervalResult::Entire,
            }
        }
        (IntervalResult::Value(ia), IntervalResult::Value(ib)) => IntervalResult::Value(ia.hull(&ib)),
        (a, b) => {
            let ia = a.enclosing_interval();
            let ib = b.enclosing_interval();
            match (ia, ib) {
                (Some(ia), Some(ib)) => {
                    IntervalResult::partial(ia.hull(&ib), combine_clipped(a.domain_clipped(), b.domain_clipped()))
                }
                _ => IntervalResult::Entire,
            }
        }
    }
}
