//! Lexical scope stack (§3 "Parser state", §9 "Lexical scope stack").
//!
//! Each quantifier body, big-operator, and matchfix scope pushes its own
//! frame; symbol lookups would walk the chain if this crate tracked symbol
//! *values* — it only tracks which names are locally bound, which is all
//! `x^2` vs. a sum's bound index `i` needs to avoid leaking across frames.

use rustc_hash::FxHashSet;

use mathlatex_ir::Name;

/// One lexical frame: the names it binds, and whether it is a quantifier
/// body (enabling predicate recognition, §4.3.7).
#[derive(Default)]
struct Frame {
    bound: FxHashSet<Name>,
    in_quantifier: bool,
}

/// A stack of lexical scopes, innermost last. Lifetime: one parse (§3).
#[derive(Default)]
pub struct ScopeStack {
    frames: Vec<Frame>,
}

impl ScopeStack {
    #[must_use]
    pub fn new() -> Self {
        ScopeStack { frames: Vec::new() }
    }

    pub fn push(&mut self, in_quantifier: bool) {
        self.frames.push(Frame {
            bound: FxHashSet::default(),
            in_quantifier,
        });
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn bind(&mut self, name: Name) {
        if let Some(frame) = self.frames.last_mut() {
            frame.bound.insert(name);
        }
    }

    /// Is `name` bound in the innermost frame (scope isolation, §8 invariant 4)?
    #[must_use]
    pub fn is_locally_bound(&self, name: Name) -> bool {
        self.frames.last().is_some_and(|f| f.bound.contains(&name))
    }

    /// Is the innermost frame a quantifier body (§4.3.7 "push a scope flagged
    /// as `inQuantifier`")?
    #[must_use]
    pub fn in_quantifier(&self) -> bool {
        self.frames.last().is_some_and(|f| f.in_quantifier)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_bound_name_does_not_leak_to_the_outer_frame() {
        let mut stack = ScopeStack::new();
        stack.push(false);
        let i = test_name(0);
        stack.push(true);
        stack.bind(i);
        assert!(stack.is_locally_bound(i));
        stack.pop();
        assert!(!stack.is_locally_bound(i));
    }

    #[test]
    fn quantifier_flag_is_only_set_on_the_frame_that_requested_it() {
        let mut stack = ScopeStack::new();
        stack.push(false);
        assert!(!stack.in_quantifier());
        stack.push(true);
        assert!(stack.in_quantifier());
    }

    // `Name` has no public constructor outside `mathlatex_ir`; tests here
    // only need *some* two distinct values, produced via an interner.
    fn test_name(n: u32) -> Name {
        let interner = mathlatex_ir::StringInterner::new();
        for i in 0..=n {
            interner.intern(&format!("n{i}"));
        }
        interner.intern(&format!("n{n}"))
    }
}
