//! The MathJSON expression tree (§3 Data Model).
//!
//! Follows `ori_ir`'s "Flatten Everything" philosophy: rather than
//! `Box<ExprNode>` children, nodes are stored in an [`ExprArena`] and
//! referenced by the `Copy` index type [`ExprId`]. Application operand
//! lists live in a second flat pool addressed by [`ExprRange`], so
//! `foldAssociativeOperator` (§4.3.1, invariant 2 of §8) can build a new
//! n-ary application by pushing a fresh range without disturbing existing
//! nodes.

use crate::{Name, Number};

/// Index of one node in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    const fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        ExprId(index as u32)
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A contiguous range of operand ids in an arena's argument pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExprRange {
    start: u32,
    len: u32,
}

impl ExprRange {
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// The head of an application: usually a symbol, "rarely, another
/// expression" per §3.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprHead {
    Symbol(Name),
    Expr(ExprId),
}

/// One node of the MathJSON tree.
///
/// Invariants (§3): no `Application` has zero positional form — a bare head
/// is represented as `ExprNode::Symbol`, never an `Application` with an
/// empty operand range. A structurally missing operand is materialized as
/// `ExprNode::Error { kind: Missing, detail: None }`, never as an absent
/// slot — so `ExprRange::len()` always reflects the arity the grammar rule
/// expected, per the "missing-operand policy" of §4.3.1.
#[derive(Clone, Debug)]
pub enum ExprNode {
    Symbol(Name),
    Number(Number),
    String(Box<str>),
    /// `(head, op1, ..., opN)`.
    Application { head: ExprHead, args: ExprRange },
    /// A tagged dictionary / structural record (configuration payloads, e.g.
    /// a parsed `Dictionary` style option carried through for serialization).
    Dict(Vec<(Name, ExprId)>),
    /// `(Error, kind, detail?)` — see §7.
    Error { kind: Name, detail: Option<ExprId> },
}

/// Well-known error kinds materialized by the parser (§7). Interned lazily
/// by whoever constructs them; this module only names the strings.
pub mod error_kind {
    pub const MISSING: &str = "missing";
    pub const UNEXPECTED_TOKEN: &str = "unexpected-token";
    pub const EXPECTED_CLOSE_DELIMITER: &str = "expected-close-delimiter";
    pub const INVALID_NUMBER: &str = "invalid-number";
}

/// Arena owning every node of one parsed expression tree (or, during
/// parsing, of a parse-in-progress tree — the arena only ever grows).
#[derive(Default)]
pub struct ExprArena {
    nodes: Vec<ExprNode>,
    arg_pool: Vec<ExprId>,
}

impl ExprArena {
    #[must_use]
    pub fn new() -> Self {
        ExprArena::default()
    }

    #[must_use]
    pub fn get(&self, id: ExprId) -> &ExprNode {
        &self.nodes[id.index()]
    }

    /// Total nodes pushed so far, reachable or not (the arena only grows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn args(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.arg_pool[start..start + range.len()]
    }

    fn push_node(&mut self, node: ExprNode) -> ExprId {
        let id = ExprId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn push_args(&mut self, args: &[ExprId]) -> ExprRange {
        if args.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = u32::try_from(self.arg_pool.len()).unwrap_or(u32::MAX);
        self.arg_pool.extend_from_slice(args);
        ExprRange {
            start,
            len: u32::try_from(args.len()).unwrap_or(u32::MAX),
        }
    }

    pub fn symbol(&mut self, name: Name) -> ExprId {
        self.push_node(ExprNode::Symbol(name))
    }

    pub fn number(&mut self, n: Number) -> ExprId {
        self.push_node(ExprNode::Number(n))
    }

    pub fn string(&mut self, s: impl Into<Box<str>>) -> ExprId {
        self.push_node(ExprNode::String(s.into()))
    }

    /// Build `(head, args...)`. Per the §3 invariant, this must never be
    /// called with an empty `args` to represent a bare symbol — callers
    /// wanting that should use [`ExprArena::symbol`] directly.
    pub fn application(&mut self, head: Name, args: &[ExprId]) -> ExprId {
        let args = self.push_args(args);
        self.push_node(ExprNode::Application {
            head: ExprHead::Symbol(head),
            args,
        })
    }

    /// Application whose head is itself an expression (the "rarely, another
    /// expression" case of §3 — e.g. a serializer-round-tripped
    /// `InverseFunction(Sin)` applied to an argument, §4.3.6).
    pub fn application_with_expr_head(&mut self, head: ExprId, args: &[ExprId]) -> ExprId {
        let args = self.push_args(args);
        self.push_node(ExprNode::Application {
            head: ExprHead::Expr(head),
            args,
        })
    }

    pub fn dict(&mut self, entries: Vec<(Name, ExprId)>) -> ExprId {
        self.push_node(ExprNode::Dict(entries))
    }

    /// Materialize `(Error, kind, detail?)` (§7).
    pub fn error(&mut self, kind: Name, detail: Option<ExprId>) -> ExprId {
        self.push_node(ExprNode::Error { kind, detail })
    }

    /// The arity of an application, or `0` for a non-application node.
    #[must_use]
    pub fn arity(&self, id: ExprId) -> usize {
        match self.get(id) {
            ExprNode::Application { args, .. } => args.len(),
            _ => 0,
        }
    }

    /// The head name of an application whose head is a bare symbol, if any.
    #[must_use]
    pub fn head_name(&self, id: ExprId) -> Option<Name> {
        match self.get(id) {
            ExprNode::Application {
                head: ExprHead::Symbol(name),
                ..
            } => Some(*name),
            _ => None,
        }
    }

    /// The operands of an application, or `&[]` for any other node shape.
    #[must_use]
    pub fn application_args(&self, id: ExprId) -> &[ExprId] {
        match self.get(id) {
            ExprNode::Application { args, .. } => self.args(*args),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;

    #[test]
    fn application_round_trips_head_and_args() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let add = interner.intern("Add");
        let one = arena.number(Number::int(1));
        let two = arena.number(Number::int(2));
        let app = arena.application(add, &[one, two]);

        assert_eq!(arena.head_name(app), Some(add));
        assert_eq!(arena.arity(app), 2);
        assert_eq!(arena.args(match arena.get(app) {
            ExprNode::Application { args, .. } => *args,
            _ => unreachable!(),
        }), &[one, two]);
    }

    #[test]
    fn missing_operand_is_an_error_node_not_an_absent_slot() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let missing_kind = interner.intern(error_kind::MISSING);
        let plus = interner.intern("Add");
        let x = arena.symbol(interner.intern("x"));
        let missing = arena.error(missing_kind, None);
        let app = arena.application(plus, &[x, missing]);
        assert_eq!(arena.arity(app), 2);
    }
}
