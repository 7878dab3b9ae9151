//! In-band error recovery (§7 "Errors are recovered locally ... rather than
//! raised"). Every structural failure materializes as an `(Error, kind,
//! detail?)` node; nothing here ever panics or returns `Result::Err`.

use mathlatex_ir::{error_kind, ExprArena, ExprId, ExprNode, Name, StringInterner};

/// `(Error, 'missing')` — a structurally required operand that could not be parsed.
pub fn missing_operand(arena: &mut ExprArena, interner: &StringInterner) -> ExprId {
    arena.error(interner.intern(error_kind::MISSING), None)
}

/// `(Error, 'unexpected-token', token)`.
pub fn unexpected_token(arena: &mut ExprArena, interner: &StringInterner, text: &str) -> ExprId {
    let detail = arena.string(text);
    arena.error(interner.intern(error_kind::UNEXPECTED_TOKEN), Some(detail))
}

/// `(Error, 'expected-close-delimiter')`, metadata carrying the expected spelling.
pub fn expected_close_delimiter(
    arena: &mut ExprArena,
    interner: &StringInterner,
    expected: &str,
) -> ExprId {
    let detail = arena.string(expected);
    arena.error(
        interner.intern(error_kind::EXPECTED_CLOSE_DELIMITER),
        Some(detail),
    )
}

/// `(Error, 'invalid-number', rawText)`.
pub fn invalid_number(arena: &mut ExprArena, interner: &StringInterner, raw: &str) -> ExprId {
    let detail = arena.string(raw);
    arena.error(interner.intern(error_kind::INVALID_NUMBER), Some(detail))
}

/// Is `id` the generic `(Error, kind)` sentinel (used by matchfix candidate
/// retry and by big-operator body recovery to detect a dead end without
/// needing to know which specific error kind fired)?
#[must_use]
pub fn is_error(arena: &ExprArena, id: ExprId, interner: &StringInterner, kind: &str) -> bool {
    matches!(arena.get(id), ExprNode::Error { kind: k, .. } if interner.resolve(*k) == kind)
}

/// Is `id` any `(Error, ...)` node?
#[must_use]
pub fn is_any_error(arena: &ExprArena, id: ExprId) -> bool {
    matches!(arena.get(id), ExprNode::Error { .. })
}

#[must_use]
pub fn head_is(arena: &ExprArena, id: ExprId, name: Name) -> bool {
    arena.head_name(id) == Some(name)
}
