//! Entry validation rules (§4.2).

use mathlatex_diagnostic::{Diagnostic, ErrorCode};
use mathlatex_ir::{Span, StringInterner};

use crate::entry::{DefinitionEntry, EntryKind};

/// A MathJSON identifier is `[\p{XID_Start}_][\p{XID_Continue}]*` (§2 of
/// `SPEC_FULL.md`); Unicode letter-or-underscore start, letter/digit/
/// underscore continuation.
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Validate one entry against §4.2's rejection rules. Returns `Some`
/// diagnostic if the entry should be skipped (warning — indexing
/// continues), `None` if the entry is admissible.
pub fn validate_entry(entry: &DefinitionEntry, interner: &StringInterner) -> Option<Diagnostic> {
    let name_text = entry.name.map(|n| interner.resolve(n));

    if let Some(name) = name_text {
        if !is_valid_identifier(name) {
            return Some(Diagnostic::warning(
                ErrorCode::DictInvalidIdentifier,
                format!("`{name}` is not a valid MathJSON identifier"),
            ));
        }
    }

    if let Some(sym) = entry.symbol_trigger {
        let text = interner.resolve(sym);
        if !is_valid_identifier(text) {
            return Some(Diagnostic::warning(
                ErrorCode::DictInvalidIdentifier,
                format!("symbolTrigger `{text}` is not a valid MathJSON identifier"),
            ));
        }
    }

    if entry.kind == EntryKind::Matchfix {
        match (&entry.open_trigger, &entry.close_trigger) {
            (Some(_), Some(_)) => {}
            _ => {
                return Some(Diagnostic::error(
                    ErrorCode::DictMatchfixTriggerMismatch,
                    "matchfix entry requires both openTrigger and closeTrigger",
                ));
            }
        }
    }

    if entry.kind.requires_precedence() && !entry.is_sigil_triggered() && entry.precedence.is_none()
    {
        return Some(Diagnostic::error(
            ErrorCode::DictMissingPrecedence,
            format!("{} entry is missing precedence", entry.kind.as_str()),
        ));
    }

    if entry.is_sigil_triggered() && entry.precedence.is_some() {
        return Some(Diagnostic::error(
            ErrorCode::DictSigilPrecedenceOverride,
            "`^X`/`_X`-triggered entries have precedence fixed at 720 and must not override it",
        ));
    }

    let has_trigger = entry.latex_trigger.is_some()
        || entry.symbol_trigger.is_some()
        || entry.open_trigger.is_some();
    if !has_trigger && entry.name.is_none() && entry.kind != EntryKind::Environment {
        return Some(Diagnostic::error(
            ErrorCode::DictNoTriggerOrName,
            "entry has neither a trigger nor a name",
        ));
    }

    None
}

/// Returns `true` if `a` and `b` share the same `name` (duplicate-name
/// policy §4.2: warning, last-wins, not fatal).
#[must_use]
pub fn is_duplicate_name(a: &DefinitionEntry, b: &DefinitionEntry) -> bool {
    matches!((a.name, b.name), (Some(x), Some(y)) if x == y)
}

#[must_use]
pub fn duplicate_name_warning(name: &str) -> Diagnostic {
    Diagnostic::warning(
        ErrorCode::DictDuplicateName,
        format!("duplicate definition name `{name}`; last registration wins"),
    )
    .with_label(Span::DUMMY, "later registration shadows this one")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_may_start_with_underscore_or_letter() {
        assert!(is_valid_identifier("_hidden"));
        assert!(is_valid_identifier("gcd"));
        assert!(is_valid_identifier("x1"));
        assert!(!is_valid_identifier("1x"));
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn infix_without_precedence_is_rejected() {
        let interner = StringInterner::new();
        let entry = DefinitionEntry::new(EntryKind::Infix)
            .with_latex_trigger(vec![crate::entry::TriggerToken::Char('+')]);
        let diag = validate_entry(&entry, &interner);
        assert!(diag.is_some());
        assert_eq!(diag.unwrap().code, ErrorCode::DictMissingPrecedence);
    }

    #[test]
    fn sigil_triggered_infix_skips_precedence_requirement() {
        let interner = StringInterner::new();
        let entry = DefinitionEntry::new(EntryKind::Infix).with_latex_trigger(vec![
            crate::entry::TriggerToken::Char('^'),
            crate::entry::TriggerToken::Char('+'),
        ]);
        assert!(validate_entry(&entry, &interner).is_none());
    }
}
