//! Entry synonymization (§4.2): `^X`/`_X` braced-form registration and
//! delimiter shorthand expansion.

use mathlatex_ir::StringInterner;

use crate::entry::{DefinitionEntry, EntryKind, TriggerToken};

/// An infix/prefix/postfix entry whose trigger is the two-token sequence
/// `[^X]` or `[_X]` automatically gets a parallel braced-form entry
/// `[^, <{>, X, <}>]`, so `x^+` and `x^{+}` parse identically.
fn braced_synonym(entry: &DefinitionEntry) -> Option<DefinitionEntry> {
    let trigger = entry.latex_trigger.as_ref()?;
    let [sigil @ (TriggerToken::Char('^') | TriggerToken::Char('_')), payload] = trigger.as_slice()
    else {
        return None;
    };
    let braced = vec![*sigil, TriggerToken::GroupOpen, *payload, TriggerToken::GroupClose];
    let mut clone = entry.clone();
    clone.latex_trigger = Some(braced);
    Some(clone)
}

/// String shorthands for matchfix `openTrigger`/`closeTrigger` expand to
/// every LaTeX spelling of that delimiter (§4.2, e.g. `[` → `\lbrack`, `\[`,
/// `[`). `||` (the double-bar shorthand, distinct from single `|`) is
/// recognized by trigger shape rather than by a single character.
fn delimiter_spellings(shorthand: char) -> &'static [&'static str] {
    match shorthand {
        '(' => &["("],
        ')' => &[")"],
        '[' => &[r"\lbrack", r"\[", "["],
        ']' => &[r"\rbrack", r"\]", "]"],
        '{' => &[r"\{", r"\lbrace"],
        '}' => &[r"\}", r"\rbrace"],
        '<' => &[r"\langle"],
        '>' => &[r"\rangle"],
        '|' => &["|", r"\vert", r"\lvert"],
        _ => &[],
    }
}

fn double_bar_spellings() -> &'static [&'static str] {
    &["||", r"\Vert", r"\lVert"]
}

/// Expand a matchfix entry's shorthand `openTrigger` into one entry per
/// LaTeX spelling, all pointing at the same semantics (just distinct
/// triggers). Non-shorthand triggers (already a specific command, or a
/// multi-character sequence other than `||`) pass through unchanged.
fn expand_delimiter_entry(
    entry: &DefinitionEntry,
    interner: &StringInterner,
) -> Vec<DefinitionEntry> {
    let Some(open) = &entry.open_trigger else {
        return vec![entry.clone()];
    };
    let spellings: &[&str] = match open.as_slice() {
        [TriggerToken::Char('|'), TriggerToken::Char('|')] => double_bar_spellings(),
        [TriggerToken::Char(c)] => delimiter_spellings(*c),
        _ => &[],
    };
    if spellings.len() <= 1 {
        return vec![entry.clone()];
    }
    spellings
        .iter()
        .map(|spelling| {
            let mut e = entry.clone();
            e.open_trigger = Some(spelling_to_trigger(spelling, interner));
            e
        })
        .collect()
}

fn spelling_to_trigger(spelling: &str, interner: &StringInterner) -> Vec<TriggerToken> {
    if let Some(name) = spelling.strip_prefix('\\') {
        vec![TriggerToken::Command(interner.intern(name))]
    } else {
        spelling
            .chars()
            .map(|c| match c {
                '{' => TriggerToken::GroupOpen,
                '}' => TriggerToken::GroupClose,
                other => TriggerToken::Char(other),
            })
            .collect()
    }
}

/// Run all synonymization passes over a raw entry list before indexing.
#[must_use]
pub fn expand(entries: Vec<DefinitionEntry>, interner: &StringInterner) -> Vec<DefinitionEntry> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let expanded = if entry.kind == EntryKind::Matchfix {
            expand_delimiter_entry(&entry, interner)
        } else {
            vec![entry.clone()]
        };
        for e in expanded {
            if let Some(syn) = braced_synonym(&e) {
                out.push(syn);
            }
            out.push(e);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Associativity;

    #[test]
    fn sigil_trigger_gets_a_braced_synonym() {
        let interner = StringInterner::new();
        let entry = DefinitionEntry::new(EntryKind::Infix)
            .with_latex_trigger(vec![TriggerToken::Char('^'), TriggerToken::Char('+')])
            .with_associativity(Associativity::Left);
        let expanded = expand(vec![entry], &interner);
        assert_eq!(expanded.len(), 2);
        assert_eq!(
            expanded[0].latex_trigger,
            Some(vec![
                TriggerToken::Char('^'),
                TriggerToken::GroupOpen,
                TriggerToken::Char('+'),
                TriggerToken::GroupClose,
            ])
        );
    }

    #[test]
    fn non_sigil_trigger_is_unaffected() {
        let interner = StringInterner::new();
        let entry = DefinitionEntry::new(EntryKind::Infix)
            .with_latex_trigger(vec![TriggerToken::Char('+')])
            .with_associativity(Associativity::Left);
        let expanded = expand(vec![entry], &interner);
        assert_eq!(expanded.len(), 1);
    }
}
