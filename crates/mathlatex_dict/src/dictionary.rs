//! The indexed dictionary itself (§3 "Indexed dictionary", §4.2).

use rustc_hash::FxHashMap;

use mathlatex_diagnostic::Diagnostic;
use mathlatex_ir::{Name, StringInterner};

use crate::entry::{DefinitionEntry, EntryKind, Trigger, TriggerToken};
use crate::synonyms;
use crate::validate::{duplicate_name_warning, validate_entry};

/// `ids`, `defs`, per-kind trigger maps, `matchfixByOpen`, and `lookahead`
/// (§3). Immutable after [`index`] (§5: "The dictionary is immutable after
/// indexing; it may be safely shared across threads").
pub struct IndexedDictionary {
    defs: Vec<DefinitionEntry>,
    ids: FxHashMap<Name, usize>,
    /// Per-`EntryKind` trigger buckets, keyed by the first trigger token.
    /// Each bucket is insertion-ordered; consumers walk it in reverse for
    /// LIFO shadowing (§3: "later-registered defs are tried first").
    trigger_maps: FxHashMap<(EntryKind, TriggerToken), Vec<usize>>,
    symbol_triggers: FxHashMap<Name, Vec<usize>>,
    matchfix_by_open: FxHashMap<TriggerToken, Vec<usize>>,
    lookahead: usize,
}

fn trigger_len(t: &Trigger) -> usize {
    t.len()
}

/// Is `(open, close)` one of the conventional complementary pairs — `()`,
/// `[]`, `{}`, `<>`, `||`, or the double-bar `‖‖`? Used to sort
/// `matchfixByOpen` buckets so the common case (standard pairs, used by
/// interval notation and tuples/lists) is found before mixed pairs like
/// `(]`/`[)` (§4.2 "Rationale for sort order").
fn is_standard_pair(open: &Trigger, close: &Trigger) -> bool {
    let (Some(&TriggerToken::Char(o)), Some(&TriggerToken::Char(c))) =
        (open.first(), close.first())
    else {
        return false;
    };
    matches!(
        (o, c),
        ('(', ')') | ('[', ']') | ('{', '}') | ('<', '>') | ('|', '|')
    )
}

/// Build an [`IndexedDictionary`] from a list of entries, validating each
/// one and reporting rejections through `on_error` (§4.2, §7 "Dictionary
/// validation ... out-of-band via `onError` callback at index time; entry
/// is skipped but indexing continues").
pub fn index(
    entries: Vec<DefinitionEntry>,
    interner: &StringInterner,
    mut on_error: impl FnMut(Diagnostic),
) -> IndexedDictionary {
    let mut defs = Vec::with_capacity(entries.len());
    let mut ids: FxHashMap<Name, usize> = FxHashMap::default();
    let mut trigger_maps: FxHashMap<(EntryKind, TriggerToken), Vec<usize>> = FxHashMap::default();
    let mut symbol_triggers: FxHashMap<Name, Vec<usize>> = FxHashMap::default();
    let mut matchfix_by_open: FxHashMap<TriggerToken, Vec<usize>> = FxHashMap::default();
    let mut lookahead = 1usize;

    for entry in entries {
        if let Some(diag) = validate_entry(&entry, interner) {
            on_error(diag);
            continue;
        }

        if let Some(name) = entry.name {
            if ids.contains_key(&name) {
                on_error(duplicate_name_warning(interner.resolve(name)));
            }
        }

        let index = defs.len();

        if let Some(t) = &entry.latex_trigger {
            lookahead = lookahead.max(trigger_len(t));
        }

        if entry.kind == EntryKind::Matchfix {
            if let Some(open) = &entry.open_trigger {
                if let Some(&key) = open.first() {
                    matchfix_by_open.entry(key).or_default().push(index);
                }
            }
        } else if let Some(key) = entry.trigger_key() {
            trigger_maps.entry((entry.kind, key)).or_default().push(index);
        } else if let Some(sym) = entry.symbol_trigger {
            symbol_triggers.entry(sym).or_default().push(index);
        }

        if let Some(name) = entry.name {
            ids.insert(name, index);
        }

        defs.push(entry);
    }

    // LIFO order so later-registered defs (user overrides) are tried first
    // (§3 "one map per kind: trigger string → entries (LIFO order)").
    for bucket in trigger_maps.values_mut() {
        bucket.reverse();
    }
    for bucket in symbol_triggers.values_mut() {
        bucket.reverse();
    }

    // Re-sort matchfix buckets: standard pairs first, each partition in
    // reverse-registration (LIFO) order.
    for bucket in matchfix_by_open.values_mut() {
        let (standard, mixed): (Vec<usize>, Vec<usize>) = bucket.iter().copied().partition(|&i| {
            let e = &defs[i];
            match (&e.open_trigger, &e.close_trigger) {
                (Some(o), Some(c)) => is_standard_pair(o, c),
                _ => false,
            }
        });
        let mut ordered = standard;
        ordered.reverse();
        let mut mixed_rev = mixed;
        mixed_rev.reverse();
        ordered.extend(mixed_rev);
        *bucket = ordered;
    }

    IndexedDictionary {
        defs,
        ids,
        trigger_maps,
        symbol_triggers,
        matchfix_by_open,
        lookahead,
    }
}

impl IndexedDictionary {
    #[must_use]
    pub fn by_name(&self, name: Name) -> Option<&DefinitionEntry> {
        self.ids.get(&name).map(|&i| &self.defs[i])
    }

    #[must_use]
    pub fn defs(&self) -> &[DefinitionEntry] {
        &self.defs
    }

    #[must_use]
    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// Candidate entries for `kind` whose trigger begins with `key`, most
    /// recently registered first (§3 "LIFO order so later-registered defs
    /// are tried first").
    #[must_use]
    pub fn by_trigger(&self, kind: EntryKind, key: TriggerToken) -> &[usize] {
        self.trigger_maps
            .get(&(kind, key))
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn by_symbol_trigger(&self, name: Name) -> &[usize] {
        self.symbol_triggers.get(&name).map_or(&[], Vec::as_slice)
    }

    /// Matchfix candidates for an opening token, standard pairs first
    /// (§4.2 "Lookup performance").
    #[must_use]
    pub fn matchfix_by_open(&self, open: TriggerToken) -> &[usize] {
        self.matchfix_by_open.get(&open).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> &DefinitionEntry {
        &self.defs[index]
    }
}

/// Expand `entries` with the synonymization rules of §4.2 (`^X`/`_X` braced
/// form; delimiter shorthand) before indexing.
#[must_use]
pub fn prepare(entries: Vec<DefinitionEntry>, interner: &StringInterner) -> Vec<DefinitionEntry> {
    synonyms::expand(entries, interner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Associativity;

    #[test]
    fn standard_pairs_sort_before_mixed_pairs() {
        let interner = StringInterner::new();
        let entries = vec![
            DefinitionEntry::new(EntryKind::Matchfix).with_matchfix_triggers(
                vec![TriggerToken::Char('(')],
                vec![TriggerToken::Char(']')],
            ),
            DefinitionEntry::new(EntryKind::Matchfix).with_matchfix_triggers(
                vec![TriggerToken::Char('(')],
                vec![TriggerToken::Char(')')],
            ),
        ];
        let dict = index(entries, &interner, |_| {});
        let candidates = dict.matchfix_by_open(TriggerToken::Char('('));
        assert_eq!(candidates.len(), 2);
        let first = dict.entry(candidates[0]);
        assert_eq!(first.close_trigger, Some(vec![TriggerToken::Char(')')]));
    }

    #[test]
    fn invalid_entries_are_skipped_not_fatal() {
        let interner = StringInterner::new();
        let bad = DefinitionEntry::new(EntryKind::Infix)
            .with_latex_trigger(vec![TriggerToken::Char('+')]); // no precedence
        let good = DefinitionEntry::new(EntryKind::Infix)
            .with_latex_trigger(vec![TriggerToken::Char('-')])
            .with_precedence(275)
            .with_associativity(Associativity::Left);
        let mut errors = Vec::new();
        let dict = index(vec![bad, good], &interner, |d| errors.push(d));
        assert_eq!(errors.len(), 1);
        assert_eq!(dict.defs().len(), 1);
    }
}
