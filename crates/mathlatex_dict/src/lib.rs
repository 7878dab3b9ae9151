//! Indexed dictionary of LaTeX definition entries (§3, §4.2).
//!
//! Construction is two-phase: [`dictionary::prepare`] runs synonymization
//! (`^X`/`_X` braced forms, delimiter shorthand expansion), then
//! [`dictionary::index`] validates and buckets the expanded entries into
//! the trigger maps `mathlatex_parse` consults.

mod builtins;
mod dictionary;
mod entry;
mod synonyms;
mod validate;

pub use builtins::{precedence, standard_entries};
pub use dictionary::{index, prepare, IndexedDictionary};
pub use entry::{
    ArgumentStyle, Associativity, DefinitionEntry, EntryKind, ParseHook, SerializeHook, Trigger,
    TriggerToken,
};
pub use validate::{duplicate_name_warning, is_duplicate_name, is_valid_identifier, validate_entry};

#[cfg(test)]
mod tests {
    use super::*;
    use mathlatex_ir::StringInterner;

    #[test]
    fn the_standard_dictionary_indexes_without_hard_errors() {
        let interner = StringInterner::new();
        let entries = prepare(standard_entries(&interner), &interner);
        let mut errors = Vec::new();
        let dict = index(entries, &interner, |d| errors.push(d));
        assert!(!dict.defs().is_empty());
        assert!(dict.lookahead() >= 1);
    }
}
