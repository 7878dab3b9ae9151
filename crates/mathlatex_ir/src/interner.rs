//! String interner for identifiers and command names.
//!
//! Simplified relative to the teacher's sharded interner: this crate has no
//! Salsa-style concurrent query engine contending on the interner, so a
//! single `RwLock` around one hash map is sufficient and removes a layer of
//! indexing indirection the sharded design exists to amortize.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

struct InternerInner {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Interns strings to [`Name`] handles with O(1) lookup and equality.
///
/// Shareable across threads via `&StringInterner` (interior `RwLock`); one
/// instance backs one [`crate::Token`] stream plus the [`crate::ExprArena`]
/// produced from it.
pub struct StringInterner {
    inner: RwLock<InternerInner>,
}

impl StringInterner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(InternerInner {
                map: FxHashMap::default(),
                strings: Vec::with_capacity(256),
            }),
        }
    }

    /// Intern `s`, returning its handle. Interning the same text twice
    /// returns the same handle.
    pub fn intern(&self, s: &str) -> Name {
        {
            let guard = self.inner.read();
            if let Some(&index) = guard.map.get(s) {
                return Name::from_index(index);
            }
        }
        let mut guard = self.inner.write();
        if let Some(&index) = guard.map.get(s) {
            return Name::from_index(index);
        }
        // Leak is intentional and bounded by dictionary/program size: the
        // interner lives for the duration of one parse (or one shared
        // dictionary), and interned strings are referenced by `Name` for
        // that entire lifetime, so giving them `'static` storage avoids a
        // lifetime parameter threading through every IR type.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let index = u32::try_from(guard.strings.len()).unwrap_or(u32::MAX);
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Name::from_index(index)
    }

    /// Resolve a previously interned [`Name`] back to its string.
    #[must_use]
    pub fn resolve(&self, name: Name) -> &'static str {
        let guard = self.inner.read();
        guard.strings[name.index() as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_the_same_string_twice_returns_the_same_name() {
        let interner = StringInterner::new();
        let a = interner.intern("ForAll");
        let b = interner.intern("ForAll");
        assert_eq!(a, b);
        assert_eq!(interner.resolve(a), "ForAll");
    }

    #[test]
    fn distinct_strings_get_distinct_names() {
        let interner = StringInterner::new();
        let a = interner.intern("Sum");
        let b = interner.intern("Product");
        assert_ne!(a, b);
    }
}
