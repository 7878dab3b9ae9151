//! Interned identifier.

/// An interned string: a MathJSON identifier, a command name, or a symbol.
///
/// `Name` is `Copy` and compares by index, not by string content — all
/// equality checks downstream (dictionary lookup, scope-stack symbol
/// comparison) are O(1) integer comparisons.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Name(u32);

impl Name {
    #[inline]
    pub(crate) const fn from_index(index: u32) -> Self {
        Name(index)
    }

    #[inline]
    pub(crate) const fn index(self) -> u32 {
        self.0
    }
}
