//! Raw token tag produced by the low-level scanner.

/// Raw token kind produced by [`crate::RawScanner`].
///
/// Standalone equivalent of `mathlatex_ir::TokenKind`, with no IR
/// dependency — the cooking layer (`mathlatex_lexer`) maps `RawTag` to
/// `TokenKind` during interning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RawTag {
    /// A backslash command: `\` followed by one or more ASCII letters and an
    /// optional trailing `*` (§4.1: "`\[a-zA-Z]+` greedy, optional `*`").
    Command,
    /// `{` mapped to the synthetic open-group token.
    BraceOpen,
    /// `}` mapped to the synthetic close-group token.
    BraceClose,
    /// A maximal run of ASCII digits (§4.1: "digit sequences").
    Digits,
    /// A single Unicode letter (not part of a command).
    Letter,
    /// A single character that is neither a letter, digit, brace, nor
    /// recognized whitespace — operators, punctuation, `~`, etc.
    Symbol,
    /// A maximal run of ASCII whitespace (space, tab, newline).
    Whitespace,
    /// End of input.
    Eof,
}

/// One `(tag, length)` pair: the raw token's kind and its length in bytes,
/// starting at the cursor position the scanner call began at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
