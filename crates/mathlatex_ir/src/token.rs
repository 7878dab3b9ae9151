//! Tokenizer output types (§4.1).

use crate::{Name, Span};

/// Classification of a "visual space" token — LaTeX spacing a parser may
/// consume between tokens without it carrying semantic weight, per the
/// GLOSSARY entry. Preserved as its own token (not dropped at tokenize time)
/// so a parser can opt in to visual-space-sensitive grammar (DMS notation,
/// `\,dx` differential recognition in §4.3.4 step 6).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum VisualSpaceKind {
    /// `\,` thin space.
    Thin,
    /// `\;` thick space.
    Thick,
    /// `\quad` / `\qquad`.
    Quad,
    /// `~` non-breaking space.
    Tie,
    /// Plain ASCII whitespace runs in the source.
    Plain,
}

/// The kind of one atomic token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// A backslash command, e.g. `\frac`, `\sum`, `\sin`. `starred` records
    /// a trailing `*` (`\int*`-style variants some dictionaries register).
    Command { name: Name, starred: bool },
    /// Synthetic open-group token `<{>`.
    GroupOpen,
    /// Synthetic close-group token `<}>`.
    GroupClose,
    /// A single literal character: a letter, a digit, or punctuation not
    /// otherwise classified. Multi-character runs (numbers, words) are left
    /// as sequences of `Char` tokens — merging them into literals is a
    /// parser/lexer-cooking decision (§4.1), not a raw-tokenizer one.
    Char(char),
    /// Visual (non-semantic) spacing.
    Space(VisualSpaceKind),
    /// A token the tokenizer didn't recognize, preserved verbatim so that
    /// "parsing, not tokenizing, decides error policy" (§4.1).
    Unknown(Name),
}

impl TokenKind {
    #[must_use]
    pub const fn is_space(&self) -> bool {
        matches!(self, TokenKind::Space(_))
    }

    #[must_use]
    pub const fn is_group_open(&self) -> bool {
        matches!(self, TokenKind::GroupOpen)
    }

    #[must_use]
    pub const fn is_group_close(&self) -> bool {
        matches!(self, TokenKind::GroupClose)
    }
}

/// One atomic token with its source span (token-index range into the
/// original character stream — see [`crate::Span`]).
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// A tokenized LaTeX source, plus a dense discriminant-tag array parallel to
/// `tokens` for fast kind checks — mirrors `ori_ir::TokenList`'s tags/flags
/// split so hot-path cursor checks (`is_group_open`, trigger matching)
/// don't need to touch the full `TokenKind` payload.
pub struct TokenList {
    tokens: Vec<Token>,
}

/// Cheap discriminant used for the parallel tag array and for dictionary
/// trigger-map keys that only care about "what shape of token is this",
/// not its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenTag {
    Command = 0,
    GroupOpen = 1,
    GroupClose = 2,
    Char = 3,
    Space = 4,
    Unknown = 5,
}

impl From<&TokenKind> for TokenTag {
    fn from(kind: &TokenKind) -> Self {
        match kind {
            TokenKind::Command { .. } => TokenTag::Command,
            TokenKind::GroupOpen => TokenTag::GroupOpen,
            TokenKind::GroupClose => TokenTag::GroupClose,
            TokenKind::Char(_) => TokenTag::Char,
            TokenKind::Space(_) => TokenTag::Space,
            TokenKind::Unknown(_) => TokenTag::Unknown,
        }
    }
}

impl TokenList {
    #[must_use]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[must_use]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn tags(&self) -> Vec<TokenTag> {
        self.tokens.iter().map(|t| TokenTag::from(&t.kind)).collect()
    }
}

impl Default for TokenList {
    fn default() -> Self {
        TokenList::new()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_of_group_open_is_group_open() {
        let t = Token::new(TokenKind::GroupOpen, Span::DUMMY);
        assert_eq!(TokenTag::from(&t.kind), TokenTag::GroupOpen);
    }
}
