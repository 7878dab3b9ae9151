//! Token cursor for navigating the tokenized LaTeX stream.

use mathlatex_ir::{Span, Token, TokenKind, TokenList, TokenTag};

use mathlatex_dict::TriggerToken;

/// The [`TriggerToken`] shape of a token kind, if any (visual space has
/// none — triggers never match against it).
#[must_use]
pub fn trigger_token_of(kind: TokenKind) -> Option<TriggerToken> {
    match kind {
        TokenKind::Command { name, .. } => Some(TriggerToken::Command(name)),
        TokenKind::Char(c) => Some(TriggerToken::Char(c)),
        TokenKind::GroupOpen => Some(TriggerToken::GroupOpen),
        TokenKind::GroupClose => Some(TriggerToken::GroupClose),
        TokenKind::Space(_) | TokenKind::Unknown(_) => None,
    }
}

/// Cursor for navigating tokens, with a dense tag array for fast kind
/// checks without touching the full `TokenKind` payload on the hot path.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    tags: Vec<TokenTag>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tags: tokens.tags(),
            tokens,
            pos: 0,
        }
    }

    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len());
        self.pos = pos;
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[must_use]
    pub fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    #[must_use]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    #[must_use]
    pub fn current_span(&self) -> Span {
        self.current().map_or(Span::DUMMY, |t| t.span)
    }

    #[must_use]
    pub fn current_tag(&self) -> Option<TokenTag> {
        self.tags.get(self.pos).copied()
    }

    #[must_use]
    pub fn kind_at(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| t.kind)
    }

    /// Advance one token, returning the token that was consumed.
    ///
    /// # Panics
    ///
    /// Panics if called at end of stream — callers must check
    /// [`Cursor::is_at_end`] first.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    /// Skip visual-space tokens (`Space(_)`), respecting `skip_space`.
    pub fn skip_visual_space(&mut self, skip_space: bool) {
        if !skip_space {
            return;
        }
        while matches!(self.current_kind(), Some(TokenKind::Space(_))) {
            self.advance();
        }
    }

    /// Does the token at `offset` (after skipping nothing) match `token`?
    #[must_use]
    fn token_matches(kind: TokenKind, token: TriggerToken) -> bool {
        match (kind, token) {
            (TokenKind::Command { name, .. }, TriggerToken::Command(n)) => name == n,
            (TokenKind::Char(c), TriggerToken::Char(t)) => c == t,
            (TokenKind::GroupOpen, TriggerToken::GroupOpen) => true,
            (TokenKind::GroupClose, TriggerToken::GroupClose) => true,
            _ => false,
        }
    }

    /// Does the upcoming token sequence (starting at the cursor) match
    /// `trigger` exactly, token for token?
    #[must_use]
    pub fn matches_trigger(&self, trigger: &[TriggerToken]) -> bool {
        trigger.iter().enumerate().all(|(i, &t)| {
            self.kind_at(i)
                .is_some_and(|k| Cursor::token_matches(k, t))
        })
    }

    /// Consume exactly `trigger.len()` tokens, returning the merged span.
    pub fn consume_trigger(&mut self, trigger: &[TriggerToken]) -> Span {
        let start = self.current_span();
        let mut last = start;
        for _ in 0..trigger.len() {
            last = self.advance().span;
        }
        start.merge(last)
    }
}
