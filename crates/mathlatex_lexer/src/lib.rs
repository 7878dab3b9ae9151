//! Tokenizer front end (§4.1): turns LaTeX source text into a
//! [`mathlatex_ir::TokenList`].
//!
//! Built on [`mathlatex_lexer_core`]'s raw byte scanner; this crate's
//! [`cooker`] module is the "cooking" layer that adds spans, string
//! interning, and visual-space classification.

mod cooker;
mod keywords;

use mathlatex_ir::{StringInterner, TokenKind, TokenList, VisualSpaceKind};

/// Tokenize `latex` into a [`TokenList`], interning command names into
/// `interner`.
#[must_use]
pub fn tokenize(latex: &str, interner: &StringInterner) -> TokenList {
    cooker::cook(latex, interner)
}

/// Count tokens in `latex` without building the full `TokenList` or
/// touching the interner — a scratch interner is cheap relative to a full
/// parse, but callers that only need a count (e.g. a size-limit guard
/// before committing to parsing) can skip retaining the tokens.
#[must_use]
pub fn count_tokens(latex: &str) -> usize {
    let scratch = StringInterner::new();
    cooker::cook(latex, &scratch).len()
}

/// Reconstruct a LaTeX-equivalent string from a token list. Not guaranteed
/// to be byte-identical to the original source (whitespace runs collapse to
/// a single canonical space, `\!`/control-symbol variants canonicalize to
/// their named form), but it is guaranteed to re-tokenize to an
/// equivalent stream.
#[must_use]
pub fn tokens_to_string(tokens: &TokenList, interner: &StringInterner) -> String {
    let mut out = String::new();
    for i in 0..tokens.len() {
        let Some(token) = tokens.get(i) else {
            continue;
        };
        match token.kind {
            TokenKind::Command { name, starred } => {
                out.push('\\');
                out.push_str(interner.resolve(name));
                if starred {
                    out.push('*');
                }
            }
            TokenKind::GroupOpen => out.push('{'),
            TokenKind::GroupClose => out.push('}'),
            TokenKind::Char(c) => out.push(c),
            TokenKind::Space(kind) => out.push_str(match kind {
                VisualSpaceKind::Thin => r"\,",
                VisualSpaceKind::Thick => r"\;",
                VisualSpaceKind::Quad => r"\quad",
                VisualSpaceKind::Tie => "~",
                VisualSpaceKind::Plain => " ",
            }),
            TokenKind::Unknown(name) => out.push_str(interner.resolve(name)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_tokens_matches_tokenize_len() {
        let interner = StringInterner::new();
        let tokens = tokenize(r"\frac{1}{2}", &interner);
        assert_eq!(tokens.len(), count_tokens(r"\frac{1}{2}"));
    }

    #[test]
    fn round_trip_preserves_command_structure() {
        let interner = StringInterner::new();
        let tokens = tokenize(r"\sin{x}", &interner);
        assert_eq!(tokens_to_string(&tokens, &interner), r"\sin{x}");
    }

    #[test]
    fn round_trip_canonicalizes_whitespace_runs() {
        let interner = StringInterner::new();
        let tokens = tokenize("a   b", &interner);
        assert_eq!(tokens_to_string(&tokens, &interner), "a b");
    }
}
