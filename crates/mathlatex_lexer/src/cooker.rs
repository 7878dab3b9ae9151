//! Cooks `(RawTag, len)` pairs from [`mathlatex_lexer_core`] into
//! [`mathlatex_ir::Token`]s with spans and interned names.
//!
//! Mirrors `ori_lexer`'s cooker/driver split: the raw scanner has no
//! knowledge of source text, spans, or the dictionary; this layer walks the
//! raw token stream once, slicing the original string by byte range to
//! recover command names and characters, and classifies visual-space
//! commands via [`crate::keywords`].

use mathlatex_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList, VisualSpaceKind};
use mathlatex_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::keywords;

/// Decode a byte slice (known to be a single source-text token) back to a
/// `char`. The raw scanner only ever slices on UTF-8 boundaries, so this
/// always succeeds in practice; the replacement character is a defensive
/// fallback rather than a reachable path.
fn decode_char(bytes: &[u8]) -> char {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or('\u{FFFD}')
}

/// Split a control-word command's text (the bytes after the leading `\`)
/// into its name and star flag.
fn split_starred(text: &str) -> (&str, bool) {
    if text.len() > 1 {
        if let Some(stripped) = text.strip_suffix('*') {
            return (stripped, true);
        }
    }
    (text, false)
}

pub(crate) fn cook(source: &str, interner: &StringInterner) -> TokenList {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut out = TokenList::new();
    let mut pos: u32 = 0;

    loop {
        let raw = scanner.next_token();
        if raw.tag == RawTag::Eof {
            break;
        }
        let start = pos;
        let end = pos + raw.len;
        let span = Span::new(start, end);
        let text = &source[start as usize..end as usize];

        match raw.tag {
            RawTag::Command => {
                let body = &text[1..]; // drop leading '\'
                let is_control_word = body
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic());
                let (name_text, starred) = if is_control_word {
                    split_starred(body)
                } else {
                    (body, false)
                };
                if let Some(kind) = keywords::visual_space(name_text) {
                    out.push(Token {
                        kind: TokenKind::Space(kind),
                        span,
                    });
                } else {
                    let name: Name = interner.intern(name_text);
                    out.push(Token {
                        kind: TokenKind::Command { name, starred },
                        span,
                    });
                }
            }
            RawTag::BraceOpen => out.push(Token {
                kind: TokenKind::GroupOpen,
                span,
            }),
            RawTag::BraceClose => out.push(Token {
                kind: TokenKind::GroupClose,
                span,
            }),
            RawTag::Digits => {
                // One Char token per digit; the parser assembles number
                // literals from consecutive digit/`.` characters (§4.3).
                for (i, c) in text.char_indices() {
                    let cs = start + u32::try_from(i).unwrap_or(0);
                    out.push(Token {
                        kind: TokenKind::Char(c),
                        span: Span::new(cs, cs + 1),
                    });
                }
            }
            RawTag::Letter => out.push(Token {
                kind: TokenKind::Char(decode_char(text.as_bytes())),
                span,
            }),
            RawTag::Symbol => {
                let c = text.chars().next().unwrap_or('\u{FFFD}');
                if c == '~' {
                    out.push(Token {
                        kind: TokenKind::Space(VisualSpaceKind::Tie),
                        span,
                    });
                } else {
                    out.push(Token {
                        kind: TokenKind::Char(c),
                        span,
                    });
                }
            }
            RawTag::Whitespace => out.push(Token {
                kind: TokenKind::Space(VisualSpaceKind::Plain),
                span,
            }),
            RawTag::Eof => unreachable!("handled by the loop guard above"),
        }
        pos = end;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_symbol_thin_space_is_classified() {
        let interner = StringInterner::new();
        let tokens = cook(r"a\,b", &interner);
        assert_eq!(tokens.len(), 3);
        assert_eq!(
            tokens.get(1).map(|t| t.kind),
            Some(TokenKind::Space(VisualSpaceKind::Thin))
        );
    }

    #[test]
    fn tie_character_is_a_visual_space() {
        let interner = StringInterner::new();
        let tokens = cook("a~b", &interner);
        assert_eq!(
            tokens.get(1).map(|t| t.kind),
            Some(TokenKind::Space(VisualSpaceKind::Tie))
        );
    }

    #[test]
    fn starred_command_sets_the_flag() {
        let interner = StringInterner::new();
        let tokens = cook(r"\int*", &interner);
        match tokens.get(0).map(|t| t.kind) {
            Some(TokenKind::Command { starred, .. }) => assert!(starred),
            other => panic!("expected starred command, got {other:?}"),
        }
    }

    #[test]
    fn digit_run_becomes_one_char_token_per_digit() {
        let interner = StringInterner::new();
        let tokens = cook("123", &interner);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens.get(0).map(|t| t.kind), Some(TokenKind::Char('1')));
        assert_eq!(tokens.get(2).map(|t| t.kind), Some(TokenKind::Char('3')));
    }

    #[test]
    fn spans_are_byte_offsets_into_source() {
        let interner = StringInterner::new();
        let tokens = cook(r"x\,y", &interner);
        let Some(space) = tokens.get(1) else {
            panic!("expected a space token at index 1, got {} tokens", tokens.len())
        };
        assert_eq!(space.span, Span::new(1, 3)); // `\,` spans bytes [1, 3)
    }
}
