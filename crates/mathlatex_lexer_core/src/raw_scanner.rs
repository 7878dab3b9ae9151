//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! Mirrors `ori_lexer_core::RawScanner`'s byte-dispatch `next_token`
//! structure: one match on the current byte, each arm a focused method that
//! advances the cursor and returns a `RawToken`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Length in bytes of the UTF-8 sequence starting with `lead`, per the
/// standard leading-byte bit patterns. Returns `1` for any byte that isn't
/// a valid multi-byte lead (ASCII, or a continuation/invalid byte treated
/// as length 1 so the scanner always makes forward progress).
fn utf8_len(lead: u8) -> usize {
    if lead & 0x80 == 0 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// Pure, allocation-free scanner producing one raw token at a time.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    #[must_use]
    pub fn new(cursor: Cursor<'a>) -> Self {
        RawScanner { cursor }
    }

    /// Produce the next raw token. Returns `RawTag::Eof` with `len == 0` once
    /// the source is exhausted; subsequent calls keep returning `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        match self.cursor.current() {
            b'\\' => self.command(start),
            b'{' => self.single(start, RawTag::BraceOpen),
            b'}' => self.single(start, RawTag::BraceClose),
            b'0'..=b'9' => self.digits(start),
            b' ' | b'\t' | b'\n' | b'\r' => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' => self.single(start, RawTag::Letter),
            lead if lead & 0x80 != 0 => self.unicode_scalar(start),
            _ => self.single(start, RawTag::Symbol),
        }
    }

    fn len_since(&self, start: usize) -> u32 {
        u32::try_from(self.cursor.pos() - start).unwrap_or(u32::MAX)
    }

    fn single(&mut self, start: usize, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.len_since(start),
        }
    }

    /// A lone non-ASCII Unicode scalar — a letter like `π` typed directly,
    /// or a symbol like `∀`. Classified as `Letter` when alphabetic,
    /// `Symbol` otherwise; the cooking layer only cares about byte length
    /// here, so an approximate classification (ASCII-range heuristics on
    /// the leading byte are not attempted) is resolved properly once the
    /// bytes are decoded back to a `char` in `mathlatex_lexer`.
    fn unicode_scalar(&mut self, start: usize) -> RawToken {
        let lead = self.cursor.current();
        let n = utf8_len(lead);
        self.cursor.advance_by(n);
        RawToken {
            tag: RawTag::Symbol,
            len: self.len_since(start),
        }
    }

    fn command(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume '\'
        if self.cursor.current().is_ascii_alphabetic() {
            // Control word: `\[a-zA-Z]+`, greedy, with an optional trailing `*`.
            while self.cursor.current().is_ascii_alphabetic() {
                self.cursor.advance();
            }
            if self.cursor.current() == b'*' {
                self.cursor.advance();
            }
        } else {
            // Control symbol: `\` followed by exactly one (possibly
            // multi-byte) character, e.g. `\,` `\;` `\!` `\%`. LaTeX treats
            // these as complete commands in their own right, not part of the
            // control-word pattern.
            let n = utf8_len(self.cursor.current());
            self.cursor.advance_by(n.max(1));
        }
        RawToken {
            tag: RawTag::Command,
            len: self.len_since(start),
        }
    }

    fn digits(&mut self, start: usize) -> RawToken {
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }
        RawToken {
            tag: RawTag::Digits,
            len: self.len_since(start),
        }
    }

    fn whitespace(&mut self, start: usize) -> RawToken {
        while matches!(self.cursor.current(), b' ' | b'\t' | b'\n' | b'\r') {
            self.cursor.advance();
        }
        RawToken {
            tag: RawTag::Whitespace,
            len: self.len_since(start),
        }
    }
}

/// Convenience entry point: tokenize an entire source buffer into raw
/// tokens (excluding the trailing `Eof`).
#[must_use]
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut out = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        out.push(tok);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_consumes_trailing_star() {
        let toks = tokenize(r"\int*");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].tag, RawTag::Command);
        assert_eq!(toks[0].len, 5);
    }

    #[test]
    fn digits_are_one_token() {
        let toks = tokenize("123x");
        assert_eq!(toks[0].tag, RawTag::Digits);
        assert_eq!(toks[0].len, 3);
        assert_eq!(toks[1].tag, RawTag::Letter);
    }

    #[test]
    fn braces_are_single_tokens() {
        let toks = tokenize("{}");
        assert_eq!(toks[0].tag, RawTag::BraceOpen);
        assert_eq!(toks[1].tag, RawTag::BraceClose);
    }

    #[test]
    fn whitespace_run_collapses_to_one_token() {
        let toks = tokenize("a   b");
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[1].tag, RawTag::Whitespace);
        assert_eq!(toks[1].len, 3);
    }

    #[test]
    fn non_ascii_scalar_is_one_token_spanning_its_utf8_bytes() {
        let toks = tokenize("π+1");
        assert_eq!(toks[0].tag, RawTag::Symbol);
        assert_eq!(toks[0].len, 2); // 'π' is 2 bytes in UTF-8
    }
}
