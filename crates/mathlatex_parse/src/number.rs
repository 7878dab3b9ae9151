//! Number literal assembly from runs of `Char` digit tokens (§4.1, §6).
//!
//! The tokenizer never merges digits (§4.1: "Literals ... are single
//! characters") — assembling a run into one `Number` is this parser's job,
//! governed by `decimalSeparator`/`digitGroupSeparator`/`parseNumbers`.

use mathlatex_ir::{ExprArena, ExprId, Number, TokenKind};

use crate::cursor::Cursor;
use crate::options::{ParseNumbers, ParseOptions};

fn is_digit_group_gap(cursor: &Cursor, skip_space: bool) -> bool {
    if !skip_space {
        return false;
    }
    matches!(cursor.current_kind(), Some(TokenKind::Space(_)))
        && matches!(cursor.kind_at(1), Some(TokenKind::Char(d)) if d.is_ascii_digit())
}

/// Consume a run of digits (skipping digit-group gaps), appending to `out`.
fn consume_digit_run(cursor: &mut Cursor, options: &ParseOptions, out: &mut String) {
    loop {
        match cursor.current_kind() {
            Some(TokenKind::Char(d)) if d.is_ascii_digit() => {
                out.push(d);
                cursor.advance();
            }
            _ if is_digit_group_gap(cursor, options.skip_space) => {
                cursor.advance();
            }
            _ => break,
        }
    }
}

/// Does the upcoming token sequence equal the pre-tokenized spelling of a
/// literal (`\infty`, `\operatorname{NaN}`, ...), comparing by kind only?
pub(crate) fn matches_spelling(cursor: &Cursor, spelling: &[TokenKind]) -> bool {
    if spelling.is_empty() {
        return false;
    }
    spelling.iter().enumerate().all(|(i, &want)| {
        cursor.kind_at(i).is_some_and(|got| kinds_equal(got, want))
    })
}

fn kinds_equal(a: TokenKind, b: TokenKind) -> bool {
    match (a, b) {
        (TokenKind::Command { name: n1, .. }, TokenKind::Command { name: n2, .. }) => n1 == n2,
        (TokenKind::Char(c1), TokenKind::Char(c2)) => c1 == c2,
        (TokenKind::GroupOpen, TokenKind::GroupOpen)
        | (TokenKind::GroupClose, TokenKind::GroupClose) => true,
        _ => false,
    }
}

/// Attempt to recognize and consume a number literal (or an infinity/NaN
/// spelling) at the cursor. Returns `None` without consuming anything if
/// the upcoming tokens aren't a literal.
pub fn try_parse_number(
    cursor: &mut Cursor,
    arena: &mut ExprArena,
    options: &ParseOptions,
    positive_infinity_spelling: &[TokenKind],
    not_a_number_spelling: &[TokenKind],
) -> Option<ExprId> {
    if matches_spelling(cursor, positive_infinity_spelling) {
        for _ in 0..positive_infinity_spelling.len() {
            cursor.advance();
        }
        return Some(arena.number(Number::Float(f64::INFINITY)));
    }
    if matches_spelling(cursor, not_a_number_spelling) {
        for _ in 0..not_a_number_spelling.len() {
            cursor.advance();
        }
        return Some(arena.number(Number::Float(f64::NAN)));
    }

    let starts_with_digit = matches!(cursor.current_kind(), Some(TokenKind::Char(c)) if c.is_ascii_digit());
    let starts_with_separator = matches!(cursor.current_kind(), Some(TokenKind::Char(c)) if c == options.decimal_separator)
        && matches!(cursor.kind_at(1), Some(TokenKind::Char(d)) if d.is_ascii_digit());
    if !starts_with_digit && !starts_with_separator {
        return None;
    }

    // `Never`: don't assemble a run at all — each digit is its own
    // single-digit `Number`, so `12` stays two sibling primaries joined by
    // implicit multiplication rather than becoming `12`.
    if matches!(options.parse_numbers, ParseNumbers::Never) {
        if let Some(TokenKind::Char(d)) = cursor.current_kind() {
            cursor.advance();
            return Some(arena.number(Number::int(i64::from(d.to_digit(10).unwrap_or(0)))));
        }
        return None;
    }

    let mut text = String::new();
    consume_digit_run(cursor, options, &mut text);

    let mut is_decimal = false;
    if matches!(cursor.current_kind(), Some(TokenKind::Char(c)) if c == options.decimal_separator)
        && matches!(cursor.kind_at(1), Some(TokenKind::Char(d)) if d.is_ascii_digit())
    {
        is_decimal = true;
        text.push('.');
        cursor.advance();
        consume_digit_run(cursor, options, &mut text);
    }

    let number = match options.parse_numbers {
        ParseNumbers::Decimal => Number::Decimal(text.into_boxed_str()),
        ParseNumbers::Rational if !is_decimal => {
            text.parse::<i64>().map_or_else(
                |_| Number::Decimal(text.clone().into_boxed_str()),
                Number::int,
            )
        }
        _ => {
            if is_decimal {
                text.parse::<f64>().map_or_else(
                    |_| Number::Decimal(text.into_boxed_str()),
                    Number::Float,
                )
            } else {
                text.parse::<i64>().map_or_else(
                    |_| Number::Decimal(text.into_boxed_str()),
                    Number::int,
                )
            }
        }
    };
    Some(arena.number(number))
}
