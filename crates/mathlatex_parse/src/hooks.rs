//! Dedicated parse routines for entries tagged with a non-generic
//! [`ParseHook`] (§4.3.4–§4.3.10): big operators, fractions/derivatives,
//! trig, quantifiers, DMS, congruence, Iverson brackets, and mixed-pair
//! intervals. `parser.rs` dispatches here by tag rather than by stored
//! closure, per §9's redesign note.

use mathlatex_dict::TriggerToken;
use mathlatex_ir::{ExprId, ExprNode, Name, Number, TokenKind};

use crate::options::QuantifierScope;
use crate::parser::{Parser, Until};
use crate::{error, number};

// ── Trig (§4.3.6) ────────────────────────────────────────────────────────

pub(crate) fn trig(parser: &mut Parser, idx: usize) -> ExprId {
    let entry = parser.dict.entry(idx);
    let Some(base_name) = entry.name else {
        debug_assert!(false, "trig entries name their function");
        return error::missing_operand(&mut parser.arena, parser.interner);
    };

    let mut prime_count = 0u32;
    loop {
        parser.cursor.skip_visual_space(parser.options.skip_space);
        match parser.cursor.current_kind() {
            Some(TokenKind::Char('\'')) => {
                parser.cursor.advance();
                prime_count += 1;
            }
            Some(TokenKind::Command { name, .. })
                if matches!(parser.interner.resolve(name), "prime" | "doubleprime") =>
            {
                parser.cursor.advance();
                prime_count += if parser.interner.resolve(name) == "doubleprime" {
                    2
                } else {
                    1
                };
            }
            _ => break,
        }
    }

    parser.cursor.skip_visual_space(parser.options.skip_space);
    let mut inverse = false;
    let mut pending_power: Option<ExprId> = None;
    if matches!(parser.cursor.current_kind(), Some(TokenKind::Char('^'))) {
        let save = parser.cursor.position();
        parser.cursor.advance();
        if is_inverse_marker(parser) {
            inverse = true;
        } else {
            parser.cursor.set_position(save);
            parser.cursor.advance();
            pending_power = Some(parser.parse_sigil_payload());
        }
    }

    let mut head: Option<ExprId> = None;
    if inverse {
        let base = parser.arena.symbol(base_name);
        let inverse_name = parser.interner.intern("InverseFunction");
        head = Some(parser.arena.application(inverse_name, &[base]));
    }
    for _ in 0..prime_count {
        let derivative = parser.interner.intern("Derivative");
        let inner = head.unwrap_or_else(|| parser.arena.symbol(base_name));
        head = Some(parser.arena.application(derivative, &[inner]));
    }

    let mult = mathlatex_dict::precedence::MULTIPLICATION;
    let arg = parser.parse_expression(Until::trig_argument(mult));

    let applied = match head {
        None => parser.arena.application(base_name, &[arg]),
        Some(h) => {
            let apply = parser.interner.intern("Apply");
            parser.arena.application(apply, &[h, arg])
        }
    };

    match pending_power {
        Some(power) => {
            let power_name = parser.interner.intern("Power");
            parser.arena.application(power_name, &[applied, power])
        }
        None => applied,
    }
}

/// Cursor is positioned just after a `^`. Recognizes `-1` or `{-1}` without
/// consuming anything on a mismatch.
fn is_inverse_marker(parser: &mut Parser) -> bool {
    let save = parser.cursor.position();
    let braced = matches!(parser.cursor.current_kind(), Some(TokenKind::GroupOpen));
    if braced {
        parser.cursor.advance();
    }
    let matches_neg_one = matches!(parser.cursor.current_kind(), Some(TokenKind::Char('-')))
        && matches!(parser.cursor.kind_at(1), Some(TokenKind::Char('1')));
    if !matches_neg_one {
        parser.cursor.set_position(save);
        return false;
    }
    parser.cursor.advance();
    parser.cursor.advance();
    if braced {
        if matches!(parser.cursor.current_kind(), Some(TokenKind::GroupClose)) {
            parser.cursor.advance();
        } else {
            parser.cursor.set_position(save);
            return false;
        }
    }
    true
}

// ── Big operators (§4.3.4) ──────────────────────────────────────────────

pub(crate) fn big_operator(parser: &mut Parser, idx: usize) -> ExprId {
    let entry = parser.dict.entry(idx);
    let Some(name) = entry.name else {
        debug_assert!(false, "big operators name their result");
        return error::missing_operand(&mut parser.arena, parser.interner);
    };
    let is_integral = parser.interner.resolve(name) == "Integrate";

    parser.scopes.push(false);

    let mut sub: Option<ExprId> = None;
    let mut sup: Option<ExprId> = None;
    loop {
        parser.cursor.skip_visual_space(parser.options.skip_space);
        match parser.cursor.current_kind() {
            Some(TokenKind::Char('_')) if sub.is_none() => {
                parser.cursor.advance();
                sub = Some(parser.parse_sigil_payload());
            }
            Some(TokenKind::Char('^')) if sup.is_none() => {
                parser.cursor.advance();
                sup = Some(parser.parse_sigil_payload());
            }
            _ => break,
        }
    }

    let mult = mathlatex_dict::precedence::MULTIPLICATION;
    let body = parser.parse_expression(Until::at(mult));
    parser.scopes.pop();

    let tuple = parser.interner.intern("Tuple");

    if is_integral {
        let (integrand, variable) = extract_differential(parser, body);
        let index = match (sub, sup, variable) {
            (Some(lo), Some(hi), Some(var)) => Some(parser.arena.application(tuple, &[var, lo, hi])),
            (Some(lo), None, Some(var)) => Some(parser.arena.application(tuple, &[var, lo])),
            (None, None, Some(var)) => Some(parser.arena.application(tuple, &[var])),
            _ => None,
        };
        return match index {
            Some(ix) => parser.arena.application(name, &[integrand, ix]),
            None => parser.arena.application(name, &[integrand]),
        };
    }

    match (sub, sup) {
        (Some(sub_expr), Some(hi)) => {
            let index = if let Some((var, lo)) = classify_index(parser, sub_expr) {
                parser.arena.application(tuple, &[var, lo, hi])
            } else {
                parser.arena.application(tuple, &[sub_expr, hi])
            };
            parser.arena.application(name, &[body, index])
        }
        (Some(sub_expr), None) => {
            let index = if let Some(element) = sub_expr_as_element(parser, sub_expr) {
                element
            } else {
                parser.arena.application(tuple, &[sub_expr])
            };
            parser.arena.application(name, &[body, index])
        }
        _ => parser.arena.application(name, &[body]),
    }
}

/// `i = lo` → `Some((i, lo))`; anything else (bare symbol, `i \in S`, ...)
/// is left for the caller to wrap as a one-element `Tuple` or pass through
/// as an `Element` (§4.3.4 step 4).
fn classify_index(parser: &Parser, sub_expr: ExprId) -> Option<(ExprId, ExprId)> {
    let equal = parser.interner.intern("Equal");
    if parser.arena.head_name(sub_expr) == Some(equal) {
        let args = parser.arena.application_args(sub_expr);
        if args.len() == 2 {
            return Some((args[0], args[1]));
        }
    }
    None
}

/// `i \in S` already parses (via the standard `Element` infix entry) to
/// `(Element, i, S)`; that shape is the index verbatim, not wrapped in a
/// `Tuple` (§4.3.4 step 4 "set-membership ... produces an Element node").
fn sub_expr_as_element(parser: &Parser, sub_expr: ExprId) -> Option<ExprId> {
    let element = parser.interner.intern("Element");
    (parser.arena.head_name(sub_expr) == Some(element)).then_some(sub_expr)
}

/// Locate and strip a trailing `d`, `<var>` pair (`dx`, `\, dx`) from an
/// integrand, recursing through `Add`, `Multiply`, parenthesized grouping,
/// `Divide`, and `Negate` so the differential can be found at the tail of
/// any of these, not just a flat top-level `Multiply` (§4.3.4 step 6).
/// Returns the body unchanged, with no variable, if no differential is found.
fn extract_differential(parser: &mut Parser, body: ExprId) -> (ExprId, Option<ExprId>) {
    match extract_differential_inner(parser, body) {
        Some((residual, var)) => {
            let integrand = residual.unwrap_or_else(|| parser.arena.number(Number::Rational(1, 1)));
            (integrand, Some(var))
        }
        None => (body, None),
    }
}

/// Does `id` spell the differential marker `d` (the lone symbol that
/// precedes the bound variable in `dx`)?
fn is_d_marker(parser: &Parser, id: ExprId) -> bool {
    matches!(parser.arena.get(id), ExprNode::Symbol(n) if parser.interner.resolve(*n) == "d")
}

/// If `args` ends in a `d`, `<var>` pair, split it off: `Some(residual,
/// var)` where `residual` is the remaining factors re-multiplied together
/// (`None` if the pair was the whole thing).
fn strip_trailing_pair(parser: &mut Parser, args: &[ExprId]) -> Option<(Option<ExprId>, ExprId)> {
    if args.len() < 2 {
        return None;
    }
    let last = args[args.len() - 1];
    let second_last = args[args.len() - 2];
    if !is_d_marker(parser, second_last) || !matches!(parser.arena.get(last), ExprNode::Symbol(_)) {
        return None;
    }
    let multiply = parser.interner.intern("Multiply");
    let residual = rebuild(parser, multiply, &args[..args.len() - 2]);
    Some((residual, last))
}

/// `\frac{dx}{x}`'s numerator: a bare two-factor `Multiply(d, var)` with no
/// further coefficient.
fn numerator_differential(parser: &Parser, numerator: ExprId) -> Option<ExprId> {
    let multiply = parser.interner.intern("Multiply");
    if parser.arena.head_name(numerator) != Some(multiply) {
        return None;
    }
    let args = parser.arena.application_args(numerator);
    if args.len() != 2 || !is_d_marker(parser, args[0]) {
        return None;
    }
    matches!(parser.arena.get(args[1]), ExprNode::Symbol(_)).then_some(args[1])
}

fn rebuild(parser: &mut Parser, head: Name, items: &[ExprId]) -> Option<ExprId> {
    match items {
        [] => None,
        [only] => Some(*only),
        many => Some(parser.arena.application(head, many)),
    }
}

/// `Some((residual, var))` if a differential is found at the tail of `id`,
/// where `residual` is what's left of `id` once the differential is
/// stripped out (`None` if nothing's left).
fn extract_differential_inner(parser: &mut Parser, id: ExprId) -> Option<(Option<ExprId>, ExprId)> {
    let multiply = parser.interner.intern("Multiply");
    let add = parser.interner.intern("Add");
    let divide = parser.interner.intern("Divide");
    let negate = parser.interner.intern("Negate");
    let tuple = parser.interner.intern("Tuple");
    let head = parser.arena.head_name(id);

    if head == Some(multiply) {
        let args = parser.arena.application_args(id).to_vec();
        if let Some(found) = strip_trailing_pair(parser, &args) {
            return Some(found);
        }
        let (&last, init) = args.split_last()?;
        let (inner_residual, var) = extract_differential_inner(parser, last)?;
        let mut rebuilt = init.to_vec();
        rebuilt.extend(inner_residual);
        return Some((rebuild(parser, multiply, &rebuilt), var));
    }

    if head == Some(add) {
        let args = parser.arena.application_args(id).to_vec();
        let (&last, init) = args.split_last()?;
        let (inner_residual, var) = extract_differential_inner(parser, last)?;
        let mut rebuilt = init.to_vec();
        rebuilt.extend(inner_residual);
        return Some((rebuild(parser, add, &rebuilt), var));
    }

    if head == Some(negate) {
        let args = parser.arena.application_args(id).to_vec();
        let [operand] = args.as_slice() else { return None };
        let (inner_residual, var) = extract_differential_inner(parser, *operand)?;
        let residual = inner_residual.map(|r| parser.arena.application(negate, &[r]));
        return Some((residual, var));
    }

    // A single-element `Tuple` is a parenthesized grouping, not a literal
    // tuple — the only way this parser represents a generic `( ... )`
    // delimiter around a sub-expression.
    if head == Some(tuple) {
        let args = parser.arena.application_args(id).to_vec();
        let [inner] = args.as_slice() else { return None };
        // Transparent grouping: unlike `Negate`/`Divide`, a parenthesized
        // wrapper carries no meaning of its own, so its residual is just
        // whatever the inner expression leaves behind, not re-wrapped.
        return extract_differential_inner(parser, *inner);
    }

    if head == Some(divide) {
        let args = parser.arena.application_args(id).to_vec();
        let [numerator, denominator] = args.as_slice() else {
            return None;
        };
        let (numerator, denominator) = (*numerator, *denominator);
        if let Some(var) = numerator_differential(parser, numerator) {
            // `dx / x` is `(1/x) dx`: what's left behind is the
            // denominator's reciprocal, not the denominator itself.
            let one = parser.arena.number(Number::Rational(1, 1));
            let reciprocal = parser.arena.application(divide, &[one, denominator]);
            return Some((Some(reciprocal), var));
        }
        let (inner_residual, var) = extract_differential_inner(parser, numerator)?;
        let numerator = inner_residual.unwrap_or_else(|| parser.arena.number(Number::Rational(1, 1)));
        let residual = Some(parser.arena.application(divide, &[numerator, denominator]));
        return Some((residual, var));
    }

    None
}

// ── Fractions / derivatives (§4.3.5) ────────────────────────────────────

pub(crate) fn fraction(parser: &mut Parser, idx: usize) -> ExprId {
    let entry = parser.dict.entry(idx);
    let Some(divide) = entry.name else {
        debug_assert!(false, "frac entries name Divide");
        return error::missing_operand(&mut parser.arena, parser.interner);
    };

    if let Some(result) = try_parse_partial_derivative(parser) {
        return result;
    }
    if let Some(result) = try_parse_leibniz_d(parser) {
        return result;
    }

    let num = parse_frac_group(parser);
    let den = parse_frac_group(parser);
    if let Some(rational) = fold_integer_ratio(parser, num, den) {
        return rational;
    }
    parser.arena.application(divide, &[num, den])
}

/// `\frac{a}{b}` of two bare integer literals is the canonical spelling of
/// an exact rational constant, not a `Divide` application.
fn fold_integer_ratio(parser: &mut Parser, num: ExprId, den: ExprId) -> Option<ExprId> {
    let num_node = parser.arena.get(num);
    let den_node = parser.arena.get(den);
    let (ExprNode::Number(Number::Rational(n, 1)), ExprNode::Number(Number::Rational(d, 1))) =
        (num_node, den_node)
    else {
        return None;
    };
    if *d == 0 {
        return None;
    }
    Some(parser.arena.number(Number::Rational(*n, *d)))
}

fn parse_frac_group(parser: &mut Parser) -> ExprId {
    parser.cursor.skip_visual_space(parser.options.skip_space);
    if matches!(parser.cursor.current_kind(), Some(TokenKind::GroupOpen)) {
        parser.cursor.advance();
        let inner = parser.parse_expression(Until::top());
        parser.cursor.skip_visual_space(parser.options.skip_space);
        if matches!(parser.cursor.current_kind(), Some(TokenKind::GroupClose)) {
            parser.cursor.advance();
        }
        inner
    } else {
        parser.parse_prefix_or_primary()
    }
}

/// `\frac{d}{dx}` followed by the function being differentiated → `(D, fn, x)`.
fn try_parse_leibniz_d(parser: &mut Parser) -> Option<ExprId> {
    let save = parser.cursor.position();
    parser.cursor.skip_visual_space(parser.options.skip_space);
    if !matches!(parser.cursor.current_kind(), Some(TokenKind::GroupOpen)) {
        parser.cursor.set_position(save);
        return None;
    }
    if !matches!(parser.cursor.kind_at(1), Some(TokenKind::Char('d'))) {
        parser.cursor.set_position(save);
        return None;
    }
    if !matches!(parser.cursor.kind_at(2), Some(TokenKind::GroupClose)) {
        parser.cursor.set_position(save);
        return None;
    }
    // Numerator is exactly `{d}`.
    if !matches!(parser.cursor.kind_at(3), Some(TokenKind::GroupOpen)) {
        parser.cursor.set_position(save);
        return None;
    }
    if !matches!(parser.cursor.kind_at(4), Some(TokenKind::Char('d'))) {
        parser.cursor.set_position(save);
        return None;
    }
    let var = match parser.cursor.kind_at(5) {
        Some(TokenKind::Char(c)) if c.is_alphabetic() => c,
        _ => {
            parser.cursor.set_position(save);
            return None;
        }
    };
    if !matches!(parser.cursor.kind_at(6), Some(TokenKind::GroupClose)) {
        parser.cursor.set_position(save);
        return None;
    }

    for _ in 0..7 {
        parser.cursor.advance();
    }
    let var_name = parser.interner.intern(&var.to_string());
    let var_expr = parser.arena.symbol(var_name);
    let mult = mathlatex_dict::precedence::MULTIPLICATION;
    let fn_expr = parser.parse_expression(Until::at(mult));
    let d = parser.interner.intern("D");
    Some(parser.arena.application(d, &[fn_expr, var_expr]))
}

/// `\frac{\partial f}{\partial x \partial y ...}` → `(PartialDerivative, f,
/// (List, x, y, ...), degree)`.
fn try_parse_partial_derivative(parser: &mut Parser) -> Option<ExprId> {
    let save = parser.cursor.position();
    parser.cursor.skip_visual_space(parser.options.skip_space);
    if !matches!(parser.cursor.current_kind(), Some(TokenKind::GroupOpen)) {
        parser.cursor.set_position(save);
        return None;
    }
    parser.cursor.advance(); // numerator `{`

    let partial = parser.interner.intern("partial");
    if !matches!(parser.cursor.current_kind(), Some(TokenKind::Command { name, .. }) if name == partial)
    {
        parser.cursor.set_position(save);
        return None;
    }
    parser.cursor.advance();

    let mut degree: Option<ExprId> = None;
    if matches!(parser.cursor.current_kind(), Some(TokenKind::Char('^'))) {
        parser.cursor.advance();
        degree = Some(parser.parse_sigil_payload());
    }

    let f_name = match parser.cursor.current_kind() {
        Some(TokenKind::Char(c)) if c.is_alphabetic() => c,
        _ => {
            parser.cursor.set_position(save);
            return None;
        }
    };
    parser.cursor.advance();

    if !matches!(parser.cursor.current_kind(), Some(TokenKind::GroupClose)) {
        parser.cursor.set_position(save);
        return None;
    }
    parser.cursor.advance(); // numerator `}`

    parser.cursor.skip_visual_space(parser.options.skip_space);
    if !matches!(parser.cursor.current_kind(), Some(TokenKind::GroupOpen)) {
        parser.cursor.set_position(save);
        return None;
    }
    parser.cursor.advance(); // denominator `{`

    let mut vars = Vec::new();
    loop {
        parser.cursor.skip_visual_space(parser.options.skip_space);
        if !matches!(parser.cursor.current_kind(), Some(TokenKind::Command { name, .. }) if name == partial)
        {
            break;
        }
        parser.cursor.advance();
        parser.cursor.skip_visual_space(parser.options.skip_space);
        match parser.cursor.current_kind() {
            Some(TokenKind::Char(c)) if c.is_alphabetic() => {
                parser.cursor.advance();
                vars.push(c);
            }
            _ => {
                parser.cursor.set_position(save);
                return None;
            }
        }
    }
    if vars.is_empty() {
        parser.cursor.set_position(save);
        return None;
    }
    parser.cursor.skip_visual_space(parser.options.skip_space);
    if !matches!(parser.cursor.current_kind(), Some(TokenKind::GroupClose)) {
        parser.cursor.set_position(save);
        return None;
    }
    parser.cursor.advance(); // denominator `}`

    let f = parser.arena.symbol(parser.interner.intern(&f_name.to_string()));
    let var_exprs: Vec<ExprId> = vars
        .iter()
        .map(|c| parser.arena.symbol(parser.interner.intern(&c.to_string())))
        .collect();
    let list = parser.interner.intern("List");
    let var_list = parser.arena.application(list, &var_exprs);
    let degree = degree.unwrap_or_else(|| {
        parser
            .arena
            .number(mathlatex_ir::Number::int(vars.len() as i64))
    });
    let partial_derivative = parser.interner.intern("PartialDerivative");
    Some(
        parser
            .arena
            .application(partial_derivative, &[f, var_list, degree]),
    )
}

// ── Quantifiers (§4.3.7) ─────────────────────────────────────────────────

pub(crate) fn quantifier(parser: &mut Parser, idx: usize) -> ExprId {
    let entry = parser.dict.entry(idx);
    let Some(name) = entry.name else {
        debug_assert!(false, "quantifier entries name their operator");
        return error::missing_operand(&mut parser.arena, parser.interner);
    };

    parser.scopes.push(true);

    parser.cursor.skip_visual_space(parser.options.skip_space);
    let var_name = read_bound_identifier(parser);
    if let Some(n) = var_name {
        parser.scopes.bind(n);
    }
    let mut bound = var_name.map(|n| parser.arena.symbol(n));

    parser.cursor.skip_visual_space(parser.options.skip_space);
    let in_cmd = parser.interner.intern("in");
    if matches!(parser.cursor.current_kind(), Some(TokenKind::Command { name, .. }) if name == in_cmd)
    {
        parser.cursor.advance();
        let mult = mathlatex_dict::precedence::MULTIPLICATION;
        let domain = parser.parse_expression(Until::at(mult));
        if let Some(b) = bound {
            let element = parser.interner.intern("Element");
            bound = Some(parser.arena.application(element, &[b, domain]));
        }
    }

    parser.cursor.skip_visual_space(parser.options.skip_space);
    consume_quantifier_separator(parser);

    let paren_body = matches!(parser.cursor.current_kind(), Some(TokenKind::Char('(')));
    let body = if paren_body {
        parser.cursor.advance();
        let inner = parser.parse_expression(Until::top());
        parser.cursor.skip_visual_space(parser.options.skip_space);
        if matches!(parser.cursor.current_kind(), Some(TokenKind::Char(')'))) {
            parser.cursor.advance();
        }
        inner
    } else {
        let until = match parser.options.quantifier_scope {
            QuantifierScope::Tight => Until {
                min_prec: 0,
                stop_at_connectives: true,
                stop_before_trig: false,
            },
            QuantifierScope::Loose => Until::top(),
        };
        parser.parse_expression(until)
    };

    parser.scopes.pop();

    let bound = bound.unwrap_or_else(|| error::missing_operand(&mut parser.arena, parser.interner));
    parser.arena.application(name, &[bound, body])
}

fn read_bound_identifier(parser: &mut Parser) -> Option<Name> {
    match parser.cursor.current_kind() {
        Some(TokenKind::Char(c)) if c.is_alphabetic() => {
            parser.cursor.advance();
            Some(parser.interner.intern(&c.to_string()))
        }
        _ => None,
    }
}

fn consume_quantifier_separator(parser: &mut Parser) {
    const SEPARATORS: &[char] = &[',', '.', ':'];
    match parser.cursor.current_kind() {
        Some(TokenKind::Char(c)) if SEPARATORS.contains(&c) => {
            parser.cursor.advance();
        }
        Some(TokenKind::Command { name, .. }) if parser.interner.resolve(name) == "mid" => {
            parser.cursor.advance();
        }
        _ => {}
    }
    parser.cursor.skip_visual_space(parser.options.skip_space);
}

// ── DMS angle notation (§4.3.9) ──────────────────────────────────────────

pub(crate) fn dms(parser: &mut Parser, _idx: usize, lhs: ExprId) -> ExprId {
    let quantity = parser.interner.intern("Quantity");
    let deg_unit = parser.arena.string("deg");
    let deg = parser.arena.application(quantity, &[lhs, deg_unit]);
    let mut parts = vec![deg];

    if let Some(arcmin) = try_dms_component(parser, '\'', "arcmin") {
        parts.push(arcmin);
        if let Some(arcsec) = try_dms_component(parser, '"', "arcsec") {
            parts.push(arcsec);
        }
    }

    if parts.len() == 1 {
        parts.remove(0)
    } else {
        let add = parser.interner.intern("Add");
        parser.arena.application(add, &parts)
    }
}

fn try_dms_component(parser: &mut Parser, suffix: char, unit: &str) -> Option<ExprId> {
    let save = parser.cursor.position();
    parser.cursor.skip_visual_space(parser.options.skip_space);
    let Some(value) =
        number::try_parse_number(&mut parser.cursor, &mut parser.arena, parser.options, &[], &[])
    else {
        parser.cursor.set_position(save);
        return None;
    };
    if matches!(parser.cursor.current_kind(), Some(TokenKind::Char(c)) if c == suffix) {
        parser.cursor.advance();
        let quantity = parser.interner.intern("Quantity");
        let unit_expr = parser.arena.string(unit);
        Some(parser.arena.application(quantity, &[value, unit_expr]))
    } else {
        parser.cursor.set_position(save);
        None
    }
}

// ── Congruence (§4.3.10) ─────────────────────────────────────────────────

pub(crate) fn congruence(parser: &mut Parser, idx: usize, lhs: ExprId) -> ExprId {
    let entry = parser.dict.entry(idx);
    let prec = entry.effective_precedence();
    let rhs = parser.parse_expression(Until::at(prec + 1));

    parser.cursor.skip_visual_space(parser.options.skip_space);
    let pmod = parser.interner.intern("pmod");
    let bmod = parser.interner.intern("bmod");
    let modulus = if matches!(parser.cursor.current_kind(), Some(TokenKind::Command { name, .. }) if name == pmod)
    {
        parser.cursor.advance();
        Some(parser.parse_sigil_payload())
    } else if matches!(parser.cursor.current_kind(), Some(TokenKind::Command { name, .. }) if name == bmod)
    {
        parser.cursor.advance();
        let mult = mathlatex_dict::precedence::MULTIPLICATION;
        Some(parser.parse_expression(Until::at(mult)))
    } else {
        None
    };

    match modulus {
        Some(m) => {
            let congruent = parser.interner.intern("Congruent");
            parser.arena.application(congruent, &[lhs, rhs, m])
        }
        None => {
            let equivalent = parser.interner.intern("Equivalent");
            parser.arena.application(equivalent, &[lhs, rhs])
        }
    }
}

// ── Iverson bracket (§4.3.2 example) ────────────────────────────────────

/// Only a single, relational body is accepted; anything else backtracks to
/// the next `matchfixByOpen` candidate (here, the plain `List` entry).
pub(crate) fn iverson_accepts(parser: &Parser, body: &[ExprId]) -> bool {
    if body.len() != 1 {
        return false;
    }
    let Some(name) = parser.arena.head_name(body[0]) else {
        return false;
    };
    const RELATIONAL: &[&str] = &[
        "Equal",
        "Less",
        "Greater",
        "LessEqual",
        "GreaterEqual",
        "Element",
        "And",
        "Or",
        "Not",
        "Xor",
        "Implies",
        "Equivalent",
        "Congruent",
    ];
    RELATIONAL.contains(&parser.interner.resolve(name))
}

// ── Intervals (§8 scenario 6) ────────────────────────────────────────────

/// Wraps whichever bound is open (`(`/`)` side of a mixed pair) in
/// `(Open, bound)`, per `matchfixByOpen`'s mixed-pair `Interval` entries.
pub(crate) fn interval(parser: &mut Parser, idx: usize, body: &[ExprId]) -> ExprId {
    let entry = parser.dict.entry(idx);
    let Some(name) = entry.name else {
        debug_assert!(false, "interval entries name their operator");
        return error::missing_operand(&mut parser.arena, parser.interner);
    };
    let lower_open = matches!(
        entry.open_trigger.as_deref(),
        Some([TriggerToken::Char('('), ..])
    );
    let upper_open = matches!(
        entry.close_trigger.as_deref(),
        Some([TriggerToken::Char(')'), ..])
    );

    let mut operands = body.to_vec();
    if operands.is_empty() {
        return parser.arena.application(name, &operands);
    }
    let open_name = parser.interner.intern("Open");
    if lower_open {
        operands[0] = parser.arena.application(open_name, &[operands[0]]);
    }
    let last = operands.len() - 1;
    if upper_open {
        operands[last] = parser.arena.application(open_name, &[operands[last]]);
    }
    parser.arena.application(name, &operands)
}
