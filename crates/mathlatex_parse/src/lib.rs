//! LaTeX parsing front end (§4.3): turns a token stream plus an
//! [`mathlatex_dict::IndexedDictionary`] into a MathJSON expression tree.
//!
//! `parse` is the only entry point most callers need; `Parser` and its
//! collaborators (`cursor`, `hooks`, `number`, `scope`) are internal.

mod cursor;
mod error;
mod hooks;
mod number;
mod options;
mod parser;
mod scope;

pub use options::{
    DigitGroup, NoCallbacks, ParseCallbacks, ParseNumbers, ParseOptions, QuantifierScope,
    RepeatingDecimal, SymbolType,
};

use mathlatex_diagnostic::Diagnostic;
use mathlatex_dict::{index, prepare, standard_entries, IndexedDictionary};
use mathlatex_ir::{ExprArena, ExprId, StringInterner};

use crate::cursor::Cursor;
use crate::parser::Parser;

/// The result of one [`parse`] call: the arena backing every node the
/// parser produced, and the id of the root expression.
pub struct ParseOutput {
    pub arena: ExprArena,
    pub root: ExprId,
}

/// Build the standard dictionary (§4.3.4–§4.3.10 builtins plus the
/// generic entries of §4.2), discarding indexing diagnostics. Callers that
/// need those diagnostics (duplicate names, etc.) should call
/// `mathlatex_dict::{prepare, index}` directly instead.
#[must_use]
pub fn standard_dictionary(interner: &StringInterner) -> IndexedDictionary {
    let entries = prepare(standard_entries(interner), interner);
    index(entries, interner, |_diag: Diagnostic| {})
}

/// Parse one LaTeX expression (§4.3). Returns `None` only when the input
/// tokenizes to nothing at all; any other malformed input is recovered
/// in-band as `(Error, kind, detail?)` nodes within the returned tree
/// (§7) rather than failing the call.
#[must_use]
pub fn parse(
    latex: &str,
    dict: &IndexedDictionary,
    interner: &StringInterner,
    options: &ParseOptions<'_>,
) -> Option<ParseOutput> {
    let tokens = mathlatex_lexer::tokenize(latex, interner);
    if tokens.is_empty() {
        return None;
    }
    let cursor = Cursor::new(&tokens);
    let mut parser = Parser::new(cursor, dict, interner, options);
    let root = parser.parse_top();
    Some(ParseOutput {
        arena: parser.arena,
        root,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathlatex_ir::{ExprNode, Number};

    /// A compact, deterministic textual rendering of a parsed tree, used
    /// only so assertions below can compare against a literal string
    /// instead of hand-walking the arena.
    fn dump(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
        match arena.get(id) {
            ExprNode::Symbol(name) => interner.resolve(*name).to_string(),
            ExprNode::Number(Number::Float(f)) => format!("{f}"),
            ExprNode::Number(Number::Decimal(d)) => d.to_string(),
            ExprNode::Number(Number::Rational(n, 1)) => format!("{n}"),
            ExprNode::Number(Number::Rational(n, d)) => format!("(Rational {n} {d})"),
            ExprNode::Number(Number::Complex(re, im)) => format!("(Complex {re:?} {im:?})"),
            ExprNode::String(s) => format!("'{s}'"),
            ExprNode::Dict(_) => "(Dict)".to_string(),
            ExprNode::Error { kind, .. } => format!("(Error {})", interner.resolve(*kind)),
            ExprNode::Application { .. } => {
                let head = arena.head_name(id).map(|n| interner.resolve(n).to_string());
                let args = arena.application_args(id);
                let rendered_args: Vec<String> =
                    args.iter().map(|&a| dump(arena, interner, a)).collect();
                match head {
                    Some(h) if rendered_args.is_empty() => format!("({h})"),
                    Some(h) => format!("({h} {})", rendered_args.join(" ")),
                    None => format!("(<expr-head> {})", rendered_args.join(" ")),
                }
            }
        }
    }

    fn parse_to_string(latex: &str) -> String {
        let interner = StringInterner::new();
        let dict = standard_dictionary(&interner);
        let options = ParseOptions::default();
        let output = parse(latex, &dict, &interner, &options).expect("non-empty input parses");
        dump(&output.arena, &interner, output.root)
    }

    #[test]
    fn addition_is_left_folded_into_one_n_ary_add() {
        assert_eq!(parse_to_string("1 + 2 + 3"), "(Add 1 2 3)");
    }

    #[test]
    fn sum_with_equality_index_classifies_into_a_tuple() {
        assert_eq!(
            parse_to_string(r"\sum_{i=1}^{10} i^2"),
            "(Sum (Power i 2) (Tuple i 1 10))"
        );
    }

    #[test]
    fn inverse_trig_wraps_in_apply_and_inverse_function() {
        assert_eq!(
            parse_to_string(r"\sin^{-1} 0.5"),
            "(Apply (InverseFunction Sin) 0.5)"
        );
    }

    #[test]
    fn quantifier_with_element_domain_wraps_the_bound_in_element() {
        assert_eq!(
            parse_to_string(r"\forall x \in \R, x^2 \geq 0"),
            "(ForAll (Element x RealNumbers) (GreaterEqual (Power x 2) 0))"
        );
    }

    #[test]
    fn tight_quantifier_scope_stops_at_a_logical_connective() {
        let interner = StringInterner::new();
        let dict = standard_dictionary(&interner);
        let options = ParseOptions {
            quantifier_scope: QuantifierScope::Tight,
            ..ParseOptions::default()
        };
        let output = parse(r"\forall x, x \geq 0 \land x \leq 10", &dict, &interner, &options)
            .expect("non-empty input parses");
        assert_eq!(
            dump(&output.arena, &interner, output.root),
            "(ForAll x (GreaterEqual x 0))"
        );
    }

    #[test]
    fn integral_extracts_the_trailing_differential() {
        assert_eq!(
            parse_to_string(r"\int_0^1 x^2 \, dx"),
            "(Integrate (Power x 2) (Tuple x 0 1))"
        );
    }

    #[test]
    fn integral_finds_the_differential_through_a_parenthesized_sum() {
        assert_eq!(parse_to_string(r"\int (x + dx)"), "(Integrate x (Tuple x))");
    }

    #[test]
    fn integral_recognizes_the_numerator_differential_of_a_fraction() {
        assert_eq!(
            parse_to_string(r"\int \frac{dx}{x}"),
            "(Integrate (Divide 1 x) (Tuple x))"
        );
    }

    #[test]
    fn integral_finds_the_differential_through_a_negated_integrand() {
        assert_eq!(
            parse_to_string(r"\int -(x + dx)"),
            "(Integrate (Negate x) (Tuple x))"
        );
    }

    #[test]
    fn integral_finds_the_differential_through_a_divided_integrand() {
        assert_eq!(
            parse_to_string(r"\int \frac{x \, dy}{y}"),
            "(Integrate (Divide x y) (Tuple y))"
        );
    }

    #[test]
    fn mixed_pair_interval_wraps_only_the_open_bound() {
        assert_eq!(parse_to_string(r"[1, 2)"), "(Interval 1 (Open 2))");
    }

    #[test]
    fn fraction_of_two_integers_folds_into_a_rational_literal() {
        assert_eq!(
            parse_to_string(r"\frac{1}{2} + 3x^2"),
            "(Add (Rational 1 2) (Multiply 3 (Power x 2)))"
        );
    }

    #[test]
    fn leibniz_fraction_recovers_a_derivative() {
        assert_eq!(parse_to_string(r"\frac{d}{dx} x^2"), "(D (Power x 2) x)");
    }

    #[test]
    fn second_partial_derivative_recovers_variable_list_and_degree() {
        assert_eq!(
            parse_to_string(r"\frac{\partial^2 f}{\partial x \partial y}"),
            "(PartialDerivative f (List x y) 2)"
        );
    }

    #[test]
    fn congruence_without_modulus_is_equivalent() {
        assert_eq!(parse_to_string(r"a \equiv b"), "(Equivalent a b)");
    }

    #[test]
    fn congruence_with_pmod_is_congruent() {
        assert_eq!(
            parse_to_string(r"a \equiv b \pmod{n}"),
            "(Congruent a b n)"
        );
    }

    #[test]
    fn dms_angle_builds_an_additive_quantity_chain() {
        assert_eq!(
            parse_to_string(r#"40\circ 26' 46""#),
            "(Add (Quantity 40 'deg') (Quantity 26 'arcmin') (Quantity 46 'arcsec'))"
        );
    }

    #[test]
    fn empty_input_is_a_total_parse_failure() {
        let interner = StringInterner::new();
        let dict = standard_dictionary(&interner);
        let options = ParseOptions::default();
        assert!(parse("", &dict, &interner, &options).is_none());
    }

    #[test]
    fn unmatched_delimiter_recovers_as_an_in_band_error_node() {
        let interner = StringInterner::new();
        let dict = standard_dictionary(&interner);
        let options = ParseOptions::default();
        let output = parse("(1 + 2", &dict, &interner, &options).expect("some token consumed");
        let rendered = dump(&output.arena, &interner, output.root);
        assert!(rendered.contains("Error"));
    }
}
