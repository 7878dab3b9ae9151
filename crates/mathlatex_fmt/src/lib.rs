//! LaTeX serializer (§4.4): the inverse of `mathlatex_parse`, walking a
//! MathJSON expression tree and emitting LaTeX.
//!
//! `serialize` is the only entry point most callers need.

mod options;
mod serializer;

pub use options::{FractionStyle, GroupStyle, NumericSetStyle, RootStyle, SerializeOptions};
pub use serializer::Serializer;

use mathlatex_dict::IndexedDictionary;
use mathlatex_ir::{ExprArena, ExprId, StringInterner};

/// Serialize `root` back into LaTeX (§4.4 `serialize(expr, options) → string`).
#[must_use]
pub fn serialize(
    arena: &ExprArena,
    dict: &IndexedDictionary,
    interner: &StringInterner,
    root: ExprId,
    options: &SerializeOptions,
) -> String {
    Serializer::new(arena, dict, interner, options).render(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathlatex_parse::{parse, standard_dictionary, ParseOptions};

    fn round_trip(latex: &str) -> String {
        let interner = StringInterner::new();
        let dict = standard_dictionary(&interner);
        let parse_options = ParseOptions::default();
        let parsed = parse(latex, &dict, &interner, &parse_options).expect("non-empty input parses");
        let serialize_options = SerializeOptions::default();
        serialize(&parsed.arena, &dict, &interner, parsed.root, &serialize_options)
    }

    #[test]
    fn addition_round_trips_with_plus_signs() {
        assert_eq!(round_trip("1 + 2 + 3"), "1 + 2 + 3");
    }

    #[test]
    fn power_renders_base_and_braced_exponent() {
        assert_eq!(round_trip(r"x^2"), "x^2");
    }

    #[test]
    fn coefficient_and_symbol_juxtapose_without_cdot() {
        assert_eq!(round_trip(r"3x^2"), "3x^2");
    }

    #[test]
    fn fraction_of_two_integers_serializes_from_the_folded_rational() {
        assert_eq!(round_trip(r"\frac{1}{2}"), "\\frac{1}{2}");
    }

    #[test]
    fn sum_renders_index_equals_lower_to_upper_bound() {
        assert_eq!(
            round_trip(r"\sum_{i=1}^{10} i^2"),
            "\\sum_{i=1}^{10} i^2"
        );
    }

    #[test]
    fn integral_renders_bounds_and_trailing_differential() {
        assert_eq!(
            round_trip(r"\int_0^1 x^2 \, dx"),
            "\\int_{0}^{1} x^2 \\, dx"
        );
    }

    #[test]
    fn inverse_trig_round_trips_through_apply() {
        assert_eq!(round_trip(r"\sin^{-1} 0.5"), "\\sin^{-1} 0.5");
    }

    #[test]
    fn interval_with_one_open_bound_renders_the_mixed_delimiter() {
        assert_eq!(round_trip(r"[1, 2)"), "[1, 2)");
    }

    #[test]
    fn congruence_with_pmod_renders_the_modulus() {
        assert_eq!(
            round_trip(r"a \equiv b \pmod{n}"),
            "a \\equiv b \\pmod{n}"
        );
    }

    #[test]
    fn leibniz_derivative_renders_d_by_dx() {
        assert_eq!(
            round_trip(r"\frac{d}{dx} x^2"),
            "\\frac{d}{dx} x^2"
        );
    }

    #[test]
    fn strict_mode_keeps_an_explicit_cdot_between_coefficient_and_symbol() {
        let interner = StringInterner::new();
        let dict = standard_dictionary(&interner);
        let parse_options = ParseOptions::default();
        let parsed = parse("3x^2", &dict, &interner, &parse_options).expect("non-empty input parses");
        let serialize_options = SerializeOptions {
            pretty: false,
            ..SerializeOptions::default()
        };
        assert_eq!(
            serialize(&parsed.arena, &dict, &interner, parsed.root, &serialize_options),
            "3\\cdot x^2"
        );
    }
}
