//! Parser options (§6 "Parser options (enumerated)").

use mathlatex_ir::Name;

/// How number literals are recognized and materialized (§6 `parseNumbers`).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ParseNumbers {
    /// Prefer a machine float unless the literal needs more precision.
    #[default]
    Auto,
    /// Never assemble digit runs into a number; leave them as `Char` symbols.
    Never,
    /// Always produce a `Rational`.
    Rational,
    /// Always produce a `Decimal`.
    Decimal,
}

/// Repeating-decimal notation accepted in number literals (§6 `repeatingDecimal`).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum RepeatingDecimal {
    #[default]
    Auto,
    /// `0.(3)`
    Parenthesis,
    /// `0.\overline{3}`
    Vinculum,
    /// `0.333...`
    Dots,
    /// `0.\overset{\frown}{3}`
    Arc,
}

/// Binding mode for quantifier bodies (§4.3.7).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum QuantifierScope {
    /// Body parsing stops at a logical connective (`\land`, `\lor`, `\to`, `\implies`, `\iff`).
    Tight,
    /// Body parsing extends to the containing terminator.
    #[default]
    Loose,
}

/// Digit grouping convention for number literals (§6 `digitGroup`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DigitGroup {
    /// Group every `n` digits (conventionally 3).
    Count(u8),
    /// Indian numbering: groups of 2 after the first group of 3.
    Lakh,
}

impl Default for DigitGroup {
    fn default() -> Self {
        DigitGroup::Count(3)
    }
}

/// What kind of thing a bare identifier names, as reported by
/// [`ParseCallbacks::get_symbol_type`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum SymbolType {
    #[default]
    Unknown,
    Variable,
    Constant,
    Function,
}

/// User-supplied extension points (§6 "Callbacks").
///
/// Default methods make every hook optional; a caller overrides only the
/// ones it needs.
pub trait ParseCallbacks {
    /// Classify a bare identifier (used to disambiguate `f(x)` as an
    /// application vs. an implicit product `f \cdot (x)`).
    fn get_symbol_type(&self, _name: Name) -> SymbolType {
        SymbolType::Unknown
    }

    /// Whether `name_n` (a subscripted symbol) should be evaluated as
    /// sequence indexing rather than left as a bare `Subscript` expression.
    fn has_subscript_evaluate(&self, _name: Name) -> bool {
        false
    }

    /// Called before the parser gives up on a token it has no rule for and
    /// emits `(Error, 'unexpected-token')` (§6 `parseUnexpectedToken`).
    /// Returning `Some(name)` recovers by treating the token as the bare
    /// symbol `name` instead of recording an error.
    fn parse_unexpected_token(&self, _text: &str) -> Option<&str> {
        None
    }
}

/// A [`ParseCallbacks`] that declines every extension point.
pub struct NoCallbacks;

impl ParseCallbacks for NoCallbacks {}

/// Options controlling [`crate::parse`] (§4.3, §6).
pub struct ParseOptions<'a> {
    /// Reject non-LaTeX conveniences (`**`, `=>`, `<=>`).
    pub strict: bool,
    /// Consume visual-space tokens silently between triggers.
    pub skip_space: bool,
    pub decimal_separator: char,
    pub digit_group: DigitGroup,
    /// LaTeX spacing used between digit groups, e.g. `\,`.
    pub digit_group_separator: &'static str,
    pub parse_numbers: ParseNumbers,
    pub positive_infinity: &'static str,
    pub negative_infinity: &'static str,
    pub not_a_number: &'static str,
    pub repeating_decimal: RepeatingDecimal,
    pub quantifier_scope: QuantifierScope,
    /// LaTeX command used between a coefficient and `10^n` in scientific notation.
    pub exponent_product: &'static str,
    pub begin_exponent_marker: &'static str,
    pub end_exponent_marker: &'static str,
    /// Marks an elided trailing digit run, e.g. `\ldots`.
    pub truncation_marker: &'static str,
    pub imaginary_unit: &'static str,
    /// Preserve the matched source span alongside each parsed node.
    pub preserve_latex: bool,
    /// Default variable name for `\frac{d}{dt}` when none is given.
    pub time_derivative_variable: &'static str,
    pub callbacks: &'a dyn ParseCallbacks,
}

impl<'a> ParseOptions<'a> {
    #[must_use]
    pub fn new(callbacks: &'a dyn ParseCallbacks) -> Self {
        ParseOptions {
            strict: false,
            skip_space: true,
            decimal_separator: '.',
            digit_group: DigitGroup::Count(3),
            digit_group_separator: r"\,",
            parse_numbers: ParseNumbers::Auto,
            positive_infinity: r"\infty",
            negative_infinity: r"-\infty",
            not_a_number: r"\operatorname{NaN}",
            repeating_decimal: RepeatingDecimal::Auto,
            quantifier_scope: QuantifierScope::Loose,
            exponent_product: r"\times",
            begin_exponent_marker: "{",
            end_exponent_marker: "}",
            truncation_marker: r"\ldots",
            imaginary_unit: "i",
            preserve_latex: false,
            time_derivative_variable: "t",
            callbacks,
        }
    }
}

static DEFAULT_CALLBACKS: NoCallbacks = NoCallbacks;

impl Default for ParseOptions<'static> {
    fn default() -> Self {
        ParseOptions::new(&DEFAULT_CALLBACKS)
    }
}
