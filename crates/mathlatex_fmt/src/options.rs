//! Serializer options and the style selectors §4.4 exposes to a dictionary
//! entry's serialize routine.

/// `fractionStyle` (§4.4).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FractionStyle {
    Quotient,
    BlockQuotient,
    InlineQuotient,
    InlineSolidus,
    NiceSolidus,
    Reciprocal,
    Factor,
}

/// `rootStyle` (§4.4).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RootStyle {
    Radical,
    Quotient,
    Solidus,
}

/// `groupStyle` (§4.4) — how a parenthesized sub-expression is delimited
/// when `wrap` decides it needs enclosure.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GroupStyle {
    Paren,
    Bracket,
    Brace,
}

/// `numericSetStyle` (§4.4) — how `RealNumbers`/`Integers`/etc. render.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum NumericSetStyle {
    /// `\mathbb{R}`-style blackboard bold.
    Blackboard,
    /// Plain upright letter, no special markup.
    Plain,
}

/// Options controlling `serialize` (§4.4, §6).
#[derive(Clone, Debug)]
pub struct SerializeOptions {
    /// Pretty mode folds `Add`+`Negate` into infix subtraction, emits
    /// invisible-plus mixed numbers, and prefers radicals over explicit
    /// fractional exponents. Strict mode renders the tree literally.
    pub pretty: bool,
    pub fraction_style: FractionStyle,
    pub root_style: RootStyle,
    pub group_style: GroupStyle,
    pub numeric_set_style: NumericSetStyle,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            pretty: true,
            fraction_style: FractionStyle::Quotient,
            root_style: RootStyle::Radical,
            group_style: GroupStyle::Paren,
            numeric_set_style: NumericSetStyle::Blackboard,
        }
    }
}
