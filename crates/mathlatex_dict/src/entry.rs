//! Definition entry shape (§3 "Definition entry", §4.2).
//!
//! The original design couples each entry to `parse`/`serialize` closures.
//! Per the documented redesign (closures replaced by tagged dispatch): a
//! plain-data [`DefinitionEntry`] plus a [`ParseHook`]/[`SerializeHook`] tag
//! telling `mathlatex_parse`/`mathlatex_fmt` which dedicated routine to run.
//! Entries needing no special handling use `ParseHook::Generic` and are
//! built entirely from `kind`/`precedence`/`associativity`.

use mathlatex_ir::Name;

/// Discriminant for a definition entry (§3).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EntryKind {
    Symbol,
    Expression,
    Function,
    Prefix,
    Postfix,
    Infix,
    Matchfix,
    Environment,
}

impl EntryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EntryKind::Symbol => "symbol",
            EntryKind::Expression => "expression",
            EntryKind::Function => "function",
            EntryKind::Prefix => "prefix",
            EntryKind::Postfix => "postfix",
            EntryKind::Infix => "infix",
            EntryKind::Matchfix => "matchfix",
            EntryKind::Environment => "environment",
        }
    }

    /// Whether this kind requires `precedence` (§4.2): infix/prefix/postfix
    /// do, unless their trigger is a superscript/subscript sigil.
    #[must_use]
    pub const fn requires_precedence(self) -> bool {
        matches!(self, EntryKind::Infix | EntryKind::Prefix | EntryKind::Postfix)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Associativity {
    Left,
    Right,
    None,
    Any,
}

/// For `Function` entries: whether arguments require enclosing parentheses
/// or bind as a product-precedence tail (§3).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArgumentStyle {
    Enclosure,
    Implicit,
}

/// One token of a multi-token trigger sequence. Mirrors the subset of
/// `mathlatex_ir::TokenKind` a trigger can match against — visual space is
/// deliberately excluded; triggers match semantic tokens only.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriggerToken {
    Command(Name),
    Char(char),
    GroupOpen,
    GroupClose,
}

pub type Trigger = Vec<TriggerToken>;

/// Dispatch tag for entries needing dedicated parsing logic beyond the
/// generic kind-driven builtin strategies (§9 "dedicated parser methods
/// dispatched by name").
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ParseHook {
    /// Build the application generically from `kind`/`precedence`/`associativity`.
    #[default]
    Generic,
    /// §4.3.4: `\sum`, `\prod`, `\int` and repeated forms.
    BigOperator,
    /// §4.3.5: `\frac` (Leibniz derivative / integrand recovery).
    Fraction,
    /// §4.3.6: `\sin`, `\cos`, … shared trig parser.
    Trig,
    /// §4.3.7: `\forall`, `\exists`, `\exists!`.
    Quantifier,
    /// §4.3.9: postfix `°`/`^\circ` DMS angle notation.
    Dms,
    /// §4.3.10: `\equiv` with optional trailing `\pmod{}`/`\bmod`.
    Congruence,
    /// §4.3.2 example: Iverson bracket `[P]`, a matchfix entry whose `parse`
    /// callback rejects non-relational bodies and triggers backtracking to
    /// the next `matchfixByOpen` candidate.
    IversonBracket,
    /// §8 scenario 6: mixed-pair interval matchfix (`(a, b]`, `[a, b)`) —
    /// wraps whichever bound is open in `(Open, bound)`.
    Interval,
}

/// Dispatch tag for entries needing a custom serializer beyond `wrap`-based
/// generic rendering (§4.4 style selectors).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SerializeHook {
    #[default]
    Generic,
    Fraction,
    Root,
    Group,
    NumericSet,
    Dms,
}

/// A definition entry (§3).
#[derive(Clone, Debug)]
pub struct DefinitionEntry {
    pub kind: EntryKind,
    pub name: Option<Name>,
    pub latex_trigger: Option<Trigger>,
    pub symbol_trigger: Option<Name>,
    pub open_trigger: Option<Trigger>,
    pub close_trigger: Option<Trigger>,
    pub precedence: Option<u16>,
    pub associativity: Option<Associativity>,
    pub arguments: Option<ArgumentStyle>,
    pub parse_hook: ParseHook,
    pub serialize_hook: SerializeHook,
}

impl DefinitionEntry {
    /// A bare-minimum entry of the given kind, with every optional field
    /// unset. Builders (`builtins`, test code) fill in fields from here.
    #[must_use]
    pub fn new(kind: EntryKind) -> Self {
        DefinitionEntry {
            kind,
            name: None,
            latex_trigger: None,
            symbol_trigger: None,
            open_trigger: None,
            close_trigger: None,
            precedence: None,
            associativity: None,
            arguments: None,
            parse_hook: ParseHook::Generic,
            serialize_hook: SerializeHook::Generic,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub fn with_latex_trigger(mut self, trigger: Trigger) -> Self {
        self.latex_trigger = Some(trigger);
        self
    }

    #[must_use]
    pub fn with_symbol_trigger(mut self, name: Name) -> Self {
        self.symbol_trigger = Some(name);
        self
    }

    #[must_use]
    pub fn with_matchfix_triggers(mut self, open: Trigger, close: Trigger) -> Self {
        self.open_trigger = Some(open);
        self.close_trigger = Some(close);
        self
    }

    #[must_use]
    pub fn with_precedence(mut self, precedence: u16) -> Self {
        self.precedence = Some(precedence);
        self
    }

    #[must_use]
    pub fn with_associativity(mut self, associativity: Associativity) -> Self {
        self.associativity = Some(associativity);
        self
    }

    #[must_use]
    pub fn with_arguments(mut self, arguments: ArgumentStyle) -> Self {
        self.arguments = Some(arguments);
        self
    }

    #[must_use]
    pub fn with_parse_hook(mut self, hook: ParseHook) -> Self {
        self.parse_hook = hook;
        self
    }

    #[must_use]
    pub fn with_serialize_hook(mut self, hook: SerializeHook) -> Self {
        self.serialize_hook = hook;
        self
    }

    /// Precedence fixed at 720 for `^X`/`_X`-triggered entries (§4.2), not
    /// user-specifiable.
    #[must_use]
    pub fn is_sigil_triggered(&self) -> bool {
        matches!(
            self.latex_trigger.as_deref(),
            Some([TriggerToken::Char('^'), ..] | [TriggerToken::Char('_'), ..])
        )
    }

    /// This entry's binding power: the declared `precedence`, or 720 for a
    /// sigil-triggered entry (§4.2 — fixed, never stored explicitly).
    #[must_use]
    pub fn effective_precedence(&self) -> u16 {
        self.precedence.unwrap_or(720)
    }

    /// First token of this entry's `latex_trigger`, used to bucket it into a
    /// trigger map (§3 "trigger string → entries"). `symbol_trigger` entries
    /// are indexed separately, by identifier rather than by token shape.
    #[must_use]
    pub(crate) fn trigger_key(&self) -> Option<TriggerToken> {
        self.latex_trigger.as_ref().and_then(|t| t.first()).copied()
    }
}
