//! Built-in entry table: the operators and functions §4.3 relies on
//! (logic/set relations §4.3.8, trig/quantifier/big-operator/DMS/congruence
//! triggers consumed by `mathlatex_parse`).

use mathlatex_ir::StringInterner;

use crate::entry::{
    ArgumentStyle, Associativity, DefinitionEntry, EntryKind, ParseHook, SerializeHook,
    TriggerToken,
};

fn cmd(interner: &StringInterner, name: &str) -> Vec<TriggerToken> {
    vec![TriggerToken::Command(interner.intern(name))]
}

fn ch(c: char) -> Vec<TriggerToken> {
    vec![TriggerToken::Char(c)]
}

fn infix(
    interner: &StringInterner,
    mathjson_name: &str,
    trigger: Vec<TriggerToken>,
    precedence: u16,
    assoc: Associativity,
) -> DefinitionEntry {
    DefinitionEntry::new(EntryKind::Infix)
        .with_name(interner.intern(mathjson_name))
        .with_latex_trigger(trigger)
        .with_precedence(precedence)
        .with_associativity(assoc)
}

fn prefix(
    interner: &StringInterner,
    mathjson_name: &str,
    trigger: Vec<TriggerToken>,
    precedence: u16,
) -> DefinitionEntry {
    DefinitionEntry::new(EntryKind::Prefix)
        .with_name(interner.intern(mathjson_name))
        .with_latex_trigger(trigger)
        .with_precedence(precedence)
}

fn symbol_entry(interner: &StringInterner, mathjson_name: &str, command_name: &str) -> DefinitionEntry {
    DefinitionEntry::new(EntryKind::Symbol)
        .with_name(interner.intern(mathjson_name))
        .with_latex_trigger(cmd(interner, command_name))
}

fn function_cmd(
    interner: &StringInterner,
    mathjson_name: &str,
    command_name: &str,
    hook: ParseHook,
) -> DefinitionEntry {
    DefinitionEntry::new(EntryKind::Function)
        .with_name(interner.intern(mathjson_name))
        .with_latex_trigger(cmd(interner, command_name))
        .with_arguments(ArgumentStyle::Implicit)
        .with_parse_hook(hook)
}

/// Precedence constants named in §4.3.1/§4.3.8. `mathlatex_parse` imports
/// these directly rather than re-deriving them from entries, the same way
/// `ori_parse`'s grammar tables reference named precedence constants.
pub mod precedence {
    pub const MULTIPLICATION: u16 = 390;
    pub const ADDITION: u16 = 275;
    pub const SIGIL: u16 = 720;
    pub const NOT: u16 = 880;
    pub const COMPARISON_LO: u16 = 241;
    pub const COMPARISON_HI: u16 = 247;
    pub const SET_RELATION_LO: u16 = 240;
    pub const SET_RELATION_HI: u16 = 265;
    pub const AND: u16 = 235;
    pub const XOR_NAND_NOR: u16 = 232;
    pub const OR: u16 = 230;
    pub const IMPLIES: u16 = 220;
    pub const EQUIVALENT: u16 = 219;
    pub const QUANTIFIER: u16 = 200;
}

/// The standard library of definitions (§4.3.4, §4.3.6–§4.3.10): arithmetic,
/// logic/set relations, trig, quantifiers, big operators, DMS, congruence.
/// User-supplied entries are indexed after these, so they shadow built-ins
/// of the same trigger (§3: later-registered defs are tried first).
#[must_use]
pub fn standard_entries(interner: &StringInterner) -> Vec<DefinitionEntry> {
    let mut entries = Vec::new();

    // --- Arithmetic -------------------------------------------------
    entries.push(infix(
        interner,
        "Add",
        ch('+'),
        precedence::ADDITION,
        Associativity::Any,
    ));
    entries.push(infix(
        interner,
        "Subtract",
        ch('-'),
        precedence::ADDITION,
        Associativity::Left,
    ));
    entries.push(prefix(interner, "Negate", ch('-'), precedence::ADDITION + 1));
    entries.push(infix(
        interner,
        "Multiply",
        cmd(interner, "times"),
        precedence::MULTIPLICATION,
        Associativity::Any,
    ));
    entries.push(infix(
        interner,
        "Multiply",
        cmd(interner, "cdot"),
        precedence::MULTIPLICATION,
        Associativity::Any,
    ));

    // --- Logic / sets / relations (§4.3.8) ---------------------------
    entries.push(prefix(interner, "Not", cmd(interner, "lnot"), precedence::NOT));
    for (name, trigger, prec) in [
        ("Equal", ch('='), precedence::COMPARISON_LO),
        ("Less", ch('<'), precedence::COMPARISON_LO + 1),
        ("Greater", ch('>'), precedence::COMPARISON_LO + 1),
        (
            "LessEqual",
            cmd(interner, "leq"),
            precedence::COMPARISON_LO + 2,
        ),
        ("GreaterEqual", cmd(interner, "geq"), precedence::COMPARISON_HI),
    ] {
        entries.push(infix(interner, name, trigger, prec, Associativity::None));
    }
    entries.push(infix(
        interner,
        "Element",
        cmd(interner, "in"),
        precedence::SET_RELATION_LO,
        Associativity::None,
    ));
    entries.push(infix(
        interner,
        "And",
        cmd(interner, "land"),
        precedence::AND,
        Associativity::Any,
    ));
    entries.push(infix(
        interner,
        "Xor",
        cmd(interner, "veebar"),
        precedence::XOR_NAND_NOR,
        Associativity::Any,
    ));
    entries.push(infix(
        interner,
        "Or",
        cmd(interner, "lor"),
        precedence::OR,
        Associativity::Any,
    ));
    entries.push(infix(
        interner,
        "Implies",
        cmd(interner, "implies"),
        precedence::IMPLIES,
        Associativity::Right,
    ));
    entries.push(infix(
        interner,
        "Equivalent",
        cmd(interner, "iff"),
        precedence::EQUIVALENT,
        Associativity::Right,
    ));
    entries.push(
        infix(
            interner,
            "Congruent",
            cmd(interner, "equiv"),
            precedence::COMPARISON_LO,
            Associativity::None,
        )
        .with_parse_hook(ParseHook::Congruence),
    );

    // --- Superscript / subscript sigils (§4.2, §4.3.3) --------------
    // Precedence is fixed at 720 for any trigger beginning with `^`/`_`
    // (§4.2) and must not be set explicitly.
    entries.push(
        DefinitionEntry::new(EntryKind::Infix)
            .with_name(interner.intern("Power"))
            .with_latex_trigger(ch('^'))
            .with_associativity(Associativity::Right),
    );
    entries.push(
        DefinitionEntry::new(EntryKind::Infix)
            .with_name(interner.intern("Subscript"))
            .with_latex_trigger(ch('_'))
            .with_associativity(Associativity::Left),
    );

    // --- Trig (§4.3.6) -----------------------------------------------
    for (name, command_name) in [
        ("Sin", "sin"),
        ("Cos", "cos"),
        ("Tan", "tan"),
        ("Cot", "cot"),
        ("Sec", "sec"),
        ("Csc", "csc"),
        ("Sinh", "sinh"),
        ("Cosh", "cosh"),
        ("Tanh", "tanh"),
        ("Arcsin", "arcsin"),
        ("Arccos", "arccos"),
        ("Arctan", "arctan"),
    ] {
        entries.push(function_cmd(interner, name, command_name, ParseHook::Trig));
    }

    // --- Big operators (§4.3.4) --------------------------------------
    for (name, command_name) in [
        ("Sum", "sum"),
        ("Product", "prod"),
        ("Integrate", "int"),
        ("Integrate", "iint"),
        ("Integrate", "iiint"),
        ("Integrate", "oint"),
    ] {
        entries.push(function_cmd(
            interner,
            name,
            command_name,
            ParseHook::BigOperator,
        ));
    }

    // --- Fractions (§4.3.5) -------------------------------------------
    entries.push(
        DefinitionEntry::new(EntryKind::Function)
            .with_name(interner.intern("Divide"))
            .with_latex_trigger(cmd(interner, "frac"))
            .with_parse_hook(ParseHook::Fraction)
            .with_serialize_hook(SerializeHook::Fraction),
    );

    // --- Quantifiers (§4.3.7) ------------------------------------------
    entries.push(
        prefix(interner, "ForAll", cmd(interner, "forall"), precedence::QUANTIFIER)
            .with_parse_hook(ParseHook::Quantifier),
    );
    entries.push(
        prefix(interner, "Exists", cmd(interner, "exists"), precedence::QUANTIFIER)
            .with_parse_hook(ParseHook::Quantifier),
    );
    entries.push(
        prefix(
            interner,
            "ExistsUnique",
            {
                let mut t = cmd(interner, "exists");
                t.push(TriggerToken::Char('!'));
                t
            },
            precedence::QUANTIFIER,
        )
        .with_parse_hook(ParseHook::Quantifier),
    );

    // --- DMS angle notation (§4.3.9) ------------------------------------
    entries.push(
        DefinitionEntry::new(EntryKind::Postfix)
            .with_name(interner.intern("Degrees"))
            .with_latex_trigger(cmd(interner, "circ"))
            .with_precedence(precedence::SIGIL + 1)
            .with_parse_hook(ParseHook::Dms)
            .with_serialize_hook(SerializeHook::Dms),
    );

    // --- Matchfix: standard pairs + interval/Iverson (§4.2, §4.3.2) -----
    entries.push(
        DefinitionEntry::new(EntryKind::Matchfix)
            .with_name(interner.intern("Tuple"))
            .with_matchfix_triggers(ch('('), ch(')')),
    );
    entries.push(
        DefinitionEntry::new(EntryKind::Matchfix)
            .with_name(interner.intern("List"))
            .with_matchfix_triggers(ch('['), ch(']')),
    );
    entries.push(
        DefinitionEntry::new(EntryKind::Matchfix)
            .with_name(interner.intern("Interval"))
            .with_matchfix_triggers(ch('('), ch(']'))
            .with_parse_hook(ParseHook::Interval),
    );
    entries.push(
        DefinitionEntry::new(EntryKind::Matchfix)
            .with_name(interner.intern("Interval"))
            .with_matchfix_triggers(ch('['), ch(')'))
            .with_parse_hook(ParseHook::Interval),
    );
    entries.push(
        DefinitionEntry::new(EntryKind::Matchfix)
            .with_name(interner.intern("Iverson"))
            .with_matchfix_triggers(ch('['), ch(']'))
            .with_parse_hook(ParseHook::IversonBracket),
    );

    // --- Numeric sets and constants (§8 scenario 4) ---------------------
    entries.push(symbol_entry(interner, "RealNumbers", "R"));
    entries.push(symbol_entry(interner, "Integers", "Z"));
    entries.push(symbol_entry(interner, "NaturalNumbers", "N"));
    entries.push(symbol_entry(interner, "RationalNumbers", "Q"));
    entries.push(symbol_entry(interner, "ComplexNumbers", "C"));
    entries.push(symbol_entry(interner, "Pi", "pi"));

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{index, prepare};
    use mathlatex_diagnostic::Severity;

    #[test]
    fn standard_entries_have_no_hard_validation_errors() {
        // Several built-ins intentionally share a `name` across synonym
        // triggers (e.g. `\times`/`\cdot` both naming `Multiply`), which
        // the duplicate-name policy (§4.2) flags as a non-fatal warning.
        let interner = StringInterner::new();
        let entries = prepare(standard_entries(&interner), &interner);
        let mut diagnostics = Vec::new();
        let dict = index(entries, &interner, |d| diagnostics.push(d));
        let hard_errors: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect();
        assert!(hard_errors.is_empty(), "unexpected validation errors: {hard_errors:?}");
        assert!(!dict.defs().is_empty());
    }

    #[test]
    fn sin_is_looked_up_by_its_command_trigger() {
        let interner = StringInterner::new();
        let sin = interner.intern("sin");
        let entries = prepare(standard_entries(&interner), &interner);
        let dict = index(entries, &interner, |_| {});
        let candidates = dict.by_trigger(EntryKind::Function, TriggerToken::Command(sin));
        assert_eq!(candidates.len(), 1);
        assert_eq!(dict.entry(candidates[0]).parse_hook, ParseHook::Trig);
    }
}
