//! The Pratt parser core (§4.3): precedence climbing, matchfix resolution,
//! superscript/subscript, and dispatch to the dedicated hook routines of
//! `crate::hooks` for entries that need more than generic kind-driven
//! parsing.

use mathlatex_dict::{
    ArgumentStyle, Associativity, EntryKind, IndexedDictionary, ParseHook, Trigger, TriggerToken,
};
use mathlatex_ir::{ExprArena, ExprId, StringInterner, TokenKind};
use mathlatex_stack::ensure_sufficient_stack;

use crate::cursor::{trigger_token_of, Cursor};
use crate::error;
use crate::hooks;
use crate::number;
use crate::options::ParseOptions;
use crate::scope::ScopeStack;

/// The termination condition for one `parse_expression` call: the minimum
/// precedence an infix/postfix operator must have to be consumed, and
/// (for quantifier tight-mode) whether a logical connective also stops us.
#[derive(Copy, Clone)]
pub(crate) struct Until {
    pub min_prec: u16,
    pub stop_at_connectives: bool,
    /// Stop before implicitly multiplying into another trig-function call
    /// (§4.3.6 step 4: `\sin x \cos x` is `Multiply(Sin(x), Cos(x))`, not
    /// `Sin(Multiply(x, Cos(x)))`).
    pub stop_before_trig: bool,
}

impl Until {
    pub(crate) const fn top() -> Self {
        Until {
            min_prec: 0,
            stop_at_connectives: false,
            stop_before_trig: false,
        }
    }

    pub(crate) const fn at(min_prec: u16) -> Self {
        Until {
            min_prec,
            stop_at_connectives: false,
            stop_before_trig: false,
        }
    }

    pub(crate) const fn trig_argument(min_prec: u16) -> Self {
        Until {
            min_prec,
            stop_at_connectives: false,
            stop_before_trig: true,
        }
    }
}

pub struct Parser<'p> {
    pub(crate) cursor: Cursor<'p>,
    pub(crate) dict: &'p IndexedDictionary,
    pub(crate) interner: &'p StringInterner,
    pub(crate) options: &'p ParseOptions<'p>,
    pub(crate) arena: ExprArena,
    pub(crate) scopes: ScopeStack,
    positive_infinity_spelling: Vec<TokenKind>,
    not_a_number_spelling: Vec<TokenKind>,
    /// Set to the entry index of a just-applied `none`-associativity
    /// operator, for one loop iteration, so an immediately repeated
    /// occurrence of the same operator halts instead of silently
    /// chaining (§4.3.1 "non-associative" diagnostic).
    just_applied_none_assoc: Option<usize>,
}

impl<'p> Parser<'p> {
    pub(crate) fn new(
        cursor: Cursor<'p>,
        dict: &'p IndexedDictionary,
        interner: &'p StringInterner,
        options: &'p ParseOptions<'p>,
    ) -> Self {
        let positive_infinity_spelling =
            spell_tokens(options.positive_infinity, interner);
        let not_a_number_spelling = spell_tokens(options.not_a_number, interner);
        Parser {
            cursor,
            dict,
            interner,
            options,
            arena: ExprArena::new(),
            scopes: ScopeStack::new(),
            positive_infinity_spelling,
            not_a_number_spelling,
            just_applied_none_assoc: None,
        }
    }

    /// Top-level entry point: parse one expression, consuming as much of
    /// the stream as the grammar allows. Trailing tokens (if the overall
    /// input wasn't fully consumed) are left in place; `crate::parse`
    /// decides whether that constitutes failure.
    pub(crate) fn parse_top(&mut self) -> ExprId {
        self.scopes.push(false);
        let result = self.parse_expression(Until::top());
        self.scopes.pop();
        result
    }

    /// The core Pratt loop (§4.3.1).
    pub(crate) fn parse_expression(&mut self, until: Until) -> ExprId {
        ensure_sufficient_stack(|| self.parse_expression_inner(until))
    }

    fn parse_expression_inner(&mut self, until: Until) -> ExprId {
        let mut lhs = self.parse_prefix_or_primary();

        loop {
            self.cursor.skip_visual_space(self.options.skip_space);
            if self.cursor.is_at_end() {
                break;
            }
            if until.stop_at_connectives && self.peeks_logical_connective() {
                break;
            }

            if let Some(entry_idx) = self.select_infix_or_postfix() {
                if self.just_applied_none_assoc == Some(entry_idx) {
                    break;
                }
                let entry = self.dict.entry(entry_idx);
                let prec = entry.effective_precedence();
                if prec < until.min_prec {
                    break;
                }
                let Some(trigger) = entry.latex_trigger.clone() else {
                    debug_assert!(false, "infix/postfix candidates always have a latex_trigger");
                    break;
                };
                self.cursor.consume_trigger(&trigger);
                let assoc = entry.associativity.unwrap_or(Associativity::Left);
                self.just_applied_none_assoc = None;
                lhs = self.apply_operator(entry_idx, lhs, prec, assoc);
                continue;
            }

            // No registered operator matched: fall back to implicit
            // multiplication when the next token plausibly starts another
            // primary (`3x`, `2\sin x`, `x(y)`), per §4.3.1's "Dataflow"
            // framing of juxtaposition as ordinary multiplication.
            if self.starts_primary() && !(until.stop_before_trig && self.peeks_trig_function()) {
                let mult_prec = mathlatex_dict::precedence::MULTIPLICATION;
                if mult_prec < until.min_prec {
                    break;
                }
                let rhs = self.parse_expression(Until::at(mult_prec + 1));
                let multiply = self.interner.intern("Multiply");
                lhs = self.fold_associative(multiply, lhs, rhs);
                continue;
            }

            break;
        }

        lhs
    }

    // ── Primary / prefix dispatch ───────────────────────────────────────

    pub(crate) fn parse_prefix_or_primary(&mut self) -> ExprId {
        ensure_sufficient_stack(|| self.parse_prefix_or_primary_inner())
    }

    fn parse_prefix_or_primary_inner(&mut self) -> ExprId {
        self.cursor.skip_visual_space(self.options.skip_space);

        if self.cursor.is_at_end() {
            return error::missing_operand(&mut self.arena, self.interner);
        }

        if let Some(id) = number::try_parse_number(
            &mut self.cursor,
            &mut self.arena,
            self.options,
            &self.positive_infinity_spelling,
            &self.not_a_number_spelling,
        ) {
            return id;
        }

        let Some(kind) = self.cursor.current_kind() else {
            debug_assert!(false, "checked not at end");
            return error::missing_operand(&mut self.arena, self.interner);
        };

        // Grouping braces `{ ... }`: transparent, re-enter at top precedence.
        if matches!(kind, TokenKind::GroupOpen) {
            self.cursor.advance();
            let inner = self.parse_expression(Until::top());
            if matches!(self.cursor.current_kind(), Some(TokenKind::GroupClose)) {
                self.cursor.advance();
            } else {
                return error::expected_close_delimiter(&mut self.arena, self.interner, "}");
            }
            return inner;
        }

        if let Some(key) = trigger_token_of(kind) {
            // Matchfix: opening delimiter.
            if let Some(id) = self.try_matchfix(key) {
                return id;
            }

            // Prefix operators (includes quantifiers, `Not`, `Negate`).
            for &idx in self.dict.by_trigger(EntryKind::Prefix, key) {
                let entry = self.dict.entry(idx);
                if let Some(trigger) = &entry.latex_trigger {
                    if self.cursor.matches_trigger(trigger) {
                        self.cursor.consume_trigger(trigger);
                        return self.apply_prefix(idx);
                    }
                }
            }

            // Functions triggered by a command (trig, big operators, fractions).
            for &idx in self.dict.by_trigger(EntryKind::Function, key) {
                let entry = self.dict.entry(idx);
                if let Some(trigger) = &entry.latex_trigger {
                    if self.cursor.matches_trigger(trigger) {
                        self.cursor.consume_trigger(trigger);
                        return self.apply_function(idx);
                    }
                }
            }

            // Symbol entries triggered by a command (`\R`, `\pi`, ...).
            for &idx in self.dict.by_trigger(EntryKind::Symbol, key) {
                let entry = self.dict.entry(idx);
                if let Some(trigger) = &entry.latex_trigger {
                    if self.cursor.matches_trigger(trigger) {
                        self.cursor.consume_trigger(trigger);
                        return self.apply_symbol_entry(idx, entry.kind);
                    }
                }
            }
        }

        // `symbolTrigger`-style identifier entries (e.g. `gcd`).
        if let TokenKind::Command { name, .. } = kind {
            for &idx in self.dict.by_symbol_trigger(name) {
                let entry = self.dict.entry(idx);
                self.cursor.advance();
                return self.apply_symbol_entry(idx, entry.kind);
            }
            // Unrecognized command: treat its name as a bare symbol.
            self.cursor.advance();
            return self.arena.symbol(name);
        }

        if let TokenKind::Char(c) = kind {
            if c.is_alphabetic() {
                self.cursor.advance();
                let name = self.interner.intern(&c.to_string());
                return self.maybe_predicate(name);
            }
            // An operator char with no matching prefix entry (e.g. a lone
            // `)` or `+` in prefix position) is an unexpected token.
            self.cursor.advance();
            return self.recover_unexpected_token(&c.to_string());
        }

        self.cursor.advance();
        self.recover_unexpected_token("?")
    }

    fn recover_unexpected_token(&mut self, text: &str) -> ExprId {
        if let Some(name) = self.options.callbacks.parse_unexpected_token(text) {
            let name = self.interner.intern(name);
            return self.arena.symbol(name);
        }
        error::unexpected_token(&mut self.arena, self.interner, text)
    }

    /// In a quantifier body, a bare identifier applied to parenthesized
    /// arguments becomes `(Predicate, P, args...)` even if `P` is not a
    /// declared function (§4.3.7).
    fn maybe_predicate(&mut self, name: mathlatex_ir::Name) -> ExprId {
        let symbol = self.arena.symbol(name);
        if !self.scopes.in_quantifier() {
            return symbol;
        }
        self.cursor.skip_visual_space(self.options.skip_space);
        if !matches!(self.cursor.current_kind(), Some(TokenKind::Char('('))) {
            return symbol;
        }
        self.cursor.advance();
        let args = self.parse_comma_separated(')');
        let predicate = self.interner.intern("Predicate");
        let mut operands = vec![symbol];
        operands.extend(args);
        self.arena.application(predicate, &operands)
    }

    fn apply_prefix(&mut self, idx: usize) -> ExprId {
        let entry = self.dict.entry(idx);
        if entry.parse_hook == ParseHook::Quantifier {
            return hooks::quantifier(self, idx);
        }
        let prec = entry.effective_precedence();
        let Some(name) = entry.name else {
            debug_assert!(false, "prefix entries name their operator");
            return error::missing_operand(&mut self.arena, self.interner);
        };
        let operand = self.parse_expression(Until::at(prec));
        self.arena.application(name, &[operand])
    }

    fn apply_function(&mut self, idx: usize) -> ExprId {
        let entry = self.dict.entry(idx);
        match entry.parse_hook {
            ParseHook::Trig => hooks::trig(self, idx),
            ParseHook::BigOperator => hooks::big_operator(self, idx),
            ParseHook::Fraction => hooks::fraction(self, idx),
            _ => self.apply_generic_function(idx),
        }
    }

    fn apply_generic_function(&mut self, idx: usize) -> ExprId {
        let entry = self.dict.entry(idx);
        let Some(name) = entry.name else {
            debug_assert!(false, "function entries name their operator");
            return error::missing_operand(&mut self.arena, self.interner);
        };
        match entry.arguments {
            Some(ArgumentStyle::Enclosure) | None => {
                self.cursor.skip_visual_space(self.options.skip_space);
                if matches!(self.cursor.current_kind(), Some(TokenKind::Char('('))) {
                    self.cursor.advance();
                    let args = self.parse_comma_separated(')');
                    self.arena.application(name, &args)
                } else {
                    self.arena.symbol(name)
                }
            }
            Some(ArgumentStyle::Implicit) => {
                let mult = mathlatex_dict::precedence::MULTIPLICATION;
                let arg = self.parse_expression(Until::at(mult));
                self.arena.application(name, &[arg])
            }
        }
    }

    fn apply_symbol_entry(&mut self, idx: usize, kind: EntryKind) -> ExprId {
        let entry = self.dict.entry(idx);
        let name = match entry.name.or(entry.symbol_trigger) {
            Some(name) => name,
            None => {
                debug_assert!(false, "symbol-triggered");
                return error::missing_operand(&mut self.arena, self.interner);
            }
        };
        match kind {
            EntryKind::Function => self.apply_generic_function(idx),
            _ => self.arena.symbol(name),
        }
    }

    // ── Infix / postfix selection and application ───────────────────────

    fn select_infix_or_postfix(&self) -> Option<usize> {
        let key = trigger_token_of(self.cursor.current_kind()?)?;
        for &idx in self.dict.by_trigger(EntryKind::Infix, key) {
            let entry = self.dict.entry(idx);
            if entry
                .latex_trigger
                .as_ref()
                .is_some_and(|t| self.cursor.matches_trigger(t))
            {
                return Some(idx);
            }
        }
        for &idx in self.dict.by_trigger(EntryKind::Postfix, key) {
            let entry = self.dict.entry(idx);
            if entry
                .latex_trigger
                .as_ref()
                .is_some_and(|t| self.cursor.matches_trigger(t))
            {
                return Some(idx);
            }
        }
        None
    }

    fn apply_operator(
        &mut self,
        idx: usize,
        lhs: ExprId,
        prec: u16,
        assoc: Associativity,
    ) -> ExprId {
        let entry = self.dict.entry(idx);
        if entry.parse_hook != ParseHook::Generic {
            return match entry.parse_hook {
                ParseHook::Dms => hooks::dms(self, idx, lhs),
                ParseHook::Congruence => hooks::congruence(self, idx, lhs),
                _ => unreachable!("infix/postfix hooks are Dms or Congruence only"),
            };
        }

        if entry.is_sigil_triggered() {
            return self.apply_sigil(idx, lhs);
        }

        let Some(name) = entry.name else {
            debug_assert!(false, "infix/postfix entries name their operator");
            return error::missing_operand(&mut self.arena, self.interner);
        };

        if entry.kind == EntryKind::Postfix {
            return self.arena.application(name, &[lhs]);
        }

        match assoc {
            Associativity::Left => {
                let rhs = self.parse_expression(Until::at(prec + 1));
                self.arena.application(name, &[lhs, rhs])
            }
            Associativity::Right => {
                let rhs = self.parse_expression(Until::at(prec));
                self.arena.application(name, &[lhs, rhs])
            }
            Associativity::None => {
                let rhs = self.parse_expression(Until::at(prec + 1));
                self.just_applied_none_assoc = Some(idx);
                self.arena.application(name, &[lhs, rhs])
            }
            Associativity::Any => {
                let rhs = self.parse_expression(Until::at(prec));
                self.fold_associative(name, lhs, rhs)
            }
        }
    }

    /// `foldAssociativeOperator` (§4.3.1 invariant 2, §8 invariant 2): if
    /// either side is already an application of `name`, flatten into one
    /// n-ary application instead of nesting.
    pub(crate) fn fold_associative(&mut self, name: mathlatex_ir::Name, lhs: ExprId, rhs: ExprId) -> ExprId {
        let mut operands = Vec::new();
        if error::head_is(&self.arena, lhs, name) {
            operands.extend_from_slice(self.arena.application_args(lhs));
        } else {
            operands.push(lhs);
        }
        if error::head_is(&self.arena, rhs, name) {
            operands.extend_from_slice(self.arena.application_args(rhs));
        } else {
            operands.push(rhs);
        }
        self.arena.application(name, &operands)
    }

    /// Superscript/subscript payload parsing (§4.3.3): a braced group or a
    /// single token, never a fully climbed expression.
    fn apply_sigil(&mut self, idx: usize, lhs: ExprId) -> ExprId {
        let entry = self.dict.entry(idx);
        let is_power = entry
            .latex_trigger
            .as_ref()
            .is_some_and(|t| matches!(t.first(), Some(TriggerToken::Char('^'))));

        // Trig inverse-exponent special case is handled by the trig hook
        // itself before the generic loop ever sees `^`; reaching here means
        // this is an ordinary superscript/subscript.
        let payload = self.parse_sigil_payload();
        let name = if is_power {
            self.interner.intern("Power")
        } else {
            self.interner.intern("Subscript")
        };
        self.arena.application(name, &[lhs, payload])
    }

    /// Parse the payload following a `^`/`_` sigil: an optional braced
    /// group, or a single token.
    pub(crate) fn parse_sigil_payload(&mut self) -> ExprId {
        self.cursor.skip_visual_space(self.options.skip_space);
        if matches!(self.cursor.current_kind(), Some(TokenKind::GroupOpen)) {
            self.cursor.advance();
            let inner = self.parse_expression(Until::top());
            self.cursor.skip_visual_space(self.options.skip_space);
            // A chained comparison like `1 \le i \le 10` never fully
            // consumes inside this grammar (non-associative operators
            // deliberately don't chain, §4.3.1) — discard whatever's left
            // up to the closing brace rather than letting it desync the
            // token stream for whoever resumes parsing after us.
            while !matches!(
                self.cursor.current_kind(),
                Some(TokenKind::GroupClose) | None
            ) {
                self.cursor.advance();
            }
            if matches!(self.cursor.current_kind(), Some(TokenKind::GroupClose)) {
                self.cursor.advance();
            }
            inner
        } else {
            self.parse_single_token_payload()
        }
    }

    /// A single non-braced sigil payload: one primary with no further
    /// operator climbing (`x^2`, not `x^2+1`).
    fn parse_single_token_payload(&mut self) -> ExprId {
        // A leading `-` is still allowed (`x^-1`) since negation binds
        // tighter than the sigil itself never applies here: treat it as
        // part of this one payload token.
        if matches!(self.cursor.current_kind(), Some(TokenKind::Char('-'))) {
            self.cursor.advance();
            let operand = self.parse_prefix_or_primary();
            let negate = self.interner.intern("Negate");
            return self.arena.application(negate, &[operand]);
        }
        self.parse_prefix_or_primary()
    }

    // ── Matchfix (§4.3.2) ────────────────────────────────────────────────

    fn try_matchfix(&mut self, open_key: TriggerToken) -> Option<ExprId> {
        let candidates = self.dict.matchfix_by_open(open_key).to_vec();
        if candidates.is_empty() {
            return None;
        }
        let start_pos = self.cursor.position();
        let mut first_open: Option<Trigger> = None;

        for idx in candidates {
            self.cursor.set_position(start_pos);
            let entry = self.dict.entry(idx);
            let (Some(open), Some(close)) = (entry.open_trigger.clone(), entry.close_trigger.clone())
            else {
                continue;
            };
            if !self.cursor.matches_trigger(&open) {
                continue;
            }
            first_open.get_or_insert_with(|| open.clone());
            self.cursor.consume_trigger(&open);
            let body = self.parse_comma_separated_until(&close);
            if !self.cursor.matches_trigger(&close) {
                // This pairing's closer never showed up — try the next
                // candidate (e.g. `(1, 2]` rejecting `Tuple`'s `)` falls
                // through to the mixed `Interval` pairing) rather than
                // failing outright (§4.3.2).
                continue;
            }
            if entry.parse_hook == ParseHook::IversonBracket && !hooks::iverson_accepts(self, &body)
            {
                continue; // backtrack to the next candidate (§4.3.2)
            }
            self.cursor.consume_trigger(&close);
            if entry.parse_hook == ParseHook::Interval {
                return Some(hooks::interval(self, idx, &body));
            }
            let Some(name) = entry.name else {
                debug_assert!(false, "matchfix entries name their result");
                return Some(error::missing_operand(&mut self.arena, self.interner));
            };
            return Some(self.arena.application(name, &body));
        }

        // No candidate's closer was ever found: report the unbalanced
        // delimiter, consuming just the open trigger so the outer loop can
        // keep recovering from whatever follows.
        self.cursor.set_position(start_pos);
        if let Some(open) = first_open {
            self.cursor.consume_trigger(&open);
            return Some(error::expected_close_delimiter(
                &mut self.arena,
                self.interner,
                "close delimiter",
            ));
        }
        None
    }

    /// Parse comma-separated expressions (at top precedence) until `stop`
    /// (exclusive) is seen, without consuming it.
    pub(crate) fn parse_comma_separated_until(&mut self, stop: &[TriggerToken]) -> Vec<ExprId> {
        let mut items = Vec::new();
        self.cursor.skip_visual_space(self.options.skip_space);
        if self.cursor.matches_trigger(stop) {
            return items;
        }
        loop {
            items.push(self.parse_expression(Until::top()));
            self.cursor.skip_visual_space(self.options.skip_space);
            if matches!(self.cursor.current_kind(), Some(TokenKind::Char(','))) {
                self.cursor.advance();
                self.cursor.skip_visual_space(self.options.skip_space);
                continue;
            }
            break;
        }
        items
    }

    /// Parse comma-separated expressions up to and including a single
    /// closing `Char` delimiter (tuples, lists, generic function calls).
    pub(crate) fn parse_comma_separated(&mut self, close: char) -> Vec<ExprId> {
        let stop = [TriggerToken::Char(close)];
        let items = self.parse_comma_separated_until(&stop);
        if self.cursor.matches_trigger(&stop) {
            self.cursor.consume_trigger(&stop);
        }
        items
    }

    // ── Quantifier tight-mode connective detection (§4.3.7) ─────────────

    fn peeks_logical_connective(&self) -> bool {
        const CONNECTIVES: &[&str] = &["land", "lor", "to", "implies", "iff"];
        matches!(self.cursor.current_kind(), Some(TokenKind::Command { name, .. })
            if CONNECTIVES.contains(&self.interner.resolve(name)))
    }

    pub(crate) fn peeks_trig_function(&self) -> bool {
        let Some(kind) = self.cursor.current_kind() else {
            return false;
        };
        let Some(key) = trigger_token_of(kind) else {
            return false;
        };
        self.dict
            .by_trigger(EntryKind::Function, key)
            .iter()
            .any(|&i| self.dict.entry(i).parse_hook == ParseHook::Trig)
    }

    pub(crate) fn starts_primary(&self) -> bool {
        let Some(kind) = self.cursor.current_kind() else {
            return false;
        };
        match kind {
            TokenKind::Char(c) => {
                c.is_ascii_digit() || c.is_alphabetic() || c == self.options.decimal_separator
            }
            TokenKind::GroupOpen => true,
            TokenKind::Command { name, .. } => {
                let Some(key) = trigger_token_of(kind) else {
                    return false;
                };
                !self.dict.by_trigger(EntryKind::Prefix, key).is_empty()
                    || !self.dict.by_trigger(EntryKind::Function, key).is_empty()
                    || !self.dict.by_trigger(EntryKind::Symbol, key).is_empty()
                    || !self.dict.by_symbol_trigger(name).is_empty()
                    || number::matches_spelling(&self.cursor, &self.positive_infinity_spelling)
                    || number::matches_spelling(&self.cursor, &self.not_a_number_spelling)
            }
            _ => {
                trigger_token_of(kind).is_some_and(|key| {
                    !self.dict.matchfix_by_open(key).is_empty()
                })
            }
        }
    }
}

fn spell_tokens(latex: &str, interner: &StringInterner) -> Vec<TokenKind> {
    mathlatex_lexer::tokenize(latex, interner)
        .as_slice()
        .iter()
        .map(|t| t.kind)
        .collect()
}
