//! Walks a MathJSON tree emitting LaTeX, choosing delimiters/styles per
//! precedence context (§4.4).

use mathlatex_dict::{precedence, ArgumentStyle, EntryKind, IndexedDictionary};
use mathlatex_ir::{ExprArena, ExprHead, ExprId, ExprNode, Name, Number, StringInterner};

use crate::options::{FractionStyle, GroupStyle, NumericSetStyle, RootStyle, SerializeOptions};

/// Precedence high enough that a bare symbol, number, or already-delimited
/// group never needs parenthesizing.
const ATOM_PRECEDENCE: u16 = u16::MAX;

pub struct Serializer<'a> {
    arena: &'a ExprArena,
    dict: &'a IndexedDictionary,
    interner: &'a StringInterner,
    options: &'a SerializeOptions,
}

impl<'a> Serializer<'a> {
    #[must_use]
    pub fn new(
        arena: &'a ExprArena,
        dict: &'a IndexedDictionary,
        interner: &'a StringInterner,
        options: &'a SerializeOptions,
    ) -> Self {
        Serializer {
            arena,
            dict,
            interner,
            options,
        }
    }

    /// Serialize `id` for a context whose operator has precedence
    /// `ctx_precedence`, parenthesizing if `id`'s own precedence is lower
    /// (§4.4 `wrap`).
    #[must_use]
    pub fn wrap(&self, id: ExprId, ctx_precedence: u16) -> String {
        let rendered = self.render(id);
        if self.own_precedence(id) < ctx_precedence {
            self.grouped(&rendered)
        } else {
            rendered
        }
    }

    /// Single-token form: no enclosing braces, used for exponents/subscripts
    /// whose body is already atomic (§4.4 `wrapShort`).
    #[must_use]
    pub fn wrap_short(&self, id: ExprId) -> String {
        let rendered = self.render(id);
        if self.is_single_token(id) {
            rendered
        } else {
            format!("{{{rendered}}}")
        }
    }

    /// `(arg1, arg2, …)` (§4.4 `wrapArguments`).
    #[must_use]
    pub fn wrap_arguments(&self, args: &[ExprId]) -> String {
        let rendered: Vec<String> = args.iter().map(|&a| self.render(a)).collect();
        format!("({})", rendered.join(", "))
    }

    /// Apply identifier-to-LaTeX mapping for a bare symbol (§4.4
    /// `serializeSymbol`): its dictionary trigger if registered, else the
    /// interned name verbatim.
    #[must_use]
    pub fn serialize_symbol(&self, name: Name) -> String {
        if let Some(entry) = self.dict.by_name(name) {
            if let Some(trigger) = &entry.latex_trigger {
                return trigger_to_latex(trigger, self.interner);
            }
        }
        self.interner.resolve(name).to_string()
    }

    fn grouped(&self, inner: &str) -> String {
        match self.options.group_style {
            GroupStyle::Paren => format!("\\left({inner}\\right)"),
            GroupStyle::Bracket => format!("\\left[{inner}\\right]"),
            GroupStyle::Brace => format!("\\left\\{{{inner}\\right\\}}"),
        }
    }

    fn is_single_token(&self, id: ExprId) -> bool {
        matches!(
            self.arena.get(id),
            ExprNode::Symbol(_)
                | ExprNode::Number(Number::Rational(_, 1) | Number::Float(_) | Number::Decimal(_))
        )
    }

    fn own_precedence(&self, id: ExprId) -> u16 {
        match self.arena.get(id) {
            ExprNode::Symbol(_) | ExprNode::Number(_) | ExprNode::String(_) => ATOM_PRECEDENCE,
            ExprNode::Dict(_) | ExprNode::Error { .. } => ATOM_PRECEDENCE,
            ExprNode::Application { head, .. } => match head {
                ExprHead::Expr(_) => ATOM_PRECEDENCE,
                ExprHead::Symbol(name) => self.dict.by_name(*name).map_or(ATOM_PRECEDENCE, |e| {
                    if e.kind.requires_precedence() {
                        e.effective_precedence()
                    } else {
                        ATOM_PRECEDENCE
                    }
                }),
            },
        }
    }

    /// Render `id` with no enclosing-precedence decision — the dispatch
    /// entry point every other method in this file funnels through.
    #[must_use]
    pub fn render(&self, id: ExprId) -> String {
        match self.arena.get(id) {
            ExprNode::Symbol(name) => self.serialize_symbol(*name),
            ExprNode::Number(n) => self.render_number(n),
            ExprNode::String(s) => format!("\\text{{{s}}}"),
            ExprNode::Dict(_) => String::new(),
            ExprNode::Error { kind, .. } => format!("\\text{{error: {}}}", self.interner.resolve(*kind)),
            ExprNode::Application { head, args } => {
                let args = self.arena.args(*args);
                match head {
                    ExprHead::Expr(head_id) => self.render_expr_head_application(*head_id, args),
                    ExprHead::Symbol(name) => self.render_named_application(*name, args),
                }
            }
        }
    }

    fn render_number(&self, n: &Number) -> String {
        match n {
            Number::Rational(v, 1) => v.to_string(),
            Number::Rational(num, den) => self.render_fraction_parts(&num.to_string(), &den.to_string()),
            Number::Float(f) => format!("{f}"),
            Number::Decimal(text) => text.to_string(),
            Number::Complex(re, im) => format!("({} + {}i)", self.render_number(re), self.render_number(im)),
        }
    }

    fn render_expr_head_application(&self, head_id: ExprId, args: &[ExprId]) -> String {
        let head = self.render(head_id);
        let rendered_args: Vec<String> = args.iter().map(|&a| self.wrap_short(a)).collect();
        format!("{head}\\left({}\\right)", rendered_args.join(", "))
    }

    #[allow(clippy::too_many_lines)]
    fn render_named_application(&self, name: Name, args: &[ExprId]) -> String {
        let name_str = self.interner.resolve(name);
        match name_str {
            "Add" => self.render_add(args),
            "Subtract" => self.render_infix(name, args, " - "),
            "Negate" => format!("-{}", self.wrap(args[0], precedence::ADDITION + 1)),
            "Multiply" => self.render_multiply(args),
            "Power" => self.render_power(args),
            "Subscript" => format!(
                "{}_{}",
                self.wrap(args[0], precedence::SIGIL),
                self.wrap_short(args[1])
            ),
            "Divide" => self.render_fraction(args),
            "Sum" | "Product" | "Integrate" => self.render_big_operator(name_str, args),
            "ForAll" | "Exists" | "ExistsUnique" => self.render_quantifier(name_str, args),
            "Apply" => self.render_apply(args),
            "InverseFunction" => format!("{}^{{-1}}", self.wrap_short(args[0])),
            "D" => self.render_leibniz_derivative(args),
            "PartialDerivative" => self.render_partial_derivative(args),
            "Congruent" => self.render_congruence(args),
            "Quantity" => self.render_quantity(args),
            "Interval" => self.render_interval(args),
            "Open" => self.render(args[0]),
            "Tuple" => self.render_matchfix_body(args, "(", ")"),
            "List" => self.render_matchfix_body(args, "[", "]"),
            "Element" => self.render_infix(name, args, " \\in "),
            _ => self.render_generic(name, args),
        }
    }

    fn render_add(&self, args: &[ExprId]) -> String {
        if self.options.pretty && args.len() == 2 && self.all_quantities(args) {
            return self.render_dms_chain(args);
        }
        if self.options.pretty && args.len() == 2 {
            if let Some(mixed) = self.try_mixed_number(args[0], args[1]) {
                return mixed;
            }
        }
        let mut out = String::new();
        for (i, &a) in args.iter().enumerate() {
            if i > 0 {
                if self.options.pretty && self.is_plain_negate(a) {
                    out.push_str(" - ");
                    out.push_str(&self.wrap(self.negate_inner(a), precedence::ADDITION));
                    continue;
                }
                out.push_str(" + ");
            }
            out.push_str(&self.wrap(a, precedence::ADDITION));
        }
        out
    }

    fn is_plain_negate(&self, id: ExprId) -> bool {
        self.arena.head_name(id).is_some_and(|n| self.interner.resolve(n) == "Negate")
            && self.arena.arity(id) == 1
    }

    fn negate_inner(&self, id: ExprId) -> ExprId {
        self.arena.application_args(id)[0]
    }

    fn try_mixed_number(&self, whole: ExprId, frac: ExprId) -> Option<String> {
        let ExprNode::Number(Number::Rational(n, 1)) = self.arena.get(whole) else {
            return None;
        };
        let ExprNode::Number(Number::Rational(num, den)) = self.arena.get(frac) else {
            return None;
        };
        if *n <= 0 || *num <= 0 || *den <= 1 {
            return None;
        }
        Some(format!("{n}\\frac{{{num}}}{{{den}}}"))
    }

    fn all_quantities(&self, args: &[ExprId]) -> bool {
        args.iter().all(|&a| {
            self.arena
                .head_name(a)
                .is_some_and(|n| self.interner.resolve(n) == "Quantity")
        })
    }

    fn render_dms_chain(&self, args: &[ExprId]) -> String {
        args.iter().map(|&a| self.render(a)).collect::<Vec<_>>().join(" ")
    }

    fn render_quantity(&self, args: &[ExprId]) -> String {
        let value = self.render(args[0]);
        let ExprNode::String(unit) = self.arena.get(args[1]) else {
            return value;
        };
        match &**unit {
            "deg" => format!("{value}^\\circ"),
            "arcmin" => format!("{value}'"),
            "arcsec" => format!("{value}\""),
            _ => value,
        }
    }

    fn render_infix(&self, name: Name, args: &[ExprId], joiner: &str) -> String {
        let prec = self.entry_precedence(name);
        args.iter()
            .map(|&a| self.wrap(a, prec))
            .collect::<Vec<_>>()
            .join(joiner)
    }

    fn render_multiply(&self, args: &[ExprId]) -> String {
        let mut out = String::new();
        for (i, &a) in args.iter().enumerate() {
            let rendered = self.wrap(a, precedence::MULTIPLICATION);
            if i == 0 {
                out.push_str(&rendered);
                continue;
            }
            if self.options.pretty && self.juxtaposes(args[i - 1], a) {
                out.push_str(&rendered);
            } else {
                out.push_str("\\cdot ");
                out.push_str(&rendered);
            }
        }
        out
    }

    /// Pretty mode drops `\cdot` between a numeric coefficient and a
    /// following symbol/power (`3x^2`, not `3 \cdot x^2`).
    fn juxtaposes(&self, prev: ExprId, next: ExprId) -> bool {
        matches!(self.arena.get(prev), ExprNode::Number(Number::Rational(_, 1)))
            && matches!(
                self.arena.get(next),
                ExprNode::Symbol(_)
                    | ExprNode::Application {
                        head: ExprHead::Symbol(_),
                        ..
                    }
            )
    }

    fn render_power(&self, args: &[ExprId]) -> String {
        let base = self.wrap(args[0], precedence::SIGIL);
        format!("{base}^{}", self.wrap_short(args[1]))
    }

    fn render_fraction(&self, args: &[ExprId]) -> String {
        self.render_fraction_parts(&self.render(args[0]), &self.render(args[1]))
    }

    fn render_fraction_parts(&self, num: &str, den: &str) -> String {
        match self.options.fraction_style {
            FractionStyle::Quotient | FractionStyle::BlockQuotient | FractionStyle::InlineQuotient => {
                format!("\\frac{{{num}}}{{{den}}}")
            }
            FractionStyle::InlineSolidus | FractionStyle::NiceSolidus => format!("{num}/{den}"),
            FractionStyle::Reciprocal if num == "1" => format!("{den}^{{-1}}"),
            FractionStyle::Reciprocal => format!("\\frac{{{num}}}{{{den}}}"),
            FractionStyle::Factor => format!("{num} \\cdot {den}^{{-1}}"),
        }
    }

    fn render_big_operator(&self, name: &str, args: &[ExprId]) -> String {
        let trigger = match name {
            "Sum" => "\\sum",
            "Product" => "\\prod",
            _ => "\\int",
        };
        let body = self.wrap(args[0], precedence::MULTIPLICATION);
        let tuple_args = self.arena.application_args(args[1]);
        let is_integral = name == "Integrate";
        let bounds = match tuple_args.len() {
            3 if is_integral => format!(
                "_{{{}}}^{{{}}}",
                self.render(tuple_args[1]),
                self.render(tuple_args[2])
            ),
            3 => format!(
                "_{{{}={}}}^{{{}}}",
                self.render(tuple_args[0]),
                self.render(tuple_args[1]),
                self.render(tuple_args[2])
            ),
            2 => format!(
                "_{{{} \\in {}}}",
                self.render(tuple_args[0]),
                self.render(tuple_args[1])
            ),
            1 => format!("_{{{}}}", self.render(tuple_args[0])),
            _ => String::new(),
        };
        if is_integral {
            let var = tuple_args.first().map(|&v| self.render(v)).unwrap_or_default();
            format!("{trigger}{bounds} {body} \\, d{var}")
        } else {
            format!("{trigger}{bounds} {body}")
        }
    }

    fn render_quantifier(&self, name: &str, args: &[ExprId]) -> String {
        let trigger = match name {
            "ForAll" => "\\forall",
            "ExistsUnique" => "\\exists!",
            _ => "\\exists",
        };
        format!("{trigger} {}, {}", self.render(args[0]), self.render(args[1]))
    }

    fn render_apply(&self, args: &[ExprId]) -> String {
        let head = self.render(args[0]);
        let rest: Vec<String> = args[1..].iter().map(|&a| self.wrap_short(a)).collect();
        format!("{head} {}", rest.join(", "))
    }

    fn render_leibniz_derivative(&self, args: &[ExprId]) -> String {
        let var = self.render(args[1]);
        format!("\\frac{{d}}{{d{var}}} {}", self.wrap(args[0], precedence::MULTIPLICATION))
    }

    fn render_partial_derivative(&self, args: &[ExprId]) -> String {
        let f = self.render(args[0]);
        let vars = self.arena.application_args(args[1]);
        let degree = self.render(args[2]);
        let denom: Vec<String> = vars.iter().map(|&v| format!("\\partial {}", self.render(v))).collect();
        format!(
            "\\frac{{\\partial^{degree} {f}}}{{{}}}",
            denom.join(" ")
        )
    }

    fn render_congruence(&self, args: &[ExprId]) -> String {
        let a = self.render(args[0]);
        let b = self.render(args[1]);
        match args.get(2) {
            Some(&n) => format!("{a} \\equiv {b} \\pmod{{{}}}", self.render(n)),
            None => format!("{a} \\equiv {b}"),
        }
    }

    fn render_interval(&self, args: &[ExprId]) -> String {
        let open_bound = |id: ExprId| -> (bool, ExprId) {
            self.arena
                .head_name(id)
                .filter(|n| self.interner.resolve(*n) == "Open")
                .map_or((false, id), |_| (true, self.arena.application_args(id)[0]))
        };
        let (lo_open, lo) = open_bound(args[0]);
        let (hi_open, hi) = open_bound(args[1]);
        let open_delim = if lo_open { "(" } else { "[" };
        let close_delim = if hi_open { ")" } else { "]" };
        format!(
            "{open_delim}{}, {}{close_delim}",
            self.render(lo),
            self.render(hi)
        )
    }

    fn render_matchfix_body(&self, args: &[ExprId], open: &str, close: &str) -> String {
        let body: Vec<String> = args.iter().map(|&a| self.render(a)).collect();
        format!("{open}{}{close}", body.join(", "))
    }

    fn entry_precedence(&self, name: Name) -> u16 {
        self.dict.by_name(name).map_or(ATOM_PRECEDENCE, |e| e.effective_precedence())
    }

    /// Any entry not given a dedicated rendering above falls back to a
    /// kind-driven generic strategy built entirely from `kind`/`precedence`
    /// (mirrors `ParseHook::Generic` on the parse side).
    fn render_generic(&self, name: Name, args: &[ExprId]) -> String {
        let Some(entry) = self.dict.by_name(name) else {
            return self.render_matchfix_body(args, "(", ")");
        };
        let trigger = entry
            .latex_trigger
            .as_ref()
            .map(|t| trigger_to_latex(t, self.interner))
            .unwrap_or_else(|| self.interner.resolve(name).to_string());
        match entry.kind {
            EntryKind::Infix => {
                let prec = entry.effective_precedence();
                let joiner = format!(" {trigger} ");
                args.iter()
                    .map(|&a| self.wrap(a, prec))
                    .collect::<Vec<_>>()
                    .join(&joiner)
            }
            EntryKind::Prefix => {
                let prec = entry.effective_precedence();
                format!("{trigger} {}", self.wrap(args[0], prec))
            }
            EntryKind::Postfix => {
                let prec = entry.effective_precedence();
                format!("{}{trigger}", self.wrap(args[0], prec))
            }
            EntryKind::Function if entry.arguments == Some(ArgumentStyle::Implicit) => {
                format!("{trigger} {}", self.wrap_short(args[0]))
            }
            EntryKind::Function | EntryKind::Matchfix | EntryKind::Environment | EntryKind::Expression => {
                format!("{trigger}{}", self.wrap_arguments(args))
            }
            EntryKind::Symbol => trigger,
        }
    }

    #[must_use]
    pub fn root_style(&self) -> RootStyle {
        self.options.root_style
    }

    #[must_use]
    pub fn numeric_set_style(&self) -> NumericSetStyle {
        self.options.numeric_set_style
    }
}

fn trigger_to_latex(trigger: &[mathlatex_dict::TriggerToken], interner: &StringInterner) -> String {
    let mut out = String::new();
    for token in trigger {
        match token {
            mathlatex_dict::TriggerToken::Command(name) => {
                out.push('\\');
                out.push_str(interner.resolve(*name));
            }
            mathlatex_dict::TriggerToken::Char(c) => out.push(*c),
            mathlatex_dict::TriggerToken::GroupOpen => out.push('{'),
            mathlatex_dict::TriggerToken::GroupClose => out.push('}'),
        }
    }
    out
}
