//! `eval-interval`: walks a parsed, single-variable expression through
//! `mathlatex_interval`, substituting the free variable for an input
//! range. Not a symbolic evaluator — it only knows the arithmetic,
//! elementary, and trig operator names the interval crate itself
//! implements, and errors on anything else.

use std::f64::consts::PI;

use mathlatex_interval::{self as iv, Interval, IntervalResult};
use mathlatex_ir::{ExprArena, ExprId, ExprNode, Name, Number, StringInterner};

/// Evaluate `root` over `input`, treating every occurrence of `var` as that
/// interval and erroring on anything the interval crate can't express.
pub fn eval_interval(
    arena: &ExprArena,
    interner: &StringInterner,
    var: Name,
    input: Interval,
    root: ExprId,
) -> Result<IntervalResult, String> {
    walk(arena, interner, var, input, root)
}

fn walk(
    arena: &ExprArena,
    interner: &StringInterner,
    var: Name,
    input: Interval,
    id: ExprId,
) -> Result<IntervalResult, String> {
    match arena.get(id) {
        ExprNode::Symbol(name) if *name == var => Ok(IntervalResult::Value(input)),
        ExprNode::Symbol(name) => match interner.resolve(*name) {
            "Pi" => Ok(IntervalResult::Value(Interval::degenerate(PI))),
            other => Err(format!("unbound symbol `{other}`")),
        },
        ExprNode::Number(n) => Ok(IntervalResult::Value(Interval::degenerate(n.to_f64()))),
        ExprNode::Application { .. } => {
            let head = arena
                .head_name(id)
                .ok_or_else(|| "an expression-valued head is not supported".to_string())?;
            let name = interner.resolve(head);
            let args = arena.application_args(id);
            dispatch(arena, interner, var, input, name, args)
        }
        ExprNode::String(_) | ExprNode::Dict(_) | ExprNode::Error { .. } => {
            Err("non-numeric node is not supported".to_string())
        }
    }
}

fn dispatch(
    arena: &ExprArena,
    interner: &StringInterner,
    var: Name,
    input: Interval,
    name: &str,
    args: &[ExprId],
) -> Result<IntervalResult, String> {
    let operand = |i: usize| walk(arena, interner, var, input, args[i]);

    match name {
        "Add" => args
            .iter()
            .try_fold(IntervalResult::Value(Interval::degenerate(0.0)), |acc, &a| {
                Ok(iv::add(acc, walk(arena, interner, var, input, a)?))
            }),
        "Multiply" => args
            .iter()
            .try_fold(IntervalResult::Value(Interval::degenerate(1.0)), |acc, &a| {
                Ok(iv::mul(acc, walk(arena, interner, var, input, a)?))
            }),
        "Negate" if args.len() == 1 => Ok(iv::mul(operand(0)?, Interval::degenerate(-1.0))),
        "Subtract" if args.len() == 2 => Ok(iv::sub(operand(0)?, operand(1)?)),
        "Divide" if args.len() == 2 => Ok(iv::div(operand(0)?, operand(1)?)),
        "Power" if args.len() == 2 => eval_power(arena, interner, var, input, args),
        "Sin" if args.len() == 1 => Ok(iv::sin(operand(0)?)),
        "Cos" if args.len() == 1 => Ok(iv::cos(operand(0)?)),
        "Tan" if args.len() == 1 => Ok(iv::tan(operand(0)?)),
        "Cot" if args.len() == 1 => Ok(iv::cot(operand(0)?)),
        "Sec" if args.len() == 1 => Ok(iv::sec(operand(0)?)),
        "Csc" if args.len() == 1 => Ok(iv::csc(operand(0)?)),
        "Arcsin" if args.len() == 1 => Ok(iv::arcsin(operand(0)?)),
        "Arccos" if args.len() == 1 => Ok(iv::arccos(operand(0)?)),
        "Arctan" if args.len() == 1 => Ok(iv::arctan(operand(0)?)),
        other => Err(format!("`{other}` is not supported by eval-interval")),
    }
}

/// `Power`'s exponent must be a literal number (the interval crate's `pow`
/// takes a concrete exponent, not an interval one) — an integer literal
/// uses the parity-aware `pow_i32`, anything else falls back to `pow_f64`.
fn eval_power(
    arena: &ExprArena,
    interner: &StringInterner,
    var: Name,
    input: Interval,
    args: &[ExprId],
) -> Result<IntervalResult, String> {
    let base = walk(arena, interner, var, input, args[0])?;
    let ExprNode::Number(exponent) = arena.get(args[1]) else {
        return Err("Power with a non-constant exponent is not supported".to_string());
    };
    match exponent {
        Number::Rational(n, 1) => match i32::try_from(*n) {
            Ok(n) => Ok(iv::pow_i32(base, n)),
            Err(_) => Err(format!("exponent {n} is out of range")),
        },
        other => Ok(iv::pow_f64(base, other.to_f64())),
    }
}
