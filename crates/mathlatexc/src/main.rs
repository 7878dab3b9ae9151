//! `mathlatex` CLI: `parse`, `serialize`, and `eval-interval` over the
//! library crates, for manual exercising and golden-output tests.

mod eval;
mod tracing_setup;

use mathlatex_diagnostic::{terminal, Diagnostic};
use mathlatex_dict::{index, prepare, standard_entries, IndexedDictionary};
use mathlatex_fmt::SerializeOptions;
use mathlatex_interval::{Clipped, Interval, IntervalResult};
use mathlatex_ir::{ExprArena, ExprId, ExprNode, StringInterner};
use mathlatex_parse::{parse, ParseOptions};

fn main() {
    tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: mathlatex parse <file>");
                std::process::exit(1);
            };
            parse_command(path, false);
        }
        "serialize" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: mathlatex serialize <file> [--strict]");
                std::process::exit(1);
            };
            let strict = args.iter().skip(3).any(|a| a == "--strict");
            parse_command(path, strict);
        }
        "eval-interval" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: mathlatex eval-interval <file> --lo <f64> --hi <f64> [--var <name>]");
                std::process::exit(1);
            };
            eval_interval_command(path, &args[3..]);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" => println!("mathlatex {}", env!("CARGO_PKG_VERSION")),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("mathlatex (MathJSON LaTeX parser, serializer, interval evaluator)");
    println!();
    println!("Usage: mathlatex <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <file>                          Parse and summarize a LaTeX expression");
    println!("  serialize <file> [--strict]            Round-trip a LaTeX expression back to LaTeX");
    println!("  eval-interval <file> --lo <f64> --hi <f64> [--var <name>]");
    println!("                                        Bound a single-variable expression's image");
    println!("  help                                  Show this help message");
    println!("  version                               Show version information");
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading '{path}': {e}");
            std::process::exit(1);
        }
    }
}

/// Build the dictionary, surfacing indexing warnings the same way
/// `standard_dictionary` discards them for library callers.
fn build_dictionary(interner: &StringInterner) -> IndexedDictionary {
    let mut warnings: Vec<Diagnostic> = Vec::new();
    let entries = prepare(standard_entries(interner), interner);
    let dict = index(entries, interner, |diag| warnings.push(diag));
    for diag in &warnings {
        eprintln!("{}", terminal::render(diag));
    }
    dict
}

fn count_errors(arena: &ExprArena, id: ExprId) -> usize {
    match arena.get(id) {
        ExprNode::Error { detail, .. } => 1 + detail.map_or(0, |d| count_errors(arena, d)),
        ExprNode::Application { .. } => arena
            .application_args(id)
            .iter()
            .map(|&a| count_errors(arena, a))
            .sum(),
        ExprNode::Dict(entries) => entries.iter().map(|(_, v)| count_errors(arena, *v)).sum(),
        ExprNode::Symbol(_) | ExprNode::Number(_) | ExprNode::String(_) => 0,
    }
}

fn parse_command(path: &str, strict: bool) {
    let content = read_file(path);
    let interner = StringInterner::new();
    let dict = build_dictionary(&interner);
    let options = ParseOptions::default();

    let Some(output) = parse(&content, &dict, &interner, &options) else {
        eprintln!("'{path}' contains no tokens to parse");
        std::process::exit(1);
    };

    let errors = count_errors(&output.arena, output.root);
    let serialize_options = SerializeOptions {
        pretty: !strict,
        ..SerializeOptions::default()
    };
    let rendered = mathlatex_fmt::serialize(&output.arena, &dict, &interner, output.root, &serialize_options);

    println!("Parsed '{path}':");
    println!("  Nodes: {}", output.arena.len());
    println!("  Recovered errors: {errors}");
    println!("  Serialized: {rendered}");
}

fn eval_interval_command(path: &str, rest: &[String]) {
    let mut lo: Option<f64> = None;
    let mut hi: Option<f64> = None;
    let mut var = "x".to_string();

    let mut i = 0;
    while i < rest.len() {
        match rest[i].as_str() {
            "--lo" => {
                lo = rest.get(i + 1).and_then(|s| s.parse().ok());
                i += 2;
            }
            "--hi" => {
                hi = rest.get(i + 1).and_then(|s| s.parse().ok());
                i += 2;
            }
            "--var" => {
                if let Some(v) = rest.get(i + 1) {
                    var = v.clone();
                }
                i += 2;
            }
            _ => i += 1,
        }
    }

    let (Some(lo), Some(hi)) = (lo, hi) else {
        eprintln!("Usage: mathlatex eval-interval <file> --lo <f64> --hi <f64> [--var <name>]");
        std::process::exit(1);
    };

    let content = read_file(path);
    let interner = StringInterner::new();
    let dict = build_dictionary(&interner);
    let options = ParseOptions::default();

    let Some(output) = parse(&content, &dict, &interner, &options) else {
        eprintln!("'{path}' contains no tokens to parse");
        std::process::exit(1);
    };

    if count_errors(&output.arena, output.root) > 0 {
        eprintln!("'{path}' did not parse cleanly; eval-interval needs an error-free expression");
        std::process::exit(1);
    }

    let var_name = interner.intern(&var);
    let input = Interval::new(lo, hi);
    match eval::eval_interval(&output.arena, &interner, var_name, input, output.root) {
        Ok(result) => println!("{}", format_result(&result)),
        Err(message) => {
            eprintln!("eval-interval: {message}");
            std::process::exit(1);
        }
    }
}

fn format_result(result: &IntervalResult) -> String {
    match result {
        IntervalResult::Value(i) => format!("[{}, {}]", i.lo, i.hi),
        IntervalResult::Partial { value, domain_clipped } => {
            let which = match domain_clipped {
                Clipped::Lo => "lo",
                Clipped::Hi => "hi",
                Clipped::Both => "both",
            };
            format!("partial [{}, {}] (domain clipped: {which})", value.lo, value.hi)
        }
        IntervalResult::Empty => "empty".to_string(),
        IntervalResult::Entire => "entire (-inf, inf)".to_string(),
        IntervalResult::Singular { at, continuity } => match continuity {
            None => format!("pole at {at}"),
            Some(mathlatex_interval::Continuity::Left) => format!("jump at {at} (left)"),
            Some(mathlatex_interval::Continuity::Right) => format!("jump at {at} (right)"),
        },
    }
}
