//! Command-name lookup table for visual-space classification (§4.1).
//!
//! LaTeX has several spacing macros that carry no semantic content beyond
//! "some horizontal space goes here". The tokenizer recognizes them by
//! command name (with the leading backslash already stripped) and emits
//! [`mathlatex_ir::TokenKind::Space`] instead of a generic `Command`, the
//! same way a keyword table turns `Ident("if")` into `TokenKind::If` in a
//! general-purpose lexer.

use mathlatex_ir::VisualSpaceKind;

/// Resolve a command name (without the leading `\`) to a visual-space kind,
/// or `None` if it names an ordinary command.
#[must_use]
pub(crate) fn visual_space(name: &str) -> Option<VisualSpaceKind> {
    match name {
        "," => Some(VisualSpaceKind::Thin),
        ";" => Some(VisualSpaceKind::Thick),
        "!" => Some(VisualSpaceKind::Thin),
        " " => Some(VisualSpaceKind::Plain),
        "quad" => Some(VisualSpaceKind::Quad),
        "qquad" => Some(VisualSpaceKind::Quad),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_and_qquad_both_resolve() {
        assert_eq!(visual_space("quad"), Some(VisualSpaceKind::Quad));
        assert_eq!(visual_space("qquad"), Some(VisualSpaceKind::Quad));
    }

    #[test]
    fn ordinary_command_names_resolve_to_none() {
        assert_eq!(visual_space("frac"), None);
        assert_eq!(visual_space("int"), None);
    }
}
