//! Minimal human-readable rendering of diagnostics for CLI output.
//!
//! Trimmed relative to the teacher's `ori_diagnostic::emitter` module (which
//! also ships JSON and SARIF emitters for IDE/CI integration): this
//! workspace has no LSP or CI surface in scope, so only the terminal
//! renderer the CLI needs is kept.

use crate::Diagnostic;

/// Render a diagnostic as a single human-readable line, e.g.
/// `warning[D0005]: infix entry missing precedence`.
#[must_use]
pub fn render(diag: &Diagnostic) -> String {
    let level = match diag.severity {
        crate::Severity::Warning => "warning",
        crate::Severity::Error => "error",
    };
    let mut out = format!("{level}[{}]: {}", diag.code, diag.message);
    for label in &diag.labels {
        out.push_str(&format!(
            "\n  --> tokens {}..{}: {}",
            label.span.start, label.span.end, label.message
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn renders_code_and_message() {
        let diag = Diagnostic::warning(ErrorCode::DictDuplicateName, "duplicate name 'Sum'");
        assert_eq!(render(&diag), "warning[D0008]: duplicate name 'Sum'");
    }
}
