//! The `Diagnostic` record and its severity.

use mathlatex_ir::Span;

use crate::ErrorCode;

/// How serious a diagnostic is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// Dictionary indexing continues; the offending entry is skipped (§4.2).
    Warning,
    /// Recovered in-band as an `Error` expression node; parsing continues (§7).
    Error,
}

/// A single point of interest within a diagnostic — where, and why.
#[derive(Clone, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// A diagnostic emitted by dictionary validation or parse-error recovery.
///
/// Unlike a thrown exception, a `Diagnostic` never unwinds control flow: it
/// is handed to an `onError` callback (dictionary indexing, §4.2) or folded
/// into the expression tree as an `Error` node (parsing, §7). Construction
/// never fails and never panics.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
}

impl Diagnostic {
    #[must_use]
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Warning,
            message: message.into(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: message.into(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
        });
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
