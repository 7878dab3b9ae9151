//! Stable, searchable codes for diagnostics.

/// A stable diagnostic code, searchable independently of message text.
///
/// Ranges follow the teacher's convention of grouping by subsystem:
/// `D0xxx` dictionary validation (§4.2), `P0xxx` parse-time recovery (§7).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// A `serialize` handler was registered without a `name`.
    DictSerializeWithoutName,
    /// An entry declared a `kind` outside the permitted set.
    DictInvalidKind,
    /// `name` or `symbolTrigger` is not a valid MathJSON identifier.
    DictInvalidIdentifier,
    /// A matchfix entry is missing `openTrigger`/`closeTrigger`, or their
    /// trigger types don't match.
    DictMatchfixTriggerMismatch,
    /// An infix/prefix/postfix entry lacks `precedence` (and isn't a `^`/`_`
    /// sigil entry, which has it fixed at 720).
    DictMissingPrecedence,
    /// A `^`/`_` sigil entry specified `precedence` explicitly (forbidden —
    /// it is fixed at 720).
    DictSigilPrecedenceOverride,
    /// An entry has neither a trigger nor a `name` (and isn't
    /// matchfix/environment, which are exempt).
    DictNoTriggerOrName,
    /// Duplicate `name` across entries (warning, not fatal — last wins).
    DictDuplicateName,

    /// §7: unexpected token, `parseUnexpectedToken` returned `None`.
    ParseUnexpectedToken,
    /// §7: a matchfix body never found its close trigger.
    ParseUnbalancedDelimiter,
    /// §7: a number literal's raw text didn't parse under the active
    /// `parseNumbers` mode.
    ParseInvalidNumber,
    /// §7: an infix operator consumed its LHS but no RHS could be parsed.
    ParseMissingOperand,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DictSerializeWithoutName => "D0001",
            ErrorCode::DictInvalidKind => "D0002",
            ErrorCode::DictInvalidIdentifier => "D0003",
            ErrorCode::DictMatchfixTriggerMismatch => "D0004",
            ErrorCode::DictMissingPrecedence => "D0005",
            ErrorCode::DictSigilPrecedenceOverride => "D0006",
            ErrorCode::DictNoTriggerOrName => "D0007",
            ErrorCode::DictDuplicateName => "D0008",
            ErrorCode::ParseUnexpectedToken => "P0001",
            ErrorCode::ParseUnbalancedDelimiter => "P0002",
            ErrorCode::ParseInvalidNumber => "P0003",
            ErrorCode::ParseMissingOperand => "P0004",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
