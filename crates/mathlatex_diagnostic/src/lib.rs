//! Diagnostic reporting for the MathLaTeX parsing front-end.
//!
//! Two producers feed this crate: dictionary indexing (§4.2), which reports
//! validation warnings through an `onError` callback without aborting
//! indexing, and the parser (§7), which recovers every structural error
//! in-band as a MathJSON `Error` expression and never raises.

mod diagnostic;
mod error_code;
pub mod terminal;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
