//! Low-level tokenizer for LaTeX source.
//!
//! This crate provides a standalone, dependency-free tokenizer. It is
//! designed to be reusable by external tools (syntax highlighters, linters)
//! without pulling in the indexed dictionary or parser.
//!
//! # Architecture
//!
//! `mathlatex_lexer_core` is the "raw" half of a two-layer lexer
//! architecture (modeled after `rustc_lexer`'s split from `rustc_parse`'s
//! lexer, the same split `ori_lexer_core`/`ori_lexer` uses):
//!
//! - **`mathlatex_lexer_core`** (this crate): produces `(RawTag, len)` pairs
//!   from raw bytes. No spans, no interning, no diagnostics.
//! - **`mathlatex_lexer`**: "cooks" raw tokens into `mathlatex_ir::Token`s
//!   with spans, interning, and visual-space classification.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
