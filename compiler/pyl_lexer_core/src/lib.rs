//! Low-level source cursor for the pyl lexer.
//!
//! This crate has no `pyl_*` dependencies. It owns exactly one concern:
//! walking an immutable source text while keeping the 1-based line and
//! column of the scan position accurate. Every scanner in `pyl_lexer`
//! moves through the input with these primitives only, so each produced
//! token reports a consistent position.

mod cursor;

pub use cursor::Cursor;
