//! Reserved keyword table.
//!
//! The table is static, immutable data compiled into the lookup `match`; it
//! needs no initialization and is safe to read from any thread.
//!
//! Lookup uses the identifier's length as a first-pass filter (keywords are
//! 2-8 chars), then matches the exact text of that length. Matching is
//! case-sensitive and whole-word only: the scanner hands in the maximal
//! identifier run, so `definition` never resolves to `def`.

use crate::TokenKind;

/// Every reserved keyword with the token kind it resolves to.
///
/// Enumeration only: [`lookup`] does not read this table. The two are kept
/// in agreement by tests in both directions.
pub const KEYWORDS: [(&str, TokenKind); 11] = [
    ("def", TokenKind::Def),
    ("if", TokenKind::If),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("in", TokenKind::In),
    ("return", TokenKind::Return),
    ("pass", TokenKind::Pass),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
];

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            _ => None,
        },
        3 => match text {
            "def" => Some(TokenKind::Def),
            "for" => Some(TokenKind::For),
            _ => None,
        },
        4 => match text {
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            "pass" => Some(TokenKind::Pass),
            _ => None,
        },
        5 => match text {
            "while" => Some(TokenKind::While),
            "break" => Some(TokenKind::Break),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}
