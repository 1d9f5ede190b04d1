//! Lexer configuration.

use crate::indent::{DedentPolicy, DEFAULT_TAB_WIDTH};

/// Knobs for the implementer-defined parts of the lexer's behavior.
///
/// The default reproduces the plain token stream: comments skipped, tabs
/// four columns wide, multi-level dedents collapsed, and END_OF_FILE
/// returned without closing open blocks.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LexerConfig {
    /// How a line indented less than the current block is handled.
    pub dedent_policy: DedentPolicy,
    /// Surface `#` comments as [`TokenKind::Comment`](crate::TokenKind::Comment)
    /// tokens instead of skipping them.
    pub emit_comments: bool,
    /// Indentation width of one tab character.
    pub tab_width: u32,
    /// Emit one DEDENT per open block before the first END_OF_FILE.
    pub close_blocks_at_eof: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            dedent_policy: DedentPolicy::default(),
            emit_comments: false,
            tab_width: DEFAULT_TAB_WIDTH,
            close_blocks_at_eof: false,
        }
    }
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dedent_policy(mut self, policy: DedentPolicy) -> Self {
        self.dedent_policy = policy;
        self
    }

    pub fn with_comments(mut self, emit: bool) -> Self {
        self.emit_comments = emit;
        self
    }

    pub fn with_tab_width(mut self, width: u32) -> Self {
        self.tab_width = width;
        self
    }

    pub fn with_close_blocks_at_eof(mut self, close: bool) -> Self {
        self.close_blocks_at_eof = close;
        self
    }
}
