//! Indentation-sensitive lexer for pyl, a Python-like language.
//!
//! [`Lexer`] is pull-based: call [`Lexer::next_token`] until it returns a
//! token of kind [`TokenKind::Eof`]. Layout is turned into explicit
//! INDENT/DEDENT tokens by an indentation stack, and lexical errors never
//! abort the scan; they surface as ERROR tokens plus a sticky error flag.
//!
//! ```
//! use pyl_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("if x:\n    pass\n");
//! let kinds: Vec<TokenKind> = lexer.by_ref().map(|t| t.kind).collect();
//! assert_eq!(&kinds[..3], &[TokenKind::If, TokenKind::Ident, TokenKind::Colon]);
//! assert!(kinds.contains(&TokenKind::Indent));
//! assert!(!lexer.has_error());
//! ```

use std::collections::VecDeque;

use pyl_lexer_core::Cursor;

mod config;
mod indent;
mod keywords;
mod lex_error;
mod scanners;
mod token;

pub use config::LexerConfig;
pub use indent::{measure_indent, DedentPolicy, IndentChange, IndentTracker, DEFAULT_TAB_WIDTH};
pub use keywords::{lookup as lookup_keyword, KEYWORDS};
pub use lex_error::{ErrorState, LexError, LexErrorKind};
pub use token::{Token, TokenKind};

/// Tokenize a whole source text, returning every token through the first
/// END_OF_FILE.
///
/// Errors are embedded as [`TokenKind::Error`] tokens; use a [`Lexer`]
/// directly to read the error state as well.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

/// Pull-based tokenizer for one source text.
///
/// Each instance owns its cursor, indentation stack, and error state; nothing
/// is shared between instances. `next_token` takes `&mut self`, so one
/// instance cannot be driven from two threads at once.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    indent: IndentTracker,
    errors: ErrorState,
    config: LexerConfig,
    /// Structural tokens decided in one call but handed out over later calls
    /// (the second and later DEDENT of a multi-level dedent, and the ERROR
    /// that follows an inconsistent dedent).
    pending: VecDeque<Token<'src>>,
    /// Set after each consumed newline and at the start of input.
    at_line_start: bool,
    /// Set once the iterator has yielded END_OF_FILE.
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer with the default configuration.
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src str, config: LexerConfig) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            indent: IndentTracker::new(),
            errors: ErrorState::new(),
            config,
            pending: VecDeque::new(),
            at_line_start: true,
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] once the input is exhausted, and keeps
    /// returning it on later calls. Never panics; failures are ERROR tokens.
    pub fn next_token(&mut self) -> Token<'src> {
        if let Some(token) = self.pending.pop_front() {
            return token;
        }

        // Skipped comments and unchanged indentation restart the loop
        // instead of recursing, so stack depth stays flat on any input.
        loop {
            if self.at_line_start {
                self.at_line_start = false;
                if let Some(token) = self.line_start() {
                    return token;
                }
            }

            self.cursor.eat_whitespace();
            if self.cursor.is_eof() {
                return self.end_of_input();
            }

            match self.cursor.current() {
                b'\n' => return self.newline(),
                b'#' => {
                    if let Some(token) = self.comment() {
                        return token;
                    }
                }
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.identifier(),
                b'0'..=b'9' => return self.number(),
                b'"' | b'\'' => return self.string(),
                _ => return self.operator(),
            }
        }
    }

    /// Whether any lexical error has occurred so far.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.errors.occurred()
    }

    /// The most recent error message, `""` if none occurred.
    #[inline]
    pub fn error_message(&self) -> &str {
        self.errors.message()
    }

    /// Every error recorded so far, oldest first.
    #[inline]
    pub fn errors(&self) -> &[LexError] {
        self.errors.errors()
    }

    /// The most recent error, `None` if none occurred.
    #[inline]
    pub fn last_error(&self) -> Option<&LexError> {
        self.errors.last()
    }

    #[inline]
    pub fn error_state(&self) -> &ErrorState {
        &self.errors
    }

    #[inline]
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Current indentation levels, base level first.
    #[inline]
    pub fn indent_levels(&self) -> &[u32] {
        self.indent.levels()
    }

    /// Handle the start of a logical line.
    ///
    /// Blank and comment-only lines leave the indentation stack alone; their
    /// leading whitespace is skipped by the regular whitespace pass. Any other
    /// line has its indentation measured and applied. Returns the first
    /// structural token the line produces, if any.
    fn line_start(&mut self) -> Option<Token<'src>> {
        let mut probe = self.cursor;
        probe.eat_whitespace();
        if probe.is_eof() || matches!(probe.current(), b'\n' | b'#') {
            return None;
        }

        let line = self.cursor.line();
        let column = self.cursor.column();
        let start = self.cursor.pos();
        let width = measure_indent(&mut self.cursor, self.config.tab_width);

        match self.indent.transition(width, self.config.dedent_policy) {
            IndentChange::None => None,
            IndentChange::Indent => Some(Token::synthetic(TokenKind::Indent, line, column)),
            IndentChange::Dedent { levels } => {
                self.queue_dedents(levels, line, column);
                self.pending.pop_front()
            }
            IndentChange::Inconsistent { levels } => {
                self.queue_dedents(levels, line, column);
                let error = LexError::inconsistent_indentation(
                    width,
                    self.cursor.line(),
                    self.cursor.column(),
                );
                let lexeme = self.cursor.slice_from(start);
                let token = self.error_token(error, lexeme, line, column);
                self.pending.push_back(token);
                self.pending.pop_front()
            }
        }
    }

    fn queue_dedents(&mut self, levels: usize, line: u32, column: u32) {
        for _ in 0..levels {
            self.pending
                .push_back(Token::synthetic(TokenKind::Dedent, line, column));
        }
    }

    fn end_of_input(&mut self) -> Token<'src> {
        let line = self.cursor.line();
        let column = self.cursor.column();
        if self.config.close_blocks_at_eof {
            let open = self.indent.close_all();
            if open > 0 {
                self.queue_dedents(open, line, column);
                if let Some(token) = self.pending.pop_front() {
                    return token;
                }
            }
        }
        Token::synthetic(TokenKind::Eof, line, column)
    }

    /// Record `error` and build the ERROR token reported for it.
    fn error_token(
        &mut self,
        error: LexError,
        lexeme: &'src str,
        line: u32,
        column: u32,
    ) -> Token<'src> {
        self.errors.record(error);
        Token::new(TokenKind::Error, lexeme, line, column)
    }
}

/// Yields every token through the first END_OF_FILE, then `None`.
impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
