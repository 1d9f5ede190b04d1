//! Lexical error types and the sticky error state.
//!
//! Errors never abort tokenization. A failing scanner records a [`LexError`]
//! in the lexer's [`ErrorState`] and returns an ERROR token; the caller
//! decides whether to keep pulling tokens.
//!
//! The rendered message format is fixed: `Line <L>, Column <C>: <description>`.

/// What kind of lexical error occurred.
///
/// The `Display` text is the description part of the rendered message.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A quote was opened and no matching quote followed before a newline
    /// or the end of input.
    #[error("Unterminated string literal")]
    UnterminatedString,
    /// A numeric literal contains more than one `.`.
    #[error("Invalid number format: multiple decimal points")]
    InvalidNumberFormat,
    /// A character that matches no scanning rule.
    #[error("Unexpected character: {ch}")]
    UnexpectedCharacter { ch: char },
    /// `!` not immediately followed by `=`.
    #[error("Expected '=' after '!'")]
    MalformedNegation,
    /// A dedent whose width matches no open indentation level.
    #[error("Unindent does not match any outer indentation level")]
    InconsistentIndentation { width: u32 },
}

/// A lexical error with the position at which it was detected.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("Line {line}, Column {column}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, column: u32) -> Self {
        LexError { kind, line, column }
    }

    #[cold]
    pub fn unterminated_string(line: u32, column: u32) -> Self {
        Self::new(LexErrorKind::UnterminatedString, line, column)
    }

    #[cold]
    pub fn invalid_number_format(line: u32, column: u32) -> Self {
        Self::new(LexErrorKind::InvalidNumberFormat, line, column)
    }

    #[cold]
    pub fn unexpected_character(ch: char, line: u32, column: u32) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter { ch }, line, column)
    }

    #[cold]
    pub fn malformed_negation(line: u32, column: u32) -> Self {
        Self::new(LexErrorKind::MalformedNegation, line, column)
    }

    #[cold]
    pub fn inconsistent_indentation(width: u32, line: u32, column: u32) -> Self {
        Self::new(
            LexErrorKind::InconsistentIndentation { width },
            line,
            column,
        )
    }
}

/// Sticky error flag plus the most recent message.
///
/// `occurred` never resets once set. `message` is overwritten by every new
/// error (last error wins). The full history is kept as well, for callers
/// that want every diagnostic rather than checking after each token.
#[derive(Clone, Debug, Default)]
pub struct ErrorState {
    occurred: bool,
    message: String,
    errors: Vec<LexError>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error: set the sticky flag, overwrite the message, and
    /// append to the history.
    pub fn record(&mut self, error: LexError) {
        tracing::debug!(%error, "lexical error");
        self.occurred = true;
        self.message = error.to_string();
        self.errors.push(error);
    }

    /// Whether any error has been recorded.
    #[inline]
    pub fn occurred(&self) -> bool {
        self.occurred
    }

    /// The most recent rendered message, `""` before the first error.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every recorded error, oldest first.
    #[inline]
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    #[inline]
    pub fn last(&self) -> Option<&LexError> {
        self.errors.last()
    }
}
