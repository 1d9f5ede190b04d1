//! Token types produced by the lexer.

use std::fmt;

/// Closed set of token kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // === Keywords ===
    Def,
    If,
    Elif,
    Else,
    While,
    For,
    In,
    Return,
    Pass,
    Break,
    Continue,

    // === Operators ===
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Assign,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,

    // === Delimiters ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    Dot,

    // === Literals ===
    Ident,
    Int,
    Float,
    String,

    // === Structural ===
    Indent,
    Dedent,
    Newline,
    /// Only produced when comment surfacing is enabled in `LexerConfig`.
    Comment,
    Eof,
    Error,
}

impl TokenKind {
    /// Upper-case name used in token dumps (`IDENTIFIER`, `EQUALS`, ...).
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Def => "DEF",
            TokenKind::If => "IF",
            TokenKind::Elif => "ELIF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::In => "IN",
            TokenKind::Return => "RETURN",
            TokenKind::Pass => "PASS",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::EqEq => "EQUALS",
            TokenKind::NotEq => "NOT_EQUALS",
            TokenKind::Lt => "LESS_THAN",
            TokenKind::LtEq => "LESS_EQUAL",
            TokenKind::Gt => "GREATER_THAN",
            TokenKind::GtEq => "GREATER_EQUAL",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::Int => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Eof => "END_OF_FILE",
            TokenKind::Error => "ERROR",
        }
    }

    /// Source text of operators and delimiters, `None` for every other kind.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Assign => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            _ => return None,
        };
        Some(text)
    }

    /// Returns `true` for the reserved words of the keyword table.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Def
                | TokenKind::If
                | TokenKind::Elif
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::In
                | TokenKind::Return
                | TokenKind::Pass
                | TokenKind::Break
                | TokenKind::Continue
        )
    }

    /// Returns `true` for tokens synthesized from layout rather than spelled
    /// out in the source.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::Indent | TokenKind::Dedent | TokenKind::Newline | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source text and 1-based position.
///
/// Tokens are immutable values. The lexeme borrows from the source, so a
/// token never outlives the text it was scanned from.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Source text of the token. String tokens hold the text between the
    /// quotes; INDENT, DEDENT and EOF hold `""`.
    pub lexeme: &'src str,
    pub line: u32,
    pub column: u32,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'src str, line: u32, column: u32) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }

    /// Create a token that has no source text of its own.
    #[inline]
    pub fn synthetic(kind: TokenKind, line: u32, column: u32) -> Self {
        Token::new(kind, "", line, column)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) @ {}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.line,
            self.column,
            self.kind.display_name(),
            self.lexeme
        )
    }
}

#[cfg(test)]
mod tests;
