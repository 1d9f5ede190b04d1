//! Character-level scanners.
//!
//! Each scanner starts with the cursor on the first character of its token,
//! consumes through the cursor primitives only, and returns one token. On
//! failure it records the error and returns an ERROR token instead.

use crate::{keywords, LexError, Lexer, Token, TokenKind};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl<'src> Lexer<'src> {
    /// Line, column, and byte offset of the token about to be scanned.
    #[inline]
    fn mark(&self) -> (u32, u32, usize) {
        (self.cursor.line(), self.cursor.column(), self.cursor.pos())
    }

    /// `\n`: attributed to the line it terminates.
    pub(crate) fn newline(&mut self) -> Token<'src> {
        let (line, column, start) = self.mark();
        self.cursor.advance();
        self.at_line_start = true;
        Token::new(TokenKind::Newline, self.cursor.slice_from(start), line, column)
    }

    /// `#` through end of line, newline excluded. Returns a token only when
    /// comments are surfaced.
    pub(crate) fn comment(&mut self) -> Option<Token<'src>> {
        let (line, column, start) = self.mark();
        self.cursor.eat_until_newline_or_eof();
        self.config.emit_comments.then(|| {
            Token::new(TokenKind::Comment, self.cursor.slice_from(start), line, column)
        })
    }

    /// Maximal `[A-Za-z_][A-Za-z0-9_]*` run, resolved against the keyword table.
    pub(crate) fn identifier(&mut self) -> Token<'src> {
        let (line, column, start) = self.mark();
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Ident);
        Token::new(kind, text, line, column)
    }

    /// Maximal run of digits and `.`.
    ///
    /// A second `.` stops the scan on that dot and yields an ERROR token
    /// holding the text collected so far.
    pub(crate) fn number(&mut self) -> Token<'src> {
        let (line, column, start) = self.mark();
        let mut seen_dot = false;
        loop {
            match self.cursor.current() {
                b'0'..=b'9' => {}
                b'.' if !seen_dot => seen_dot = true,
                b'.' => {
                    let error = LexError::invalid_number_format(
                        self.cursor.line(),
                        self.cursor.column(),
                    );
                    let text = self.cursor.slice_from(start);
                    return self.error_token(error, text, line, column);
                }
                _ => break,
            }
            self.cursor.advance();
        }
        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Token::new(kind, self.cursor.slice_from(start), line, column)
    }

    /// Quoted string; the opening quote picks the closing one.
    ///
    /// Content is taken verbatim (a backslash is an ordinary character). A
    /// newline or end of input before the closing quote is an error; the
    /// newline is left for the next call.
    pub(crate) fn string(&mut self) -> Token<'src> {
        let (line, column, _) = self.mark();
        let quote = self.cursor.current();
        self.cursor.advance();
        let start = self.cursor.pos();

        // `quote` is never the 0x00 sentinel, so EOF always enters the loop.
        while self.cursor.current() != quote {
            if self.cursor.is_eof() || self.cursor.current() == b'\n' {
                let error = LexError::unterminated_string(self.cursor.line(), self.cursor.column());
                let text = self.cursor.slice_from(start);
                return self.error_token(error, text, line, column);
            }
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        self.cursor.advance(); // closing quote
        Token::new(TokenKind::String, text, line, column)
    }

    /// Operators, delimiters, and anything unrecognized.
    pub(crate) fn operator(&mut self) -> Token<'src> {
        let (line, column, start) = self.mark();
        let Some(ch) = self.cursor.advance() else {
            return self.end_of_input();
        };

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '=' if self.cursor.eat(b'=') => TokenKind::EqEq,
            '=' => TokenKind::Assign,
            '<' if self.cursor.eat(b'=') => TokenKind::LtEq,
            '<' => TokenKind::Lt,
            '>' if self.cursor.eat(b'=') => TokenKind::GtEq,
            '>' => TokenKind::Gt,
            '!' if self.cursor.eat(b'=') => TokenKind::NotEq,
            '!' => {
                let error = LexError::malformed_negation(self.cursor.line(), self.cursor.column());
                let text = self.cursor.slice_from(start);
                return self.error_token(error, text, line, column);
            }
            _ => {
                // Reported at the character itself, which is already consumed.
                let error = LexError::unexpected_character(ch, line, column);
                let text = self.cursor.slice_from(start);
                return self.error_token(error, text, line, column);
            }
        };
        Token::new(kind, self.cursor.slice_from(start), line, column)
    }
}
