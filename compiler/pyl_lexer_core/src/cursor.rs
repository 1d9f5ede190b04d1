//! Position-tracking cursor over an immutable source text.
//!
//! The cursor reads the source byte-by-byte for classification but always
//! consumes whole UTF-8 characters, so the column counts characters rather
//! than bytes. End of input is reported through a `0x00` sentinel returned by
//! [`Cursor::current()`].
//!
//! # Interior Null Bytes
//!
//! A source may legitimately contain U+0000. [`Cursor::is_eof()`] compares the
//! position against the source length, so an interior null at `pos < len` is
//! an ordinary character while the sentinel at `pos == len` is EOF.

/// Saturating character count, used to advance the column past a run that
/// is known not to contain a newline.
fn char_count(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

/// Cursor over a source text with line/column bookkeeping.
///
/// The cursor is [`Copy`], enabling cheap snapshots for look-ahead: copy it,
/// scan ahead on the copy, and drop the copy without disturbing the original.
///
/// # Invariant
///
/// `pos` always sits on a UTF-8 character boundary of `src` and never exceeds
/// `src.len()`. Only [`advance()`](Self::advance) and the `eat_*` methods move
/// it, and they all step by whole characters.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Current read position (byte index into `src`).
    pos: usize,
    /// 1-based line of `pos`.
    line: u32,
    /// 1-based column of `pos`, in characters.
    column: u32,
}

/// Size assertion: &str = 16 (fat pointer), usize = 8, u32 + u32 = 8 => 32 bytes.
#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src` (line 1, column 1).
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF. Interior null bytes also return `0x00`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.src.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Returns the full character at the current position, `None` at EOF.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.src.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Returns `true` once every character of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Consume one character and return it.
    ///
    /// A `\n` moves to the next line and resets the column to 1; any other
    /// character moves one column right. Returns `None` (and does nothing)
    /// at EOF.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume the current byte only if it equals `expected`.
    ///
    /// Returns whether anything was consumed. `expected` is an ASCII byte, so
    /// a match always corresponds to a whole character.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if !self.is_eof() && self.current() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred`. Predicates are expected to accept
    /// ASCII bytes only; a non-ASCII leading byte should make them return
    /// `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance past horizontal whitespace: space, tab, and carriage return.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r'));
    }

    /// Advance to the next `\n` (not consumed) or to EOF.
    ///
    /// Used by the comment scanner. The skipped run cannot contain a newline,
    /// so only the column moves.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.src[self.pos..];
        let skip = memchr::memchr(b'\n', remaining.as_bytes()).unwrap_or(remaining.len());
        self.column = self.column.saturating_add(char_count(&remaining[..skip]));
        self.pos += skip;
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column, in characters.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Extract a source substring as `&str`.
    ///
    /// Returns `""` when `start..end` is out of range or not on character
    /// boundaries, which cannot happen for offsets taken from [`pos()`](Self::pos).
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.src.get(start..end).unwrap_or("")
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }
}
