//! Indentation stack and the INDENT/DEDENT decision.
//!
//! The stack holds the widths of the currently open blocks. The bottom entry
//! is always `0` and entries strictly increase towards the top. The lexer
//! measures each logical line's leading whitespace once and hands the width
//! to [`IndentTracker::transition`], which mutates the stack and reports what
//! structural tokens the line opens or closes.

use pyl_lexer_core::Cursor;

/// Default width contributed by one tab character.
pub const DEFAULT_TAB_WIDTH: u32 = 4;

/// How a line indented less than the current block is handled.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DedentPolicy {
    /// Pop every level deeper than the new width, one DEDENT per level. A
    /// width that lands between two open levels is an inconsistent dedent.
    #[default]
    Collapse,
    /// Pop exactly one level per line, whatever the new width. Closing two
    /// blocks at once leaves the outer one open until a later line.
    SinglePop,
}

/// Outcome of feeding one line's width to the tracker.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IndentChange {
    /// Same width as the current block.
    None,
    /// A new, deeper block was opened.
    Indent,
    /// `levels` blocks were closed and the width matches an open level.
    Dedent { levels: usize },
    /// `levels` blocks were closed but the width matches no open level. The
    /// line is treated as belonging to the enclosing level that remains on
    /// top; no level is opened for it.
    Inconsistent { levels: usize },
}

/// Consume the leading run of spaces and tabs and return its width.
///
/// Each space counts 1 and each tab counts `tab_width`. Mixed runs are
/// accepted and summed without any consistency check.
pub fn measure_indent(cursor: &mut Cursor<'_>, tab_width: u32) -> u32 {
    let mut width: u32 = 0;
    loop {
        match cursor.current() {
            b' ' => width = width.saturating_add(1),
            b'\t' => width = width.saturating_add(tab_width),
            _ => break,
        }
        cursor.advance();
    }
    width
}

/// Owner of the indentation stack for one tokenization session.
#[derive(Clone, Debug)]
pub struct IndentTracker {
    stack: Vec<u32>,
}

impl Default for IndentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentTracker {
    pub fn new() -> Self {
        IndentTracker { stack: vec![0] }
    }

    /// Width of the innermost open block.
    #[inline]
    pub fn current(&self) -> u32 {
        self.stack.last().copied().unwrap_or(0)
    }

    /// Number of open blocks above the base level.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// The open levels, base first.
    pub fn levels(&self) -> &[u32] {
        &self.stack
    }

    /// Apply one line's measured width.
    pub fn transition(&mut self, width: u32, policy: DedentPolicy) -> IndentChange {
        let top = self.current();
        let change = if width > top {
            self.stack.push(width);
            IndentChange::Indent
        } else if width == top {
            IndentChange::None
        } else {
            match policy {
                DedentPolicy::SinglePop => {
                    self.stack.pop();
                    IndentChange::Dedent { levels: 1 }
                }
                DedentPolicy::Collapse => self.collapse_to(width),
            }
        };
        tracing::trace!(width, top, depth = self.depth(), ?change, "indent transition");
        change
    }

    /// Pop every level deeper than `width`.
    ///
    /// The base level is `0` and `width >= 0`, so the loop never pops it.
    /// Every level on the stack was opened by an INDENT, so a width that
    /// lands between two levels is never pushed.
    fn collapse_to(&mut self, width: u32) -> IndentChange {
        let mut levels = 0;
        while self.current() > width {
            self.stack.pop();
            levels += 1;
        }
        if self.current() == width {
            IndentChange::Dedent { levels }
        } else {
            IndentChange::Inconsistent { levels }
        }
    }

    /// Close every open block, returning how many were open.
    pub fn close_all(&mut self) -> usize {
        let open = self.depth();
        self.stack.truncate(1);
        open
    }
}
