//! Structured edit operations produced by the matcher.
//!
//! Edits are expressed relative to the triggering keystroke: replacements as character spans
//! counted back from the cursor, insertions as a (line, column) target on the current line or
//! the line below. A single trigger event yields zero, one, or two edits; when it yields two
//! (the dash-fence promotion), the host must apply them as one atomic document mutation -
//! both commit or neither does.

/// Which line an [`StutterEdit::Insert`] targets, relative to the cursor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertLine {
    /// The line the cursor is on.
    Current,
    /// The line immediately below the cursor.
    Below,
}

/// A single text edit, relative to the cursor position at the time of the keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StutterEdit {
    /// Replace the character span `start..end`, counted in characters back from the cursor.
    ///
    /// Invariant: `start <= end <= 0`. The span always covers text already present before the
    /// cursor; a span may reach back across the line break into the previous line (the
    /// empty-comment cleanup on Enter does this, with empty replacement text).
    Replace {
        /// Span start, in characters relative to the cursor (non-positive).
        start: isize,
        /// Span end, in characters relative to the cursor (non-positive, `>= start`).
        end: isize,
        /// Replacement text (may be empty, may contain line breaks).
        text: String,
    },
    /// Insert `text` at `column` of the targeted line.
    Insert {
        /// Which line receives the insertion.
        line: InsertLine,
        /// Character column on that line.
        column: usize,
        /// Inserted text (may contain line breaks).
        text: String,
    },
}

impl StutterEdit {
    /// Replace the `len` characters immediately before the cursor.
    pub fn replace_before(len: usize, text: impl Into<String>) -> Self {
        Self::Replace {
            start: -(len as isize),
            end: 0,
            text: text.into(),
        }
    }

    /// Delete the `len` characters immediately before the cursor.
    pub fn delete_before(len: usize) -> Self {
        Self::replace_before(len, "")
    }

    /// Insert `text` at the cursor. `cursor_column` is the cursor's character column.
    pub fn insert_at_cursor(cursor_column: usize, text: impl Into<String>) -> Self {
        Self::Insert {
            line: InsertLine::Current,
            column: cursor_column,
            text: text.into(),
        }
    }

    /// Insert `text` at the start of the line below the cursor.
    pub fn insert_below(text: impl Into<String>) -> Self {
        Self::Insert {
            line: InsertLine::Below,
            column: 0,
            text: text.into(),
        }
    }

    /// Returns `true` if applying this edit cannot change the document.
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Replace { start, end, text } => start == end && text.is_empty(),
            Self::Insert { text, .. } => text.is_empty(),
        }
    }
}
