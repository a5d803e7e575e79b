//! A rope-backed document for driving the matcher.
//!
//! Hosts embedding the engine in a real editor usually already have a document model; this one
//! implements the accessor surface the matcher needs (line text, cursor prefix, the in-comment
//! flag, the preferred line ending) and can apply an edit group atomically, which is what the
//! integration tests and headless consumers use.
//!
//! Text is stored LF-normalized; the detected [`LineEnding`] is tracked separately and used
//! when rules synthesize line breaks.

use ropey::Rope;
use stutter_core_lang::LanguageProfile;

use crate::edit::{InsertLine, StutterEdit};
use crate::line_ending::LineEnding;
use crate::matcher::{self, TriggerEvent};
use crate::options::StutterOptions;
use crate::trigger::Trigger;

/// A (line, column) position, both 0-based; columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number (0-based).
    pub line: usize,
    /// Character column within the line (0-based).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Errors from [`StutterDocument::apply_edits`].
#[derive(Debug)]
pub enum ApplyEditError {
    /// A replace span had `start > end` or a positive offset.
    InvalidSpan {
        /// Span start relative to the cursor.
        start: isize,
        /// Span end relative to the cursor.
        end: isize,
    },
    /// A replace span reached back past the start of the document.
    SpanOutOfBounds {
        /// Span start relative to the cursor.
        start: isize,
        /// The cursor's absolute character offset.
        cursor: usize,
    },
}

impl std::fmt::Display for ApplyEditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSpan { start, end } => {
                write!(f, "Invalid replace span {}..{} relative to cursor", start, end)
            }
            Self::SpanOutOfBounds { start, cursor } => {
                write!(
                    f,
                    "Replace span starting {} reaches before document start (cursor at {})",
                    start, cursor
                )
            }
        }
    }
}

impl std::error::Error for ApplyEditError {}

/// An in-memory document plus the language profile used for the comment heuristic.
pub struct StutterDocument {
    rope: Rope,
    line_ending: LineEnding,
    profile: LanguageProfile,
}

impl StutterDocument {
    /// Create a VHDL document from source text.
    pub fn new(text: &str) -> Self {
        Self::with_profile(text, LanguageProfile::vhdl())
    }

    /// Create a document with an explicit language profile.
    pub fn with_profile(text: &str, profile: LanguageProfile) -> Self {
        let line_ending = LineEnding::detect_in_text(text);
        let normalized = text.replace("\r\n", "\n");
        Self {
            rope: Rope::from_str(&normalized),
            line_ending,
            profile,
        }
    }

    /// The document's preferred line ending, detected at load.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// The language profile in effect.
    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Total line count.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Full LF-normalized text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Full text rendered with the document's preferred line ending.
    pub fn get_styled_text(&self) -> String {
        self.line_ending.apply_to_text(&self.rope.to_string())
    }

    /// Text of the given line, without its trailing newline.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// The current line from column 0 through the cursor column (clamped to line length).
    pub fn line_prefix(&self, position: Position) -> String {
        let Some(line) = self.line_text(position.line) else {
            return String::new();
        };
        line.chars().take(position.column).collect()
    }

    /// Whether the line textually contains the profile's comment-start token.
    ///
    /// A same-line substring test, not a parse; see
    /// [`CommentStyle::line_contains_start`](stutter_core_lang::CommentStyle::line_contains_start).
    pub fn in_comment(&self, line: usize) -> bool {
        self.line_text(line)
            .is_some_and(|text| self.profile.comment.line_contains_start(&text))
    }

    /// Convert a position to an absolute character offset, clamping to the document.
    pub fn position_to_char_offset(&self, position: Position) -> usize {
        if position.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let line_start = self.rope.line_to_char(position.line);
        let line_len = if position.line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(position.line + 1) - line_start - 1
        } else {
            self.rope.len_chars() - line_start
        };
        line_start + position.column.min(line_len)
    }

    /// Convert an absolute character offset back to a position.
    pub fn char_offset_to_position(&self, char_offset: usize) -> Position {
        let char_offset = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_offset);
        let column = char_offset - self.rope.line_to_char(line);
        Position::new(line, column)
    }

    /// Compute the stutter edits for a keystroke at `position`.
    ///
    /// Non-trigger characters and positions outside the document yield an empty list.
    pub fn on_type(
        &self,
        position: Position,
        ch: char,
        options: StutterOptions,
    ) -> Vec<StutterEdit> {
        let Some(trigger) = Trigger::from_char(ch) else {
            return Vec::new();
        };
        let Some(line_text) = self.line_text(position.line) else {
            return Vec::new();
        };

        let line_prefix = self.line_prefix(position);
        let prev_line = if position.line > 0 {
            self.line_text(position.line - 1).unwrap_or_default()
        } else {
            String::new()
        };
        let in_comment = self.profile.comment.line_contains_start(&line_text);

        let event = TriggerEvent {
            trigger,
            line_prefix: &line_prefix,
            prev_line: &prev_line,
            in_comment,
            line_ending: self.line_ending,
            options,
        };
        matcher::on_type_edits(&event)
    }

    /// Apply an edit group produced for a keystroke at `cursor`, atomically.
    ///
    /// Every edit is resolved against the pre-edit document first; if any resolution fails,
    /// nothing is applied. Resolved edits are then applied in descending start order so earlier
    /// edits don't shift the later ones.
    pub fn apply_edits(
        &mut self,
        cursor: Position,
        edits: &[StutterEdit],
    ) -> Result<(), ApplyEditError> {
        let cursor_char = self.position_to_char_offset(cursor);

        let mut resolved = Vec::with_capacity(edits.len());
        for edit in edits {
            resolved.push(self.resolve(cursor, cursor_char, edit)?);
        }
        resolved.sort_by_key(|(start, _, _)| std::cmp::Reverse(*start));

        for (start, end, text) in resolved {
            if start < end {
                self.rope.remove(start..end);
            }
            if !text.is_empty() {
                self.rope.insert(start, &text);
            }
        }
        Ok(())
    }

    /// Resolve one edit to `(start, end, text)` in absolute character offsets.
    fn resolve(
        &self,
        cursor: Position,
        cursor_char: usize,
        edit: &StutterEdit,
    ) -> Result<(usize, usize, String), ApplyEditError> {
        match edit {
            StutterEdit::Replace { start, end, text } => {
                if start > end || *end > 0 {
                    return Err(ApplyEditError::InvalidSpan {
                        start: *start,
                        end: *end,
                    });
                }
                let abs_start = cursor_char as isize + start;
                if abs_start < 0 {
                    return Err(ApplyEditError::SpanOutOfBounds {
                        start: *start,
                        cursor: cursor_char,
                    });
                }
                let abs_end = (cursor_char as isize + end) as usize;
                Ok((abs_start as usize, abs_end, text.replace("\r\n", "\n")))
            }
            StutterEdit::Insert { line, column, text } => {
                let target_line = match line {
                    InsertLine::Current => cursor.line,
                    InsertLine::Below => cursor.line + 1,
                };
                let offset = self.position_to_char_offset(Position::new(target_line, *column));
                Ok((offset, offset, text.replace("\r\n", "\n")))
            }
        }
    }
}
