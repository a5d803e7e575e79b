//! Resolving engine edits into LSP `TextEdit`s.
//!
//! This module intentionally avoids pulling in a full `lsp-types` dependency. It resolves the
//! engine's cursor-relative [`StutterEdit`]s against a document into absolute UTF-16 ranges and
//! produces the `{range, newText}` JSON shape hosts apply. All ranges are expressed against the
//! pre-edit document; the host applies the whole list as one atomic mutation.

use serde_json::{Value, json};
use stutter_core::{InsertLine, Position, StutterDocument, StutterEdit};

use crate::positions::{LspPosition, LspRange, PositionCodec};

/// A minimal representation of an LSP `TextEdit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LspTextEdit {
    /// The range to replace (UTF-16 based line/character positions).
    pub range: LspRange,
    /// Replacement text (may contain newlines; empty for insertions' ranges).
    pub new_text: String,
}

impl LspTextEdit {
    /// Serialize to the `{range, newText}` JSON shape.
    pub fn to_value(&self) -> Value {
        json!({
            "range": {
                "start": { "line": self.range.start.line, "character": self.range.start.character },
                "end": { "line": self.range.end.line, "character": self.range.end.character },
            },
            "newText": self.new_text,
        })
    }
}

/// Serialize a `TextEdit` list to a JSON array.
pub fn text_edits_to_value(edits: &[LspTextEdit]) -> Value {
    Value::Array(edits.iter().map(LspTextEdit::to_value).collect())
}

fn lsp_position_at(doc: &StutterDocument, char_offset: usize) -> LspPosition {
    let position = doc.char_offset_to_position(char_offset);
    let line_text = doc.line_text(position.line).unwrap_or_default();
    PositionCodec::to_lsp(&line_text, position.line, position.column)
}

/// Resolve an engine edit group for a keystroke at `cursor` into absolute UTF-16 `TextEdit`s.
///
/// Replace spans are walked back from the cursor in character offsets (a span may cross into
/// the previous line); inserts targeting the line below the cursor keep that line number even
/// when it is past the end of the document, matching host-side position clamping.
pub fn stutter_edits_to_lsp(
    doc: &StutterDocument,
    cursor: Position,
    edits: &[StutterEdit],
) -> Vec<LspTextEdit> {
    let cursor_char = doc.position_to_char_offset(cursor);

    edits
        .iter()
        .map(|edit| match edit {
            StutterEdit::Replace { start, end, text } => {
                let abs_start = cursor_char.saturating_add_signed(*start);
                let abs_end = cursor_char.saturating_add_signed(*end);
                LspTextEdit {
                    range: LspRange::new(
                        lsp_position_at(doc, abs_start),
                        lsp_position_at(doc, abs_end),
                    ),
                    new_text: text.clone(),
                }
            }
            StutterEdit::Insert { line, column, text } => {
                let position = match line {
                    InsertLine::Current => {
                        let line_text = doc.line_text(cursor.line).unwrap_or_default();
                        PositionCodec::to_lsp(&line_text, cursor.line, *column)
                    }
                    InsertLine::Below => LspPosition::new(cursor.line as u32 + 1, *column as u32),
                };
                LspTextEdit {
                    range: LspRange::new(position, position),
                    new_text: text.clone(),
                }
            }
        })
        .collect()
}
