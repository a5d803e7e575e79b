//! The stutter pattern matcher.
//!
//! One rule table per trigger character, evaluated in priority order; the first matching rule
//! wins and at most one rule fires per keystroke. Rules inspect only the current line's prefix
//! (text from column 0 through the just-typed character) and, for Enter, the previous line.
//!
//! Gating: the `'` `;` `.` `,` `[` `]` rules are suppressed inside comment lines and behind
//! their feature flags. The `-` and Enter rules check only their feature flag - a dash fence
//! line contains `--` itself, so the comment flag cannot apply to it.

use std::sync::LazyLock;

use regex::Regex;

use crate::edit::StutterEdit;
use crate::line_ending::LineEnding;
use crate::options::StutterOptions;
use crate::trigger::Trigger;

/// Everything the matcher needs to know about one keystroke.
///
/// Constructed fresh per keystroke and discarded with its edits; the matcher holds no state
/// between calls and is a pure function of this value.
#[derive(Debug, Clone, Copy)]
pub struct TriggerEvent<'a> {
    /// The classified keystroke.
    pub trigger: Trigger,
    /// Current line from column 0 through the cursor, inclusive of the typed character.
    pub line_prefix: &'a str,
    /// Full text of the line above the cursor; empty on the first line.
    ///
    /// Only the Enter rules read this.
    pub prev_line: &'a str,
    /// Whether the current line contains a comment start anywhere (a textual test, supplied by
    /// the host's document accessor).
    pub in_comment: bool,
    /// The document's preferred newline sequence.
    pub line_ending: LineEnding,
    /// The host configuration snapshot for this keystroke.
    pub options: StutterOptions,
}

fn pattern(src: &str) -> Regex {
    // The pattern set is fixed and small; compilation cannot fail at runtime.
    Regex::new(src).expect("fixed pattern")
}

static SPACED_SEMICOLONS: LazyLock<Regex> = LazyLock::new(|| pattern(r"\s;;"));
static SPACED_DOTS: LazyLock<Regex> = LazyLock::new(|| pattern(r"\s\.\."));
static SPACED_COMMAS: LazyLock<Regex> = LazyLock::new(|| pattern(r"\s,,"));
static DASH_FENCE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*----+$"));
static DASH_TRIPLE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*---$"));
static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*$"));
static COMMENT_WITH_TEXT: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*(--[^-]\s*)\S+.*$"));
static EMPTY_COMMENT: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*--\s*$"));

/// Compute the edits for one keystroke.
///
/// Returns an empty list whenever no rule matches, the relevant feature flag is off, or (for
/// the delimiter and bracket triggers) the line is a comment line. An empty list is the
/// designed no-op outcome, not a failure.
pub fn on_type_edits(event: &TriggerEvent<'_>) -> Vec<StutterEdit> {
    match event.trigger {
        Trigger::Apostrophe => apostrophe_edits(event),
        Trigger::Semicolon => semicolon_edits(event),
        Trigger::Dot => dot_edits(event),
        Trigger::Comma => comma_edits(event),
        Trigger::OpenBracket => open_bracket_edits(event),
        Trigger::CloseBracket => close_bracket_edits(event),
        Trigger::Dash => dash_edits(event),
        Trigger::Newline => newline_edits(event),
    }
}

fn delimiters_suppressed(event: &TriggerEvent<'_>) -> bool {
    !event.options.delimiters || event.in_comment
}

/// `''` becomes `"` - the VHDL string delimiter.
fn apostrophe_edits(event: &TriggerEvent<'_>) -> Vec<StutterEdit> {
    if delimiters_suppressed(event) {
        return Vec::new();
    }
    if event.line_prefix.ends_with("''") {
        return vec![StutterEdit::replace_before(2, "\"")];
    }
    Vec::new()
}

/// `: ;` becomes `:= `, and `;;` becomes ` : ` (or `: ` when whitespace already precedes it).
fn semicolon_edits(event: &TriggerEvent<'_>) -> Vec<StutterEdit> {
    if delimiters_suppressed(event) {
        return Vec::new();
    }
    if event.line_prefix.ends_with(": ;") {
        vec![StutterEdit::replace_before(2, "= ")]
    } else if SPACED_SEMICOLONS.is_match(event.line_prefix) {
        vec![StutterEdit::replace_before(2, ": ")]
    } else if event.line_prefix.ends_with(";;") {
        vec![StutterEdit::replace_before(2, " : ")]
    } else {
        Vec::new()
    }
}

/// `..` becomes ` => ` (or `=> ` when whitespace already precedes it).
fn dot_edits(event: &TriggerEvent<'_>) -> Vec<StutterEdit> {
    if delimiters_suppressed(event) {
        return Vec::new();
    }
    if SPACED_DOTS.is_match(event.line_prefix) {
        vec![StutterEdit::replace_before(2, "=> ")]
    } else if event.line_prefix.ends_with("..") {
        vec![StutterEdit::replace_before(2, " => ")]
    } else {
        Vec::new()
    }
}

/// `,,` becomes ` <= ` (or `<= ` when whitespace already precedes it).
fn comma_edits(event: &TriggerEvent<'_>) -> Vec<StutterEdit> {
    if delimiters_suppressed(event) {
        return Vec::new();
    }
    if SPACED_COMMAS.is_match(event.line_prefix) {
        vec![StutterEdit::replace_before(2, "<= ")]
    } else if event.line_prefix.ends_with(",,") {
        vec![StutterEdit::replace_before(2, " <= ")]
    } else {
        Vec::new()
    }
}

/// `[` becomes `(`; typing `[` again right after swaps back to a literal `[`.
fn open_bracket_edits(event: &TriggerEvent<'_>) -> Vec<StutterEdit> {
    if !event.options.brackets || event.in_comment {
        return Vec::new();
    }
    if event.line_prefix.ends_with("([") {
        vec![StutterEdit::replace_before(2, "[")]
    } else if event.line_prefix.ends_with("[") {
        vec![StutterEdit::replace_before(1, "(")]
    } else {
        Vec::new()
    }
}

/// `]` becomes `)`; typing `]` again right after swaps back to a literal `]`.
fn close_bracket_edits(event: &TriggerEvent<'_>) -> Vec<StutterEdit> {
    if !event.options.brackets || event.in_comment {
        return Vec::new();
    }
    if event.line_prefix.ends_with(")]") {
        vec![StutterEdit::replace_before(2, "]")]
    } else if event.line_prefix.ends_with("]") {
        vec![StutterEdit::replace_before(1, ")")]
    } else {
        Vec::new()
    }
}

/// Dash fences.
///
/// A line of 4+ dashes receiving one more dash is promoted into a comment block: the typed
/// dash becomes a line break plus a fresh `-- ` opener, and a closing fence of
/// `block_width` dashes is inserted on the line below. Both edits form one atomic group.
///
/// A line of exactly 3 dashes is padded out to `block_width` dashes in place.
fn dash_edits(event: &TriggerEvent<'_>) -> Vec<StutterEdit> {
    if !event.options.comments {
        return Vec::new();
    }
    let prefix = event.line_prefix;
    let width = event.options.block_width as usize;

    if DASH_FENCE.is_match(prefix) {
        let indent = leading_whitespace(prefix);
        let eol = event.line_ending.as_str();
        let opener = format!("{eol}{indent}-- ");
        let fence = format!("{indent}{}{eol}", "-".repeat(width));
        return vec![
            StutterEdit::replace_before(1, opener),
            StutterEdit::insert_below(fence),
        ];
    }

    if DASH_TRIPLE.is_match(prefix) {
        let fill = width.saturating_sub(3);
        if fill == 0 {
            return Vec::new();
        }
        return vec![StutterEdit::insert_at_cursor(
            prefix.chars().count(),
            "-".repeat(fill),
        )];
    }

    Vec::new()
}

/// Comment continuation on Enter.
///
/// When Enter leaves the cursor on a blank line below a comment that has text, the comment
/// prefix (`-- ` and its trailing spacing, without the indent - the host's auto-indent already
/// reproduced that) is inserted at the cursor. Below an *empty* comment, the dangling comment
/// line is deleted instead of propagated.
fn newline_edits(event: &TriggerEvent<'_>) -> Vec<StutterEdit> {
    if !event.options.comments {
        return Vec::new();
    }
    if !BLANK_LINE.is_match(event.line_prefix) {
        return Vec::new();
    }

    if let Some(caps) = COMMENT_WITH_TEXT.captures(event.prev_line) {
        let cursor_column = event.line_prefix.chars().count();
        return vec![StutterEdit::insert_at_cursor(
            cursor_column,
            caps[1].to_string(),
        )];
    }

    if EMPTY_COMMENT.is_match(event.prev_line) {
        // Span from column 0 of the previous line through the cursor: the whole comment line,
        // its line break, and the blank prefix already typed on the new line.
        let span = event.prev_line.chars().count() + 1 + event.line_prefix.chars().count();
        return vec![StutterEdit::delete_before(span)];
    }

    Vec::new()
}

fn leading_whitespace(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(text.len());
    &text[..end]
}
