#![warn(missing_docs)]
//! `stutter-core-lang` - language profile helpers for `stutter-core`.
//!
//! This crate intentionally stays lightweight and does **not** depend on `lsp-types` or any
//! parsing/highlighting systems. It provides small data structs that hosts can use to wire the
//! stutter engine to one structured language: which comment tokens it uses and which typed
//! characters should reach the engine at all.

/// Comment tokens for a language.
///
/// The stutter engine only consults the line-comment token, through
/// [`CommentStyle::line_contains_start`]; block tokens are carried for hosts that want them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentStyle {
    /// Line comment token (e.g. `--`, `//`).
    pub line: Option<String>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentStyle {
    /// Create a style that supports only line comments.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            block_start: None,
            block_end: None,
        }
    }

    /// Create a style that supports both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// Returns `true` if a line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if `text` contains the line-comment token anywhere.
    ///
    /// This is a single-line textual test, not a parse: a token inside a string literal still
    /// counts. It matches what editors commonly do for cheap per-keystroke checks.
    pub fn line_contains_start(&self, text: &str) -> bool {
        self.line
            .as_deref()
            .is_some_and(|token| !token.is_empty() && text.contains(token))
    }
}

/// A language the stutter engine can be scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Host language identifier (e.g. `"vhdl"`).
    pub id: &'static str,
    /// Comment tokens for the language.
    pub comment: CommentStyle,
    /// Characters whose keystrokes the host should forward to the engine.
    pub trigger_characters: &'static [char],
}

/// Trigger characters for VHDL stutter completions, in registration order.
pub const VHDL_TRIGGER_CHARACTERS: &[char] = &[';', '.', '\'', ',', '[', ']', '-', '\n'];

impl LanguageProfile {
    /// The VHDL profile: `--` line comments, VHDL-2008 `/* */` block comments, and the
    /// stutter trigger set.
    pub fn vhdl() -> Self {
        Self {
            id: "vhdl",
            comment: CommentStyle::line_and_block("--", "/*", "*/"),
            trigger_characters: VHDL_TRIGGER_CHARACTERS,
        }
    }

    /// Returns `true` if `ch` is in this profile's trigger set.
    pub fn is_trigger(&self, ch: char) -> bool {
        self.trigger_characters.contains(&ch)
    }
}
