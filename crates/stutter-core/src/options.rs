//! The per-keystroke options snapshot.

/// Feature flags and the comment block width, read fresh from host configuration per keystroke.
///
/// The engine never caches a snapshot across calls; document or workspace scope may change
/// between keystrokes, so the host re-reads its configuration and passes a new value each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StutterOptions {
    /// Enable the `'` / `;` / `.` / `,` delimiter rules.
    pub delimiters: bool,
    /// Enable the `[` / `]` bracket rules.
    pub brackets: bool,
    /// Enable the `-` fence and newline comment-continuation rules.
    pub comments: bool,
    /// Width in characters of generated comment fences.
    ///
    /// Repeat counts derived from this value saturate at zero: a width of 3 or less makes the
    /// three-dash expansion insert nothing, and a width of 0 produces empty fence lines.
    pub block_width: u32,
}

impl StutterOptions {
    /// Everything enabled with the given fence width.
    pub fn enabled(block_width: u32) -> Self {
        Self {
            delimiters: true,
            brackets: true,
            comments: true,
            block_width,
        }
    }
}

impl Default for StutterOptions {
    /// The "missing configuration" degradation: all features off, width 0.
    fn default() -> Self {
        Self {
            delimiters: false,
            brackets: false,
            comments: false,
            block_width: 0,
        }
    }
}
