//! The fixed set of keystrokes the engine reacts to.

/// Characters the host should register for on-type handling, in registration order.
pub const TRIGGER_CHARACTERS: &[char] = &[';', '.', '\'', ',', '[', ']', '-', '\n'];

/// A keystroke the engine has a rule table for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// `;` - assignment / declaration delimiters.
    Semicolon,
    /// `.` - the `=>` association arrow.
    Dot,
    /// `'` - double-quote promotion.
    Apostrophe,
    /// `,` - the `<=` signal assignment.
    Comma,
    /// `[` - square-to-round bracket swap.
    OpenBracket,
    /// `]` - square-to-round bracket swap.
    CloseBracket,
    /// `-` - comment fences.
    Dash,
    /// Enter - comment continuation.
    Newline,
}

impl Trigger {
    /// Classify a typed character, or `None` if the engine has no rules for it.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ';' => Some(Self::Semicolon),
            '.' => Some(Self::Dot),
            '\'' => Some(Self::Apostrophe),
            ',' => Some(Self::Comma),
            '[' => Some(Self::OpenBracket),
            ']' => Some(Self::CloseBracket),
            '-' => Some(Self::Dash),
            '\n' => Some(Self::Newline),
            _ => None,
        }
    }

    /// The character this trigger corresponds to.
    pub fn as_char(self) -> char {
        match self {
            Self::Semicolon => ';',
            Self::Dot => '.',
            Self::Apostrophe => '\'',
            Self::Comma => ',',
            Self::OpenBracket => '[',
            Self::CloseBracket => ']',
            Self::Dash => '-',
            Self::Newline => '\n',
        }
    }
}
