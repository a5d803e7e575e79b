//! Line ending helpers.
//!
//! `stutter-core` stores document text internally using LF (`'\n'`) newlines.
//! When opening a file that uses CRLF (`"\r\n"`), the content is normalized on load, but the
//! preferred line ending is tracked: the dash-fence rule synthesizes line breaks in the style
//! the document already uses.

/// The newline sequence a document prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending from a source text.
    ///
    /// Policy: if the input contains any CRLF (`"\r\n"`), returns [`LineEnding::Crlf`],
    /// otherwise [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// The newline sequence itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    /// Convert an LF-normalized text to this line ending for saving.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_crlf_when_any_present() {
        assert_eq!(LineEnding::detect_in_text("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect_in_text("a\r\nb\nc"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect_in_text(""), LineEnding::Lf);
    }

    #[test]
    fn applies_to_text() {
        assert_eq!(LineEnding::Crlf.apply_to_text("a\nb"), "a\r\nb");
        assert_eq!(LineEnding::Lf.apply_to_text("a\nb"), "a\nb");
    }
}
