//! The on-type formatting provider surface.
//!
//! The host registers the engine for a fixed trigger set scoped to one language, then calls
//! [`provide_on_type_edits`] once per qualifying keystroke with the UTF-16 cursor position and
//! the typed character, and applies the returned `TextEdit[]` atomically. An empty array means
//! "nothing to do"; there is no error outcome.

use serde_json::{Value, json};
use stutter_core::{Position, StutterDocument, StutterOptions, TRIGGER_CHARACTERS};
use stutter_core_lang::LanguageProfile;

use crate::positions::{LspPosition, PositionCodec};
use crate::text_edits::{LspTextEdit, stutter_edits_to_lsp, text_edits_to_value};

/// Compute on-type formatting edits for one keystroke.
///
/// `position` is the host's cursor position immediately after the typed character, in UTF-16
/// code units. Non-trigger characters and out-of-range positions yield an empty list.
pub fn provide_on_type_edits(
    doc: &StutterDocument,
    position: LspPosition,
    ch: char,
    options: StutterOptions,
) -> Vec<LspTextEdit> {
    let line = position.line as usize;
    let Some(line_text) = doc.line_text(line) else {
        return Vec::new();
    };
    let column = PositionCodec::utf16_to_char(&line_text, position.character as usize);
    let cursor = Position::new(line, column);

    let edits = doc.on_type(cursor, ch, options);
    stutter_edits_to_lsp(doc, cursor, &edits)
}

/// Like [`provide_on_type_edits`], returning the `TextEdit[]` JSON array directly.
pub fn provide_on_type_edits_value(
    doc: &StutterDocument,
    position: LspPosition,
    ch: char,
    options: StutterOptions,
) -> Value {
    text_edits_to_value(&provide_on_type_edits(doc, position, ch, options))
}

/// What the host needs to register the engine as an on-type formatting provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnTypeRegistration {
    /// Language identifier the provider is scoped to.
    pub language: String,
    /// Document scheme; `"*"` covers every storage scheme.
    pub scheme: String,
    /// The trigger characters, in registration order.
    pub trigger_characters: Vec<char>,
}

impl OnTypeRegistration {
    /// Registration data for a language profile, using the engine's trigger set.
    pub fn for_profile(profile: &LanguageProfile) -> Self {
        Self {
            language: profile.id.to_string(),
            scheme: "*".to_string(),
            trigger_characters: profile.trigger_characters.to_vec(),
        }
    }

    /// The VHDL registration: every scheme, the full stutter trigger set.
    pub fn vhdl() -> Self {
        Self {
            language: "vhdl".to_string(),
            scheme: "*".to_string(),
            trigger_characters: TRIGGER_CHARACTERS.to_vec(),
        }
    }

    /// The `DocumentSelector`-shaped JSON value.
    pub fn document_selector_value(&self) -> Value {
        json!([{ "language": self.language, "scheme": self.scheme }])
    }

    /// The `DocumentOnTypeFormattingRegistrationOptions`-shaped JSON value.
    ///
    /// Returns `Null` if the trigger set is empty; the protocol requires a first trigger
    /// character.
    pub fn registration_options_value(&self) -> Value {
        let Some((first, more)) = self.trigger_characters.split_first() else {
            return Value::Null;
        };
        json!({
            "firstTriggerCharacter": first.to_string(),
            "moreTriggerCharacter": more.iter().map(char::to_string).collect::<Vec<_>>(),
        })
    }
}
