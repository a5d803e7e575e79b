//! Live configuration parsing.
//!
//! The host re-reads its configuration on every qualifying keystroke (settings are
//! live-reloadable and may differ per document scope) and passes the parsed snapshot into the
//! engine. Missing or mistyped values degrade to safe defaults - features off, width 0 - and
//! never raise.

use serde_json::Value;
use stutter_core::StutterOptions;

/// The configuration section the stutter settings live under (e.g. `"vhdl"` in host settings).
pub const SETTINGS_SECTION: &str = "vhdl";

/// Setting key for the delimiter rules.
pub const KEY_DELIMITERS: &str = "enableStutterDelimiters";
/// Setting key for the bracket rules.
pub const KEY_BRACKETS: &str = "enableStutterBrackets";
/// Setting key for the comment rules.
pub const KEY_COMMENTS: &str = "enableStutterComments";
/// Setting key for the comment fence width.
pub const KEY_BLOCK_WIDTH: &str = "stutterCompletionsBlockWidth";

fn bool_setting(settings: &Value, key: &str) -> bool {
    settings.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn width_setting(settings: &Value, key: &str) -> u32 {
    settings
        .get(key)
        .and_then(Value::as_u64)
        .map(|w| w.min(u64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

/// Parse a settings object (the contents of the [`SETTINGS_SECTION`] section) into an options
/// snapshot.
///
/// Anything missing, mistyped, negative, or fractional comes out as the feature being off or
/// the width being 0.
pub fn options_from_settings(settings: &Value) -> StutterOptions {
    StutterOptions {
        delimiters: bool_setting(settings, KEY_DELIMITERS),
        brackets: bool_setting(settings, KEY_BRACKETS),
        comments: bool_setting(settings, KEY_COMMENTS),
        block_width: width_setting(settings, KEY_BLOCK_WIDTH),
    }
}
