#![warn(missing_docs)]
//! `stutter-core-lsp` - LSP integration for `stutter-core`.
//!
//! This crate contains the protocol-facing pieces of the stutter engine: UTF-16 coordinate
//! conversion, resolving engine edits into `TextEdit`-shaped JSON, on-type formatting
//! registration metadata, and live parsing of host configuration. It deliberately works with
//! `serde_json::Value` rather than a full `lsp-types` dependency; the subset needed here is
//! small and stable.

pub mod on_type;
pub mod positions;
pub mod settings;
pub mod text_edits;

pub use on_type::{OnTypeRegistration, provide_on_type_edits, provide_on_type_edits_value};
pub use positions::{LspPosition, LspRange, PositionCodec};
pub use settings::{
    KEY_BLOCK_WIDTH, KEY_BRACKETS, KEY_COMMENTS, KEY_DELIMITERS, SETTINGS_SECTION,
    options_from_settings,
};
pub use text_edits::{LspTextEdit, stutter_edits_to_lsp, text_edits_to_value};
