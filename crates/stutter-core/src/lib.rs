#![warn(missing_docs)]
//! Stutter Core - a headless stutter-completion engine for VHDL editors.
//!
//! # Overview
//!
//! As a user types certain trigger characters, the engine inspects a short window of text
//! before the cursor and, when a recognized "stutter" pattern is found (a character typed
//! twice, or a short doubled/tripled run), replaces it with the longer symbolic construct the
//! user was reaching for:
//!
//! - `''` becomes `"`, `;;` becomes ` : `, `: ;` becomes `:= `
//! - `..` becomes ` => `, `,,` becomes ` <= `
//! - `[` / `]` swap to `(` / `)` (and swap back when doubled)
//! - dash runs grow into full-width comment fences, and Enter continues `-- ` comments
//!
//! This is macro expansion over keystroke patterns, not parsing: rules look only at the
//! current line's prefix (plus the previous line for Enter) using fixed patterns.
//!
//! # Architecture
//!
//! The engine is a pure function from a per-keystroke [`TriggerEvent`] to a list of
//! [`StutterEdit`]s; it has no internal state, performs no I/O, and reads its configuration
//! from the [`StutterOptions`] snapshot the host passes in with each event. Hosts that want a
//! ready-made document model can use [`StutterDocument`], which implements the accessor side
//! (line text, comment flag, line ending) over a rope and applies edit groups atomically.
//!
//! ```rust
//! use stutter_core::{Position, StutterDocument, StutterOptions};
//!
//! let mut doc = StutterDocument::new("ack <= a and b;;");
//! let cursor = Position::new(0, 16);
//!
//! let edits = doc.on_type(cursor, ';', StutterOptions::enabled(80));
//! doc.apply_edits(cursor, &edits).unwrap();
//! assert_eq!(doc.get_text(), "ack <= a and b : ");
//! ```
//!
//! # Module Description
//!
//! - [`trigger`] - the fixed trigger-character set
//! - [`options`] - the per-keystroke configuration snapshot
//! - [`edit`] - the edit operations the matcher produces
//! - [`matcher`] - the rule table itself
//! - [`document`] - rope-backed document accessor and atomic edit application
//! - [`line_ending`] - LF/CRLF handling
//!
//! Host wiring (language id, trigger registration data, comment tokens) lives in
//! `stutter-core-lang`; LSP position conversion and `TextEdit` JSON in `stutter-core-lsp`.

pub mod document;
pub mod edit;
pub mod line_ending;
pub mod matcher;
pub mod options;
pub mod trigger;

pub use document::{ApplyEditError, Position, StutterDocument};
pub use edit::{InsertLine, StutterEdit};
pub use line_ending::LineEnding;
pub use matcher::{TriggerEvent, on_type_edits};
pub use options::StutterOptions;
pub use trigger::{TRIGGER_CHARACTERS, Trigger};
