use stutter_core::{Position, StutterDocument, StutterEdit, StutterOptions};

fn comments_only() -> StutterOptions {
    StutterOptions {
        delimiters: false,
        brackets: false,
        comments: true,
        block_width: 80,
    }
}

fn press_enter(text: &str, cursor: Position) -> String {
    let mut doc = StutterDocument::new(text);
    let edits = doc.on_type(cursor, '\n', comments_only());
    doc.apply_edits(cursor, &edits).unwrap();
    doc.get_text()
}

#[test]
fn enter_below_a_comment_continues_it() {
    assert_eq!(
        press_enter("-- hello\n", Position::new(1, 0)),
        "-- hello\n-- "
    );
}

#[test]
fn continuation_composes_with_host_auto_indent() {
    // The host's auto-indent already reproduced the leading whitespace on the new line; only
    // the comment prefix itself is inserted, after it.
    assert_eq!(
        press_enter("  -- hello\n  ", Position::new(1, 2)),
        "  -- hello\n  -- "
    );
}

#[test]
fn continuation_preserves_prefix_spacing() {
    assert_eq!(
        press_enter("--   wide gap\n", Position::new(1, 0)),
        "--   wide gap\n--   "
    );
}

#[test]
fn enter_below_an_empty_comment_deletes_it() {
    assert_eq!(press_enter("x\n--\n", Position::new(2, 0)), "x\n");
}

#[test]
fn empty_comment_cleanup_swallows_trailing_spaces_and_indent() {
    assert_eq!(press_enter("x\n  --   \n  ", Position::new(2, 2)), "x\n");
}

#[test]
fn empty_comment_cleanup_spans_into_the_previous_line() {
    let doc = StutterDocument::new("x\n  -- \n  ");
    let edits = doc.on_type(Position::new(2, 2), '\n', comments_only());
    // One delete reaching back across the line break: the previous line (5 chars), its
    // newline, and the 2 blank columns already typed.
    assert_eq!(edits, vec![StutterEdit::delete_before(8)]);
}

#[test]
fn dash_fence_lines_are_not_continued() {
    // `--- title` fails the `--` + non-dash shape; nothing happens.
    assert_eq!(
        press_enter("--- title\n", Position::new(1, 0)),
        "--- title\n"
    );
    assert_eq!(press_enter("----\n", Position::new(1, 0)), "----\n");
}

#[test]
fn non_blank_new_line_yields_nothing() {
    assert_eq!(
        press_enter("-- hello\nx", Position::new(1, 1)),
        "-- hello\nx"
    );
}

#[test]
fn plain_previous_lines_yield_nothing() {
    assert_eq!(
        press_enter("signal a;\n", Position::new(1, 0)),
        "signal a;\n"
    );
}

#[test]
fn enter_on_the_first_line_yields_nothing() {
    // No previous line to consult.
    assert_eq!(press_enter("", Position::new(0, 0)), "");
}

#[test]
fn disabled_flag_suppresses_continuation() {
    let mut doc = StutterDocument::new("-- hello\n");
    let options = StutterOptions {
        comments: false,
        ..StutterOptions::enabled(80)
    };
    let edits = doc.on_type(Position::new(1, 0), '\n', options);
    assert!(edits.is_empty());
    doc.apply_edits(Position::new(1, 0), &edits).unwrap();
    assert_eq!(doc.get_text(), "-- hello\n");
}

#[test]
fn continuation_ignores_the_comment_flag_state() {
    // The new line is blank (never "in comment"); the rule depends only on the feature flag
    // and the previous line's shape.
    let options = StutterOptions {
        delimiters: false,
        brackets: false,
        comments: true,
        block_width: 0,
    };
    let mut doc = StutterDocument::new("-- note\n");
    let cursor = Position::new(1, 0);
    let edits = doc.on_type(cursor, '\n', options);
    doc.apply_edits(cursor, &edits).unwrap();
    assert_eq!(doc.get_text(), "-- note\n-- ");
}
