use stutter_core::{Position, StutterDocument, StutterOptions};

/// Build a document whose text already contains the just-typed character, run the engine for
/// that keystroke, apply the result, and return the new text.
fn type_char(text: &str, cursor: Position, ch: char, options: StutterOptions) -> String {
    let mut doc = StutterDocument::new(text);
    let edits = doc.on_type(cursor, ch, options);
    doc.apply_edits(cursor, &edits).unwrap();
    doc.get_text()
}

fn enabled() -> StutterOptions {
    StutterOptions::enabled(80)
}

#[test]
fn double_apostrophe_becomes_double_quote() {
    assert_eq!(
        type_char("x''", Position::new(0, 3), '\'', enabled()),
        "x\""
    );
}

#[test]
fn single_apostrophe_is_left_alone() {
    // Attribute ticks like x'event must survive.
    assert_eq!(
        type_char("clk'", Position::new(0, 4), '\'', enabled()),
        "clk'"
    );
}

#[test]
fn colon_space_semicolon_becomes_variable_assignment() {
    assert_eq!(
        type_char("foo: ;", Position::new(0, 6), ';', enabled()),
        "foo:= "
    );
}

#[test]
fn double_semicolon_becomes_spaced_colon() {
    assert_eq!(
        type_char("signal a;;", Position::new(0, 10), ';', enabled()),
        "signal a : "
    );
}

#[test]
fn whitespace_preceded_double_semicolon_keeps_existing_space() {
    assert_eq!(
        type_char("signal a ;;", Position::new(0, 11), ';', enabled()),
        "signal a : "
    );
}

#[test]
fn whitespace_check_matches_anywhere_in_prefix() {
    // The whitespace-preceded test is a containment test over the whole prefix: an earlier
    // " ;;" run selects the compact replacement even though the suffix itself has none.
    assert_eq!(
        type_char("a ;; b;;", Position::new(0, 8), ';', enabled()),
        "a ;; b: "
    );
}

#[test]
fn double_dot_becomes_association_arrow() {
    assert_eq!(
        type_char("others..", Position::new(0, 8), '.', enabled()),
        "others => "
    );
    assert_eq!(
        type_char("others ..", Position::new(0, 9), '.', enabled()),
        "others => "
    );
}

#[test]
fn double_comma_becomes_signal_assignment() {
    assert_eq!(
        type_char("ack,,", Position::new(0, 5), ',', enabled()),
        "ack <= "
    );
    assert_eq!(
        type_char("ack ,,", Position::new(0, 6), ',', enabled()),
        "ack <= "
    );
}

#[test]
fn replacement_only_touches_the_prefix() {
    // Cursor mid-line: text after the cursor is untouched.
    assert_eq!(
        type_char("a;; rest", Position::new(0, 3), ';', enabled()),
        "a :  rest"
    );
}

#[test]
fn comment_lines_suppress_delimiter_rules() {
    for (text, cursor, ch) in [
        ("-- x''", Position::new(0, 6), '\''),
        ("-- a;;", Position::new(0, 6), ';'),
        ("-- a..", Position::new(0, 6), '.'),
        ("-- a,,", Position::new(0, 6), ','),
    ] {
        assert_eq!(type_char(text, cursor, ch, enabled()), text);
    }
}

#[test]
fn comment_anywhere_on_the_line_counts() {
    // The flag is computed from the whole line, even past the cursor.
    assert_eq!(
        type_char("a;; -- note", Position::new(0, 3), ';', enabled()),
        "a;; -- note"
    );
}

#[test]
fn disabled_flag_suppresses_delimiter_rules() {
    let options = StutterOptions {
        delimiters: false,
        ..StutterOptions::enabled(80)
    };
    assert_eq!(type_char("x''", Position::new(0, 3), '\'', options), "x''");
    assert_eq!(
        type_char("foo: ;", Position::new(0, 6), ';', options),
        "foo: ;"
    );
}

#[test]
fn unmatched_prefixes_yield_no_edits() {
    let doc = StutterDocument::new("a;");
    assert!(doc.on_type(Position::new(0, 2), ';', enabled()).is_empty());
    let doc = StutterDocument::new("range 0.");
    assert!(doc.on_type(Position::new(0, 8), '.', enabled()).is_empty());
}

#[test]
fn non_trigger_characters_yield_no_edits() {
    let doc = StutterDocument::new("ab");
    assert!(doc.on_type(Position::new(0, 2), 'b', enabled()).is_empty());
    assert!(doc.on_type(Position::new(0, 2), ':', enabled()).is_empty());
}
