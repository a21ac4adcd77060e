use garcon::infrastructure::text_processing::sanitize_for_speech;

#[test]
fn given_mixed_markup_when_sanitizing_then_only_speech_remains() {
    let result = sanitize_for_speech("Pff... *sighs* **Bonjour** [ici](http://x)");
    assert_eq!(result, "Pff... Bonjour ici");
}

#[test]
fn given_stage_direction_when_sanitizing_then_removed_entirely() {
    assert_eq!(
        sanitize_for_speech("Voilà. *wipes table* Votre café."),
        "Voilà. Votre café."
    );
}

#[test]
fn given_bold_span_when_sanitizing_then_inner_text_kept() {
    assert_eq!(sanitize_for_speech("C'est **très** bon"), "C'est très bon");
}

#[test]
fn given_markdown_header_when_sanitizing_then_marker_removed() {
    assert_eq!(sanitize_for_speech("# Le Menu\nUn café"), "Le Menu Un café");
}

#[test]
fn given_markdown_link_when_sanitizing_then_label_kept() {
    assert_eq!(
        sanitize_for_speech("Regardez [la carte](https://example.com/menu)"),
        "Regardez la carte"
    );
}

#[test]
fn given_whitespace_runs_when_sanitizing_then_collapsed_to_single_spaces() {
    assert_eq!(
        sanitize_for_speech("  Un   café \n\n s'il vous plaît  "),
        "Un café s'il vous plaît"
    );
}

#[test]
fn given_empty_input_when_sanitizing_then_empty_output() {
    assert_eq!(sanitize_for_speech(""), "");
    assert_eq!(sanitize_for_speech("   \n\t "), "");
}

#[test]
fn given_plain_text_when_sanitizing_then_unchanged() {
    assert_eq!(sanitize_for_speech("Bonjour. Et alors?"), "Bonjour. Et alors?");
}

#[test]
fn given_unclosed_asterisk_when_sanitizing_then_left_alone() {
    assert_eq!(sanitize_for_speech("2 * 3 équals six"), "2 * 3 équals six");
}

#[test]
fn given_nested_link_when_sanitizing_then_fully_unwrapped() {
    assert_eq!(sanitize_for_speech("[[x](u)](v)"), "x");
    assert_eq!(sanitize_for_speech("Voyez [[la carte](a)](b)"), "Voyez la carte");
}

#[test]
fn given_link_label_that_looks_like_header_when_sanitizing_then_marker_removed() {
    assert_eq!(sanitize_for_speech("[# a](u)"), "a");
}

#[test]
fn given_indented_header_when_sanitizing_then_marker_removed() {
    assert_eq!(sanitize_for_speech("  # Le Menu"), "Le Menu");
}

#[test]
fn given_any_fixture_when_sanitizing_twice_then_idempotent() {
    let fixtures = [
        "Pff... *sighs* **Bonjour** [ici](http://x)",
        "# Header\n*walks away* **Non.**",
        "plain speech, nothing to strip",
        "*a* *b* *c*",
        "**gras** et *aparté* et [lien](url) et # titre",
        "",
        "   \n  ",
        "2 * 3 équals six",
        "***mélange***",
        "[[x](u)](v)",
        "[# a](u)",
        "  # Le Menu",
        "[**gras**](u) et *[lien](v)*",
    ];

    for fixture in fixtures {
        let once = sanitize_for_speech(fixture);
        let twice = sanitize_for_speech(&once);
        assert_eq!(once, twice, "not idempotent for {:?}", fixture);
    }
}
