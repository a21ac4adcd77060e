use std::sync::LazyLock;

use regex::Regex;

static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static STAGE_DIRECTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*[^*]*\*").unwrap());
static HEADER_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]*").unwrap());
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());

/// Strips stage directions and markdown so the text reads naturally when
/// spoken. `*sighs*` spans are removed outright, `**bold**` keeps its inner
/// text, headers lose their markers, links collapse to their visible label,
/// and whitespace runs collapse to single spaces. Idempotent.
///
/// Stripping runs until the text stops changing: removing one layer of
/// markup can expose another (a nested link, a link label that starts
/// with `#`), and trimming can move a header marker to the line start.
pub fn sanitize_for_speech(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let stripped = strip_markup(&current);
        if stripped != current {
            current = stripped;
            continue;
        }
        let collapsed = collapse_whitespace(&current);
        if collapsed == current {
            return current;
        }
        current = collapsed;
    }
}

fn strip_markup(text: &str) -> String {
    let unbolded = BOLD_SPAN.replace_all(text, "$1");
    let undirected = STAGE_DIRECTION.replace_all(&unbolded, "");
    let unheadered = HEADER_MARKER.replace_all(&undirected, "");
    MARKDOWN_LINK.replace_all(&unheadered, "$1").into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_was_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }

    out.trim().to_string()
}
