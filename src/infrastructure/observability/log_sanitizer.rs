const MAX_VISIBLE_LENGTH: usize = 100;

/// Truncates user speech for log lines. Transcripts are end-user utterances;
/// logs keep only a bounded prefix.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    if trimmed.chars().count() > MAX_VISIBLE_LENGTH {
        let prefix: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", prefix, trimmed.chars().count())
    } else {
        trimmed.to_string()
    }
}
