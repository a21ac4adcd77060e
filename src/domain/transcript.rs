use std::fmt;

/// Placeholder substituted when transcription yields no content. The persona
/// still responds to silence, so this is a value, not an error.
pub const NO_SPEECH_SENTINEL: &str = "[Silence]";

/// Text derived from the inbound audio, normalized so downstream stages never
/// see an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self(NO_SPEECH_SENTINEL.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn is_silence(&self) -> bool {
        self.0 == NO_SPEECH_SENTINEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
