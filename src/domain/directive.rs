use std::fmt;

/// The composed natural-language instruction handed to the response
/// generator for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive(String);

impl Directive {
    pub fn new(text: String) -> Self {
        debug_assert!(!text.trim().is_empty(), "directives are never empty");
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
