//! The single text buffer a conversion rewrites.

/// Whole-file source text, replaced wholesale by each rule.
///
/// Line endings are normalized to `\n` on construction so every rule can
/// assume one newline form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let text = if source.contains("\r\n") {
            source.replace("\r\n", "\n")
        } else {
            source
        };
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Swap in a rule's output. Returns whether the text changed.
    pub fn replace(&mut self, next: String) -> bool {
        if next == self.text {
            return false;
        }
        self.text = next;
        true
    }
}
