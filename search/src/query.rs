//! Search query types.

/// Normalized search query: trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    char_len: usize,
}

impl SearchQuery {
    /// Returns `None` when the input is empty after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let text = trimmed.to_lowercase();
        let char_len = text.chars().count();
        Some(Self { text, char_len })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn char_len(&self) -> usize {
        self.char_len
    }
}
