//! The draft being edited
//!
//! A single text value owned by one session. It is replaced wholesale on every update and is only
//! persisted when the `save` tool writes it out.

/// The current draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored text
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Current text
    pub fn get(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
