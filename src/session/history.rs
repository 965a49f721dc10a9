//! Append-only conversation log

use crate::llm::{Message, ToolResult};

/// Ordered record of everything exchanged in one session.
///
/// Entries can only be appended; nothing hands out mutable access to stored messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    messages: Vec<Message>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.messages.extend(messages);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent tool result anywhere in the history
    pub fn last_tool_result(&self) -> Option<&ToolResult> {
        self.messages.iter().rev().find_map(Message::as_tool_result)
    }

    /// Tool results among the last `window` entries, oldest first
    pub fn recent_tool_results(&self, window: usize) -> Vec<&ToolResult> {
        let start = self.messages.len().saturating_sub(window);
        self.messages[start..].iter().filter_map(Message::as_tool_result).collect()
    }
}
