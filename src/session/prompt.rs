//! Fixed prompt text for the drafting assistant

/// Human message used for the very first turn, before anything has been typed
pub const OPENING_MESSAGE: &str =
    "I'm ready to help you update a document. What would you like to create or change?";

/// Shown every time the human is asked for input
pub const INPUT_PROMPT: &str =
    "What would you like to do with the document? (e.g., Update: <content> | Save: <filename>)";

/// Build the system instruction with a snapshot of the current draft embedded
pub fn system_prompt(document: &str) -> String {
    format!(
        "You are Drafter, a helpful writing assistant. You help the user update and modify documents.\n\n\
         - If the user wants to update or modify content, use the 'update' tool with the complete updated content.\n\
         - If the user wants to save and finish, use the 'save' tool.\n\
         - Always show the current document state after modifications.\n\n\
         Current document content:\n{}",
        document
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_names_both_tools() {
        let prompt = system_prompt("");
        assert!(prompt.contains("'update' tool"));
        assert!(prompt.contains("'save' tool"));
        assert!(prompt.ends_with("Current document content:\n"));
    }

    #[test]
    fn test_system_prompt_embeds_document() {
        let prompt = system_prompt("Dear team,\nThanks!");
        assert!(prompt.ends_with("Current document content:\nDear team,\nThanks!"));
    }
}
