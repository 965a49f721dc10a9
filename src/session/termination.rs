//! Decides whether the session is over after a turn's tool results are in

use super::history::History;

/// Outcome of the termination check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    End,
}

/// Inspect the most recent tool result only.
///
/// A `save` call ends the session whatever it reported. Any other result ends it when its text
/// mentions both "saved" and "document", ignoring case.
pub fn decide(history: &History) -> Decision {
    let Some(result) = history.last_tool_result() else {
        return Decision::Continue;
    };

    if result.name == "save" {
        return Decision::End;
    }

    let text = result.content.to_lowercase();
    if text.contains("saved") && text.contains("document") {
        Decision::End
    } else {
        Decision::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{Message, ToolResult};

    fn history_with(results: &[(&str, &str)]) -> History {
        let mut history = History::new();
        history.push(Message::human("hi"));
        for (i, (name, content)) in results.iter().enumerate() {
            history.push(Message::Tool(ToolResult::success(format!("call_{}", i), *name, *content)));
        }
        history
    }

    #[test]
    fn test_empty_history_continues() {
        assert_eq!(decide(&History::new()), Decision::Continue);
    }

    #[test]
    fn test_no_tool_results_continues() {
        let mut history = History::new();
        history.push(Message::human("hello"));
        history.push(Message::model("Hi! What should we write?", vec![]));
        assert_eq!(decide(&history), Decision::Continue);
    }

    #[test]
    fn test_save_ends_regardless_of_text() {
        assert_eq!(decide(&history_with(&[("save", "whatever")])), Decision::End);
    }

    #[test]
    fn test_failed_save_still_ends() {
        let mut history = History::new();
        history.push(Message::Tool(ToolResult::error(
            "call_0",
            "save",
            "Error saving document: Permission denied",
        )));
        assert_eq!(decide(&history), Decision::End);
    }

    #[test]
    fn test_saved_document_text_ends() {
        let history = history_with(&[("update", "Document saved successfully")]);
        assert_eq!(decide(&history), Decision::End);
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let history = history_with(&[("update", "the DOCUMENT was SAVED")]);
        assert_eq!(decide(&history), Decision::End);
    }

    #[test]
    fn test_update_result_continues() {
        let history = history_with(&[(
            "update",
            "Document has been successfully updated!\n\nCurrent content:\nHello",
        )]);
        assert_eq!(decide(&history), Decision::Continue);
    }

    #[test]
    fn test_update_mentioning_saved_document_ends() {
        // Content that happens to say "saved" trips the text heuristic
        let history = history_with(&[(
            "update",
            "Document has been successfully updated!\n\nCurrent content:\nI saved the date.",
        )]);
        assert_eq!(decide(&history), Decision::End);
    }

    #[test]
    fn test_only_most_recent_result_counts() {
        let history = history_with(&[("update", "Document saved successfully"), ("update", "Document updated")]);
        assert_eq!(decide(&history), Decision::Continue);
    }

    #[test]
    fn test_human_message_after_result_does_not_hide_it() {
        let mut history = history_with(&[("save", "Document has been saved successfully to 'a.txt'.")]);
        history.push(Message::human("thanks"));
        assert_eq!(decide(&history), Decision::End);
    }
}
