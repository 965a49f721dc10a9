//! One model turn: gather the human message, call the model, extend the history

use std::sync::Arc;

use log::debug;

use super::history::History;
use super::prompt::{INPUT_PROMPT, OPENING_MESSAGE, system_prompt};
use crate::console::{Console, ConsoleEvent};
use crate::document::Document;
use crate::error::Result;
use crate::llm::{CompletionRequest, CompletionResponse, LlmClient, Message, ToolDefinition};

/// What a turn produced
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub response: CompletionResponse,
    /// Prior history plus the human message and the model reply
    pub history: History,
}

/// Produces one model response per call
pub struct TurnExecutor<L: LlmClient + ?Sized> {
    llm: Arc<L>,
    tools: Vec<ToolDefinition>,
    max_tokens: Option<u32>,
}

impl<L: LlmClient + ?Sized> TurnExecutor<L> {
    pub fn new(llm: Arc<L>, tools: Vec<ToolDefinition>) -> Self {
        Self {
            llm,
            tools,
            max_tokens: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Run one turn.
    ///
    /// With an empty history the canned opener stands in for the human; otherwise one line is read
    /// from the console. The document is snapshotted into the system prompt before the model is
    /// called, so tool calls made in this turn are not reflected in it.
    pub async fn execute<C: Console + ?Sized>(
        &self,
        mut history: History,
        document: &Document,
        console: &mut C,
    ) -> Result<TurnOutcome> {
        let human = if history.is_empty() {
            OPENING_MESSAGE.to_string()
        } else {
            let input = console.read_line(INPUT_PROMPT)?;
            console.show(&ConsoleEvent::HumanInput(input.clone()));
            input
        };
        let human = Message::human(human);

        let mut messages = history.messages().to_vec();
        messages.push(human.clone());

        let mut request = CompletionRequest::new(system_prompt(document.get()))
            .with_messages(messages)
            .with_tools(self.tools.clone());
        request.max_tokens = self.max_tokens;

        debug!(
            "Calling {} with {} messages, {} tools",
            self.llm.model(),
            request.messages.len(),
            request.tools.len()
        );
        let response = self.llm.complete(request).await?;

        console.show(&ConsoleEvent::ModelReply(response.content.clone()));
        if !response.tool_calls.is_empty() {
            console.show(&ConsoleEvent::ToolsRequested(response.tool_names()));
        }

        history.push(human);
        history.push(response.to_message());

        Ok(TurnOutcome { response, history })
    }
}
