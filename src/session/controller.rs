//! Session loop - drives turns until the draft is saved
//!
//! Two states, `Running` and `Ended`. Each iteration runs one model turn, executes the requested
//! tools, shows the fresh results and asks the termination check whether to go again.

use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use super::history::History;
use super::termination::{self, Decision};
use super::turn::TurnExecutor;
use crate::console::{Console, ConsoleEvent};
use crate::document::Document;
use crate::error::{DrafterError, Result};
use crate::llm::{LlmClient, Message, Usage};
use crate::tools::{ToolContext, ToolExecutor};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Ended,
}

/// Configuration for a Session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Passed through to the model; `None` uses the client's default
    pub max_tokens: Option<u32>,
    /// How many trailing history entries are scanned for results to show after each turn
    pub recent_results: usize,
    /// Directory relative save paths resolve against
    pub output_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_tokens: None,
            recent_results: 3,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Summary of a finished session
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Model turns taken
    pub turns: u32,
    /// Turns in which the model invoked at least one tool
    pub action_turns: u32,
    pub history: History,
    /// Draft text when the session ended
    pub document: String,
    pub usage: Usage,
}

/// One drafting conversation
pub struct Session<L: LlmClient + ?Sized, C: Console> {
    turns: TurnExecutor<L>,
    tools: ToolExecutor,
    console: C,
    document: Document,
    config: SessionConfig,
    state: SessionState,
}

impl<L: LlmClient + ?Sized, C: Console> Session<L, C> {
    /// Create a session with the standard drafting tools
    pub fn new(llm: Arc<L>, console: C, config: SessionConfig) -> Self {
        Self::with_tools(llm, ToolExecutor::standard(), console, config)
    }

    pub fn with_tools(llm: Arc<L>, tools: ToolExecutor, console: C, config: SessionConfig) -> Self {
        let mut turns = TurnExecutor::new(llm, tools.definitions());
        if let Some(max_tokens) = config.max_tokens {
            turns = turns.with_max_tokens(max_tokens);
        }

        Self {
            turns,
            tools,
            console,
            document: Document::new(),
            config,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run turns until the termination check says the draft is done.
    ///
    /// Model and console failures propagate; tool failures are recorded as results and the loop
    /// carries on.
    pub async fn run(&mut self) -> Result<SessionReport> {
        if self.state == SessionState::Ended {
            return Err(DrafterError::InvalidState("session already ended".to_string()));
        }

        info!("Drafting session started");
        self.console.show(&ConsoleEvent::SessionStarted);

        let mut history = History::new();
        let mut turns = 0u32;
        let mut action_turns = 0u32;
        let mut usage = Usage::default();

        while self.state == SessionState::Running {
            let outcome = self.turns.execute(history, &self.document, &mut self.console).await?;
            history = outcome.history;
            turns += 1;
            usage.add(&outcome.response.usage);

            if !outcome.response.tool_calls.is_empty() {
                action_turns += 1;
                let mut ctx = ToolContext::new(&mut self.document, &self.config.output_dir);
                let results = self.tools.execute_all(&outcome.response.tool_calls, &mut ctx).await;
                history.extend(results.into_iter().map(Message::Tool));
            }

            for result in history.recent_tool_results(self.config.recent_results) {
                self.console.show(&ConsoleEvent::ToolResult {
                    name: result.name.clone(),
                    content: result.content.clone(),
                });
            }

            if termination::decide(&history) == Decision::End {
                self.state = SessionState::Ended;
            }
        }

        info!(
            "Drafting session finished after {} turns ({} tokens)",
            turns,
            usage.total()
        );
        self.console.show(&ConsoleEvent::SessionFinished);

        Ok(SessionReport {
            turns,
            action_turns,
            history,
            document: self.document.get().to_string(),
            usage,
        })
    }
}
