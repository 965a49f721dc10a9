//! Human-facing terminal I/O
//!
//! The session talks to the human only through [`Console`]: one blocking line read per turn and a
//! stream of typed [`ConsoleEvent`]s to render.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use colored::*;
use log::warn;

use crate::error::{DrafterError, Result};

/// Something the session wants the human to see
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    SessionStarted,
    /// Echo of the line the human just typed
    HumanInput(String),
    ModelReply(String),
    ToolsRequested(Vec<String>),
    ToolResult { name: String, content: String },
    SessionFinished,
}

pub trait Console {
    /// Block until the human enters a line; the trailing newline is stripped
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn show(&mut self, event: &ConsoleEvent);
}

/// Console backed by stdin/stdout
pub struct TerminalConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn render(event: &ConsoleEvent) -> String {
        match event {
            ConsoleEvent::SessionStarted => format!("\n{}", "==== DRAFTER ====".cyan().bold()),
            ConsoleEvent::HumanInput(text) => format!("\n{} {}", "USER:".green().bold(), text),
            ConsoleEvent::ModelReply(text) => format!("\n{} {}", "AI:".blue().bold(), text),
            ConsoleEvent::ToolsRequested(names) => {
                format!("{} [{}]", "USING TOOLS:".yellow(), names.join(", "))
            }
            ConsoleEvent::ToolResult { name, content } => {
                format!("\n{} {}", format!("TOOL RESULT ({}):", name).magenta(), content)
            }
            ConsoleEvent::SessionFinished => format!("\n{}", "==== DRAFTER FINISHED ====".cyan().bold()),
        }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "\n{}\n> ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DrafterError::InputClosed);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }

    fn show(&mut self, event: &ConsoleEvent) {
        if let Err(e) = writeln!(self.output, "{}", Self::render(event)) {
            warn!("Failed to write to console: {}", e);
        }
    }
}

/// Console fed from a fixed list of lines, recording everything shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    events: Vec<ConsoleEvent>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn events(&self) -> &[ConsoleEvent] {
        &self.events
    }

    /// Prompts shown so far, one per line read
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Tool results shown so far, as (name, content)
    pub fn shown_results(&self) -> Vec<(&str, &str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ConsoleEvent::ToolResult { name, content } => Some((name.as_str(), content.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(DrafterError::InputClosed)
    }

    fn show(&mut self, event: &ConsoleEvent) {
        self.events.push(event.clone());
    }
}
