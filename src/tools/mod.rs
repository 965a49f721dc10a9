//! Actions the model can invoke on the draft
//!
//! Each action is a [`Tool`]; the [`ToolExecutor`] is the name → handler dispatch table the
//! session routes model tool calls through. Tools only reach the document via [`ToolContext`].

mod context;
mod executor;
mod save;
mod update;

pub use context::ToolContext;
pub use executor::ToolExecutor;
pub use save::{SaveTool, normalize_filename};
pub use update::UpdateTool;

use async_trait::async_trait;
use serde_json::Value;

use crate::llm::ToolDefinition;

/// A tool that can be called by the LLM
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (matches the model's tool call name)
    fn name(&self) -> &'static str;

    /// Human-readable description sent to the model
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool
    async fn execute(&self, input: Value, ctx: &mut ToolContext<'_>) -> Result<ToolOutput, eyre::Error>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }
}

/// What a tool reports back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub content: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}
