//! Tool executor - the name → handler dispatch table for model tool calls

use std::collections::HashMap;

use log::{debug, warn};

use super::{SaveTool, Tool, ToolContext, UpdateTool};
use crate::llm::{ToolCall, ToolDefinition, ToolResult};

/// Routes tool calls to their handlers and turns every outcome into a [`ToolResult`]
pub struct ToolExecutor {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Create executor with the drafting tools (`update`, `save`)
    pub fn standard() -> Self {
        let mut executor = Self::new();
        executor.add_tool(Box::new(UpdateTool));
        executor.add_tool(Box::new(SaveTool));
        executor
    }

    /// Create an empty executor (for custom tool sets)
    pub fn new() -> Self {
        Self { tools: HashMap::new() }
    }

    /// Add a tool to the executor
    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get tool definitions for the LLM, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool call; failures become error results instead of propagating
    pub async fn execute(&self, call: &ToolCall, ctx: &mut ToolContext<'_>) -> ToolResult {
        debug!("Executing tool {} ({})", call.name, call.id);
        match self.tools.get(&call.name) {
            Some(tool) => match tool.execute(call.input.clone(), ctx).await {
                Ok(output) if output.is_error => ToolResult::error(&call.id, &call.name, output.content),
                Ok(output) => ToolResult::success(&call.id, &call.name, output.content),
                Err(e) => {
                    warn!("Tool {} failed: {}", call.name, e);
                    ToolResult::error(&call.id, &call.name, format!("Tool error: {}", e))
                }
            },
            None => {
                warn!("Model requested unknown tool: {}", call.name);
                ToolResult::error(&call.id, &call.name, format!("Unknown tool: {}", call.name))
            }
        }
    }

    /// Execute multiple tool calls in order
    pub async fn execute_all(&self, calls: &[ToolCall], ctx: &mut ToolContext<'_>) -> Vec<ToolResult> {
        let mut results = Vec::with_capacity(calls.len());

        for call in calls {
            results.push(self.execute(call, ctx).await);
        }

        results
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the list of tool names
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use tempfile::tempdir;

    #[test]
    fn test_standard_executor_has_drafting_tools() {
        let executor = ToolExecutor::standard();

        assert!(executor.has_tool("update"));
        assert!(executor.has_tool("save"));
        assert_eq!(executor.tool_names().len(), 2);
    }

    #[test]
    fn test_definitions_sorted() {
        let defs = ToolExecutor::standard().definitions();
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["save", "update"]);
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let executor = ToolExecutor::standard();
        let mut doc = Document::new();
        let mut ctx = ToolContext::new(&mut doc, ".");

        let call = ToolCall::new("call_1", "delete", serde_json::json!({}));
        let result = executor.execute(&call, &mut ctx).await;

        assert!(result.is_error);
        assert_eq!(result.name, "delete");
        assert!(result.content.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_execute_bad_arguments_becomes_error_result() {
        let executor = ToolExecutor::standard();
        let mut doc = Document::new();
        let mut ctx = ToolContext::new(&mut doc, ".");

        let call = ToolCall::new("call_1", "update", serde_json::json!({"text": "wrong key"}));
        let result = executor.execute(&call, &mut ctx).await;

        assert!(result.is_error);
        assert_eq!(result.content, "Tool error: content is required");
    }

    #[tokio::test]
    async fn test_execute_all_in_order() {
        let executor = ToolExecutor::standard();
        let dir = tempdir().unwrap();
        let mut doc = Document::new();
        let mut ctx = ToolContext::new(&mut doc, dir.path());

        let calls = vec![
            ToolCall::new("call_1", "update", serde_json::json!({"content": "Hello"})),
            ToolCall::new("call_2", "save", serde_json::json!({"filename": "draft"})),
        ];

        let results = executor.execute_all(&calls, &mut ctx).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].tool_use_id, "call_1");
        assert_eq!(results[0].name, "update");
        assert_eq!(results[1].tool_use_id, "call_2");
        assert_eq!(results[1].name, "save");
        assert!(results.iter().all(|r| !r.is_error));
        assert_eq!(std::fs::read_to_string(dir.path().join("draft.txt")).unwrap(), "Hello");
    }

    #[test]
    fn test_empty_executor() {
        let executor = ToolExecutor::new();
        assert!(executor.tool_names().is_empty());
        assert!(executor.definitions().is_empty());
    }

    #[test]
    fn test_add_custom_tool() {
        let mut executor = ToolExecutor::new();
        executor.add_tool(Box::new(UpdateTool));

        assert!(executor.has_tool("update"));
        assert!(!executor.has_tool("save"));
    }
}
