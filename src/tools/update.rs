//! update tool - Replace the draft with new content

use async_trait::async_trait;
use eyre::eyre;
use serde_json::Value;

use super::{Tool, ToolContext, ToolOutput};

pub struct UpdateTool;

#[async_trait]
impl Tool for UpdateTool {
    fn name(&self) -> &'static str {
        "update"
    }

    fn description(&self) -> &'static str {
        "Updates the document with the provided content."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "The complete updated document content"
                }
            },
            "required": ["content"]
        })
    }

    async fn execute(&self, input: Value, ctx: &mut ToolContext<'_>) -> Result<ToolOutput, eyre::Error> {
        let content = input["content"].as_str().ok_or_else(|| eyre!("content is required"))?;

        ctx.document_mut().set(content);

        Ok(ToolOutput::success(format!(
            "Document has been successfully updated!\n\nCurrent content:\n{}",
            ctx.document().get()
        )))
    }
}
