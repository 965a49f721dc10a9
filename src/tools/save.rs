//! save tool - Write the draft to a text file

use async_trait::async_trait;
use eyre::eyre;
use log::{info, warn};
use serde_json::Value;

use super::{Tool, ToolContext, ToolOutput};

const TEXT_EXTENSION: &str = ".txt";

/// Append `.txt` unless the name already ends with it
pub fn normalize_filename(filename: &str) -> String {
    if filename.ends_with(TEXT_EXTENSION) {
        filename.to_string()
    } else {
        format!("{}{}", filename, TEXT_EXTENSION)
    }
}

pub struct SaveTool;

#[async_trait]
impl Tool for SaveTool {
    fn name(&self) -> &'static str {
        "save"
    }

    fn description(&self) -> &'static str {
        "Save the current document to a text file and finish the process."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "filename": {
                    "type": "string",
                    "description": "Name for the text file"
                }
            },
            "required": ["filename"]
        })
    }

    async fn execute(&self, input: Value, ctx: &mut ToolContext<'_>) -> Result<ToolOutput, eyre::Error> {
        let filename = input["filename"].as_str().ok_or_else(|| eyre!("filename is required"))?;
        let filename = normalize_filename(filename);
        let path = ctx.resolve(&filename);

        // Write failures are reported to the model, not raised
        match tokio::fs::write(&path, ctx.document().get()).await {
            Ok(()) => {
                info!("Saved {} bytes to {}", ctx.document().get().len(), path.display());
                Ok(ToolOutput::success(format!(
                    "Document has been saved successfully to '{}'.",
                    filename
                )))
            }
            Err(e) => {
                warn!("Failed to save {}: {}", path.display(), e);
                Ok(ToolOutput::error(format!("Error saving document: {}", e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_appends_extension() {
        assert_eq!(normalize_filename("draft"), "draft.txt");
        assert_eq!(normalize_filename("notes.md"), "notes.md.txt");
        assert_eq!(normalize_filename(""), ".txt");
    }

    #[test]
    fn test_normalize_keeps_existing_extension() {
        assert_eq!(normalize_filename("draft.txt"), "draft.txt");
        assert_eq!(normalize_filename("dir/letter.txt"), "dir/letter.txt");
    }

    #[tokio::test]
    async fn test_save_writes_document() {
        let dir = tempdir().unwrap();
        let mut doc = Document::new();
        doc.set("Hello");
        let mut ctx = ToolContext::new(&mut doc, dir.path());

        let output = SaveTool
            .execute(serde_json::json!({"filename": "draft"}), &mut ctx)
            .await
            .unwrap();

        assert!(!output.is_error);
        assert_eq!(output.content, "Document has been saved successfully to 'draft.txt'.");
        let written = std::fs::read_to_string(dir.path().join("draft.txt")).unwrap();
        assert_eq!(written, "Hello");
    }

    #[tokio::test]
    async fn test_save_keeps_txt_name_and_overwrites() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("letter.txt"), "stale").unwrap();

        let mut doc = Document::new();
        doc.set("Dear reader,\nÇa va? 👋");
        let mut ctx = ToolContext::new(&mut doc, dir.path());

        SaveTool
            .execute(serde_json::json!({"filename": "letter.txt"}), &mut ctx)
            .await
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("letter.txt")).unwrap();
        assert_eq!(written, "Dear reader,\nÇa va? 👋");
        assert!(!dir.path().join("letter.txt.txt").exists());
    }

    #[tokio::test]
    async fn test_save_twice_is_identical() {
        let dir = tempdir().unwrap();
        let mut doc = Document::new();
        doc.set("same text");
        let mut ctx = ToolContext::new(&mut doc, dir.path());

        SaveTool
            .execute(serde_json::json!({"filename": "copy"}), &mut ctx)
            .await
            .unwrap();
        let first = std::fs::read(dir.path().join("copy.txt")).unwrap();

        SaveTool
            .execute(serde_json::json!({"filename": "copy"}), &mut ctx)
            .await
            .unwrap();
        let second = std::fs::read(dir.path().join("copy.txt")).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_save_empty_document() {
        let dir = tempdir().unwrap();
        let mut doc = Document::new();
        let mut ctx = ToolContext::new(&mut doc, dir.path());

        let output = SaveTool
            .execute(serde_json::json!({"filename": "empty"}), &mut ctx)
            .await
            .unwrap();

        assert!(!output.is_error);
        let written = std::fs::read_to_string(dir.path().join("empty.txt")).unwrap();
        assert!(written.is_empty());
    }

    #[tokio::test]
    async fn test_save_failure_is_reported_not_raised() {
        let dir = tempdir().unwrap();
        let mut doc = Document::new();
        doc.set("text");
        let mut ctx = ToolContext::new(&mut doc, dir.path());

        let output = SaveTool
            .execute(serde_json::json!({"filename": "missing/dir/draft"}), &mut ctx)
            .await
            .unwrap();

        assert!(output.is_error);
        assert!(output.content.starts_with("Error saving document:"));
    }

    #[tokio::test]
    async fn test_save_missing_filename() {
        let dir = tempdir().unwrap();
        let mut doc = Document::new();
        let mut ctx = ToolContext::new(&mut doc, dir.path());

        let result = SaveTool.execute(serde_json::json!({}), &mut ctx).await;
        assert!(result.is_err());
    }
}
