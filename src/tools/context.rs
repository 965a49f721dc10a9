//! Tool execution context - scoped to a single session

use std::path::PathBuf;

use crate::document::Document;

/// Everything a tool may touch: the session's draft and the directory saves land in
pub struct ToolContext<'a> {
    document: &'a mut Document,

    /// Relative filenames resolve against this directory
    output_dir: PathBuf,
}

impl<'a> ToolContext<'a> {
    pub fn new(document: &'a mut Document, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            document,
            output_dir: output_dir.into(),
        }
    }

    pub fn document(&self) -> &Document {
        self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        self.document
    }

    /// Resolve a filename against the output directory; absolute paths are kept as-is
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }
}
