//! Drafter - a conversational document editor
//!
//! A human and a language model take turns in the terminal. The model edits a single in-memory
//! draft through an `update` tool and ends the session by calling `save`, which writes the draft
//! to a text file.

pub mod console;
pub mod document;
pub mod error;
pub mod llm;
pub mod session;
pub mod tools;

pub use error::{DrafterError, Result};
