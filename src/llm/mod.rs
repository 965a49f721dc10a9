//! LLM Client Layer - provider-neutral message types and HTTP clients
//!
//! This module provides:
//! - Message types shared by every provider
//! - LlmClient trait for API abstraction
//! - AnthropicClient and GeminiClient implementations
//! - MockLlmClient for scripted tests

pub mod anthropic;
pub mod client;
pub mod gemini;
pub mod types;

pub use anthropic::{AnthropicClient, AnthropicConfig};
pub use client::{LlmClient, LlmError, MockLlmClient};
pub use gemini::{GeminiClient, GeminiConfig};
pub use types::{
    CompletionRequest, CompletionResponse, Message, Role, StopReason, ToolCall, ToolDefinition, ToolResult, Usage,
};
