//! Google Gemini client implementation
//!
//! Speaks the `generateContent` endpoint with function calling.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{Value, json};

use super::client::{LlmClient, LlmError};
use super::types::{CompletionRequest, CompletionResponse, Message, StopReason, ToolCall, Usage};

/// Gemini API base URL
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API key, in order
pub const GEMINI_API_KEY_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];

/// Default model to use
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Configuration for the Gemini client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(120),
        }
    }
}

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client reading the key from GOOGLE_API_KEY or GEMINI_API_KEY
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let api_key = GEMINI_API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .ok_or_else(|| LlmError::MissingApiKey {
                env_var: GEMINI_API_KEY_VARS.join(" or "),
            })?;

        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key
    pub fn with_api_key(api_key: String, config: GeminiConfig) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: GEMINI_API_BASE.to_string(),
            config,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Build the request body for `generateContent`
    fn build_request(&self, request: &CompletionRequest) -> Value {
        let max_tokens = request.max_tokens.unwrap_or(self.config.max_tokens);

        let mut body = json!({
            "contents": to_gemini_contents(&request.messages),
            "generationConfig": { "maxOutputTokens": max_tokens }
        });

        if !request.system.is_empty() {
            body["systemInstruction"] = json!({ "parts": [{ "text": request.system }] });
        }

        if !request.tools.is_empty() {
            let declarations: Vec<Value> = request.tools.iter().map(|t| t.to_gemini_declaration()).collect();
            body["tools"] = json!([{ "functionDeclarations": declarations }]);
        }

        body
    }

    /// Parse the first candidate of a `generateContent` response
    fn parse_response(&self, body: Value) -> Result<CompletionResponse, LlmError> {
        let candidate = body["candidates"].get(0).ok_or_else(|| {
            let reason = body["promptFeedback"]["blockReason"].as_str().unwrap_or("no candidates returned");
            LlmError::InvalidResponse(reason.to_string())
        })?;

        let mut content = String::new();
        let mut tool_calls = Vec::new();

        if let Some(parts) = candidate["content"]["parts"].as_array() {
            for part in parts {
                if part["thought"].as_bool().unwrap_or(false) {
                    continue;
                }
                if let Some(text) = part["text"].as_str() {
                    if !content.is_empty() {
                        content.push('\n');
                    }
                    content.push_str(text);
                } else if let Some(call) = part.get("functionCall") {
                    let name = call["name"].as_str().unwrap_or("").to_string();
                    let input = call.get("args").cloned().unwrap_or_else(|| json!({}));
                    // Gemini does not assign call ids; number them per response
                    let id = call["id"]
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("call_{}", tool_calls.len()));
                    let mut tool_call = ToolCall::new(id, name, input);
                    if let Some(signature) = part["thoughtSignature"].as_str() {
                        tool_call = tool_call.with_signature(signature);
                    }
                    tool_calls.push(tool_call);
                }
            }
        }

        let stop_reason = match candidate["finishReason"].as_str() {
            Some("MAX_TOKENS") => StopReason::MaxTokens,
            _ if !tool_calls.is_empty() => StopReason::ToolUse,
            _ => StopReason::EndTurn,
        };

        let usage = Usage::new(
            body["usageMetadata"]["promptTokenCount"].as_u64().unwrap_or(0),
            body["usageMetadata"]["candidatesTokenCount"].as_u64().unwrap_or(0),
        );

        Ok(CompletionResponse {
            content,
            tool_calls,
            stop_reason,
            usage,
        })
    }

    async fn send_request(&self, model: &str, body: Value) -> Result<Value, LlmError> {
        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(LlmError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Convert history entries into Gemini `contents`.
///
/// Function responses are sent with the `user` role; consecutive entries with the same role are
/// merged so roles alternate.
fn to_gemini_contents(messages: &[Message]) -> Vec<Value> {
    let mut out: Vec<(&'static str, Vec<Value>)> = Vec::new();

    for message in messages {
        let (role, parts) = match message {
            Message::Human { content } => ("user", vec![json!({ "text": content })]),
            Message::Model { content, tool_calls } => {
                let mut parts = Vec::new();
                if !content.is_empty() {
                    parts.push(json!({ "text": content }));
                }
                for call in tool_calls {
                    let mut part = json!({ "functionCall": { "name": call.name, "args": call.input } });
                    if let Some(signature) = &call.signature {
                        part["thoughtSignature"] = json!(signature);
                    }
                    parts.push(part);
                }
                ("model", parts)
            }
            Message::Tool(result) => (
                "user",
                vec![json!({
                    "functionResponse": {
                        "name": result.name,
                        "response": { "result": result.content }
                    }
                })],
            ),
        };

        if parts.is_empty() {
            continue;
        }

        match out.last_mut() {
            Some((last_role, last_parts)) if *last_role == role => last_parts.extend(parts),
            _ => out.push((role, parts)),
        }
    }

    out.into_iter()
        .map(|(role, parts)| json!({ "role": role, "parts": parts }))
        .collect()
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = request.model.clone().unwrap_or_else(|| self.config.model.clone());
        let body = self.build_request(&request);
        debug!(
            "gemini request: model={} contents={}",
            model,
            body["contents"].as_array().map(|c| c.len()).unwrap_or(0)
        );
        let response = self.send_request(&model, body).await?;
        self.parse_response(response)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.config.model)
            .field("max_tokens", &self.config.max_tokens)
            .finish()
    }
}
