//! Wire types for the Gemini `generateContent` REST API.
//!
//! # Protocol Overview
//!
//! - **One-shot**: `POST {base}/{model}:generateContent` returns one
//!   [`GenerateContentResponse`].
//! - **Streaming**: `POST {base}/{model}:streamGenerateContent?alt=sse` returns
//!   a server-sent-event body; every `data:` line holds one
//!   [`GenerateContentResponse`] carrying the next piece of text.
//! - **Errors**: non-2xx responses carry `{"error": {"status", "message"}}`.
//!
//! Field names are camelCase on the wire.

use quill_domain::{ConversationContext, GenerationConfig, Message, Sender};
use serde::{Deserialize, Serialize};

/// Request body shared by both endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<WireGenerationConfig>,
}

impl GenerateContentRequest {
    /// Build a request from prior turns plus the new user message.
    pub fn from_conversation(
        context: &ConversationContext,
        content: &str,
        config: &GenerationConfig,
    ) -> Self {
        let mut contents: Vec<Content> = context.turns().iter().map(Content::from).collect();
        contents.push(Content::user(content));
        Self {
            contents,
            system_instruction: config
                .system_instruction
                .as_deref()
                .map(Content::instruction),
            generation_config: WireGenerationConfig::from_config(config),
        }
    }

    /// Build a single-turn request.
    pub fn single(prompt: &str, config: &GenerationConfig) -> Self {
        Self::from_conversation(&ConversationContext::default(), prompt, config)
    }
}

/// One turn of the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role("user", text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::with_role("model", text)
    }

    /// System instructions carry no role.
    pub fn instruction(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }

    fn with_role(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part::text(text)],
        }
    }

    /// Concatenated text of every part.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

impl From<&Message> for Content {
    fn from(message: &Message) -> Self {
        match message.sender {
            Sender::User => Content::user(message.text.clone()),
            Sender::Model => Content::model(message.text.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// `generationConfig` object
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl WireGenerationConfig {
    /// `None` when no sampling parameter is set, so the field is omitted.
    pub fn from_config(config: &GenerationConfig) -> Option<Self> {
        config.has_sampling_params().then(|| Self {
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
            max_output_tokens: config.max_output_tokens,
        })
    }
}

/// Response body (also one SSE chunk when streaming)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Text of the first candidate; empty when there is none.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(Content::text)
            .unwrap_or_default()
    }

    /// Reason the prompt was blocked, if it was.
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Error envelope of a non-2xx response
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub status: Option<String>,
}

/// Human-readable description of an error response body.
///
/// Falls back to the raw body when it is not the usual envelope.
pub fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let message = envelope
                .error
                .message
                .unwrap_or_else(|| body.trim().to_string());
            match envelope.error.status {
                Some(status) if !status.is_empty() => format!("{status}: {message}"),
                _ => message,
            }
        }
        Err(_) => body.trim().to_string(),
    }
}

/// `GET {base}` model listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Resource name, e.g. `models/gemini-1.5-flash`
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn id(&self) -> &str {
        self.name.strip_prefix("models/").unwrap_or(&self.name)
    }

    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|method| method == "generateContent")
    }
}

/// Incremental decoder for a `text/event-stream` body.
///
/// Bytes are buffered until a full line is available, so chunk boundaries
/// may fall anywhere, including inside a multi-byte character.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes and return the payloads of every completed `data:` line.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);
        let mut payloads = Vec::new();
        while let Some(line_end) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=line_end).collect();
            if let Some(payload) = Self::data_payload(&line) {
                payloads.push(payload);
            }
        }
        payloads
    }

    /// Payload of a trailing line that never got its newline.
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buffer);
        Self::data_payload(&rest)
    }

    fn data_payload(line: &[u8]) -> Option<String> {
        let line = String::from_utf8_lossy(line);
        let payload = line.trim().strip_prefix("data:")?.trim_start();
        if payload.is_empty() || payload == "[DONE]" {
            return None;
        }
        Some(payload.to_string())
    }
}
