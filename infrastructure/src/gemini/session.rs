//! Gemini chat session.
//!
//! Provides [`GeminiSession`] which implements [`LlmSession`] by posting the
//! whole conversation context to `streamGenerateContent` on every message.
//! The service keeps no state between calls.

use crate::gemini::error::GeminiError;
use crate::gemini::protocol::{GenerateContentRequest, GenerateContentResponse, SseDecoder};
use crate::gemini::transport::HttpTransport;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use quill_application::ports::llm_gateway::{GatewayError, LlmSession, StreamHandle};
use quill_domain::{ConversationContext, GenerationConfig, Model, StreamEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Buffered events between the reader task and the consumer
const STREAM_CHANNEL_CAPACITY: usize = 64;

pub struct GeminiSession {
    transport: Arc<HttpTransport>,
    model: Model,
    config: GenerationConfig,
}

impl GeminiSession {
    pub fn new(transport: Arc<HttpTransport>, model: Model, config: GenerationConfig) -> Self {
        Self {
            transport,
            model,
            config,
        }
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send_streaming(
        &self,
        context: &ConversationContext,
        content: &str,
    ) -> Result<StreamHandle, GatewayError> {
        let request = GenerateContentRequest::from_conversation(context, content, &self.config);
        debug!(
            model = %self.model,
            turns = request.contents.len(),
            "Opening response stream"
        );

        let response = self.transport.open_stream(&self.model, &request).await?;

        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        let idle_timeout = self.transport.timeout();
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(reqwest::Error::without_url));
        tokio::spawn(pump(body, tx, idle_timeout));

        Ok(StreamHandle::new(rx))
    }
}

/// Read SSE chunks from `body` and forward them as [`StreamEvent`]s.
///
/// Always ends with exactly one terminal event unless the receiver is gone.
pub(crate) async fn pump<S, B, E>(body: S, tx: mpsc::Sender<StreamEvent>, idle_timeout: Duration)
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut body = std::pin::pin!(body);
    let mut decoder = SseDecoder::new();
    let mut full_text = String::new();

    loop {
        let chunk = match tokio::time::timeout(idle_timeout, body.next()).await {
            Ok(Some(Ok(chunk))) => chunk,
            Ok(None) => break,
            Ok(Some(Err(e))) => {
                warn!("Response stream failed: {}", e);
                let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                return;
            }
            Err(_) => {
                warn!("No data within {:?}", idle_timeout);
                let _ = tx.send(StreamEvent::Error(GeminiError::Timeout.to_string())).await;
                return;
            }
        };

        for payload in decoder.push(chunk.as_ref()) {
            if let Err(e) = forward(&payload, &tx, &mut full_text).await {
                let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                return;
            }
        }
        if tx.is_closed() {
            debug!("Stream consumer dropped; stopping reader");
            return;
        }
    }

    if let Some(payload) = decoder.finish()
        && let Err(e) = forward(&payload, &tx, &mut full_text).await
    {
        let _ = tx.send(StreamEvent::Error(e.to_string())).await;
        return;
    }

    debug!(bytes = full_text.len(), "Response stream complete");
    let _ = tx.send(StreamEvent::Completed(full_text)).await;
}

async fn forward(
    payload: &str,
    tx: &mpsc::Sender<StreamEvent>,
    full_text: &mut String,
) -> Result<(), GeminiError> {
    let chunk: GenerateContentResponse =
        serde_json::from_str(payload).map_err(|e| GeminiError::ParseError {
            error: e.to_string(),
            raw: payload.to_string(),
        })?;

    if let Some(reason) = chunk.block_reason() {
        return Err(GeminiError::Blocked(reason.to_string()));
    }

    let text = chunk.text();
    if !text.is_empty() {
        full_text.push_str(&text);
        let _ = tx.send(StreamEvent::Delta(text)).await;
    }
    Ok(())
}
