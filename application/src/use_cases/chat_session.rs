//! Chat session use case
//!
//! Drives the chat panel: accepts a submission, streams the model's reply
//! into the transcript and records successful exchanges in the conversation
//! context.
//!
//! The pure state transitions live on [`ChatState`]; [`ChatSessionUseCase`]
//! connects them to an [`LlmGateway`].

use crate::config::PanelConfig;
use crate::ports::llm_gateway::{FailureKind, GatewayError, LlmGateway, LlmSession, StreamHandle};
use crate::ports::transcript_observer::{NoObserver, TranscriptObserver};
use quill_domain::core::string::preview;
use quill_domain::{ConversationContext, GenerationConfig, Message, Model, StreamEvent, Transcript};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Prefix of the model message appended when an exchange fails before any
/// reply text arrived.
pub const ERROR_PREFIX: &str = "Error: ";

/// Lifecycle of one chat submission.
///
/// `Idle → Submitting → Streaming → Idle`. Only `Idle` accepts a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    /// Submission accepted, request not yet producing fragments.
    Submitting,
    /// Fragments are being merged into the trailing model message.
    Streaming,
}

/// Result of driving one submission to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Blank input or a submission already in flight; nothing changed.
    Rejected,
    /// The reply streamed to completion.
    Completed,
    /// The exchange failed and the failure was written to the transcript.
    Failed(FailureKind),
}

/// Chat panel state: transcript, in-flight phase, input buffer and context.
///
/// Owned by whoever hosts the chat panel and dropped with it. Nothing here
/// is persisted.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    transcript: Transcript,
    phase: ChatPhase,
    input: String,
    context: ConversationContext,
    /// User text of the exchange in flight.
    pending: Option<String>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase != ChatPhase::Idle
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Accept a user submission.
    ///
    /// Returns false and leaves the state untouched when `text` is blank or
    /// another submission is in flight. Otherwise appends the user message,
    /// enters `Submitting` and clears the input buffer.
    pub fn submit(&mut self, text: &str) -> bool {
        if self.is_loading() || text.trim().is_empty() {
            return false;
        }
        self.transcript.push_user(text);
        self.pending = Some(text.to_string());
        self.phase = ChatPhase::Submitting;
        self.input.clear();
        true
    }

    /// Merge one fragment of the reply in flight.
    pub fn on_fragment(&mut self, fragment: &str) {
        if !self.is_loading() {
            warn!("Dropping fragment received while idle");
            return;
        }
        self.transcript.append_fragment(fragment);
        self.phase = ChatPhase::Streaming;
    }

    /// Finalize the reply and record the exchange in the context.
    ///
    /// A reply that produced no fragments still yields one (empty) model
    /// message.
    pub fn on_complete(&mut self) {
        if !self.is_loading() {
            return;
        }
        let reply = match self.transcript.finalize() {
            Some(reply) => reply.clone(),
            None => {
                self.transcript.push_model("");
                Message::model("")
            }
        };
        if let Some(user_text) = self.pending.take() {
            self.context.push_exchange(Message::user(user_text), reply);
        }
        self.phase = ChatPhase::Idle;
    }

    /// End the exchange with a failure.
    ///
    /// Partial reply text is kept and finalized. Without any, a model
    /// message reporting the error is appended. The context is not touched.
    pub fn on_error(&mut self, error: &dyn std::fmt::Display) {
        if !self.is_loading() {
            return;
        }
        if self.transcript.finalize().is_none() {
            self.transcript.push_model(format!("{ERROR_PREFIX}{error}"));
        }
        self.pending = None;
        self.phase = ChatPhase::Idle;
    }

    /// Start a fresh conversation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Use case for streaming chat exchanges
pub struct ChatSessionUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    config: GenerationConfig,
    /// Created lazily and re-created whenever it is missing.
    session: Option<Box<dyn LlmSession>>,
}

impl<G: LlmGateway + 'static> ChatSessionUseCase<G> {
    pub fn new(gateway: Arc<G>, panel: PanelConfig) -> Self {
        Self {
            gateway,
            model: panel.model,
            config: panel.generation,
            session: None,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Drop the current source session; the next submission opens a new one.
    pub fn drop_session(&mut self) {
        self.session = None;
    }

    /// Submit `text` and stream the reply into `state`.
    pub async fn send(&mut self, state: &mut ChatState, text: &str) -> ChatOutcome {
        self.send_with_observer(state, text, &NoObserver).await
    }

    /// Submit `text`, stream the reply into `state` and mirror progress to
    /// `observer`.
    ///
    /// Failures never escape: they end up in the transcript and the state is
    /// ready for the next submission.
    pub async fn send_with_observer(
        &mut self,
        state: &mut ChatState,
        text: &str,
        observer: &dyn TranscriptObserver,
    ) -> ChatOutcome {
        if !state.submit(text) {
            debug!(loading = state.is_loading(), "Submission rejected");
            return ChatOutcome::Rejected;
        }
        observer.on_submitted(text);

        info!(
            model = %self.model,
            context_turns = state.context().turns().len(),
            prompt = %preview(text, 60),
            "Sending chat message"
        );

        let handle = match self.open_stream(state.context(), text).await {
            Ok(handle) => handle,
            Err(e) => return Self::fail(state, e, observer),
        };

        Self::consume(state, handle, observer).await
    }

    /// Make sure a source session exists, then issue the streaming request.
    async fn open_stream(
        &mut self,
        context: &ConversationContext,
        text: &str,
    ) -> Result<StreamHandle, GatewayError> {
        let session = self.ensure_session().await?;
        session.send_streaming(context, text).await
    }

    async fn ensure_session(&mut self) -> Result<&dyn LlmSession, GatewayError> {
        if self.session.is_none() {
            debug!(model = %self.model, "Opening chat session");
            let session = self
                .gateway
                .create_session(&self.model, &self.config)
                .await?;
            self.session = Some(session);
        }
        self.session
            .as_deref()
            .ok_or_else(|| GatewayError::SessionError("session unavailable".to_string()))
    }

    async fn consume(
        state: &mut ChatState,
        mut handle: StreamHandle,
        observer: &dyn TranscriptObserver,
    ) -> ChatOutcome {
        while let Some(event) = handle.receiver.recv().await {
            match event {
                StreamEvent::Delta(fragment) => {
                    state.on_fragment(&fragment);
                    observer.on_fragment(&fragment);
                }
                StreamEvent::Completed(full_text) => {
                    // Non-streaming sources deliver everything here
                    if !state.transcript().is_streaming() && !full_text.is_empty() {
                        state.on_fragment(&full_text);
                        observer.on_fragment(&full_text);
                    }
                    return Self::complete(state, observer);
                }
                StreamEvent::Error(e) => {
                    return Self::fail(state, GatewayError::StreamFailed(e), observer);
                }
            }
        }
        debug!("Stream closed without a terminal event");
        Self::complete(state, observer)
    }

    fn complete(state: &mut ChatState, observer: &dyn TranscriptObserver) -> ChatOutcome {
        state.on_complete();
        if let Some(reply) = state.messages().last() {
            info!(bytes = reply.text.len(), "Chat reply complete");
            observer.on_complete(reply);
        }
        ChatOutcome::Completed
    }

    fn fail(
        state: &mut ChatState,
        error: GatewayError,
        observer: &dyn TranscriptObserver,
    ) -> ChatOutcome {
        let partial = state.transcript().is_streaming();
        warn!(partial, "Chat exchange failed: {}", error);
        state.on_error(&error);
        observer.on_error(&error, partial);
        ChatOutcome::Failed(error.kind())
    }
}
