//! Scripted gateway doubles shared by the use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession, StreamHandle};
use async_trait::async_trait;
use quill_domain::{ConversationContext, GenerationConfig, Message, Model, StreamEvent};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// What a single request observed: the context turns and the message text.
pub(crate) type SentRequest = (Vec<Message>, String);

#[derive(Default)]
pub(crate) struct Script {
    streams: Mutex<VecDeque<Result<Vec<StreamEvent>, GatewayError>>>,
    one_shot: Mutex<VecDeque<Result<String, GatewayError>>>,
    session_failures: Mutex<usize>,
    sessions_created: Mutex<usize>,
    sent: Mutex<Vec<SentRequest>>,
    configs: Mutex<Vec<GenerationConfig>>,
}

pub(crate) struct MockGateway {
    script: Arc<Script>,
}

impl MockGateway {
    pub(crate) fn new() -> Self {
        Self {
            script: Arc::new(Script::default()),
        }
    }

    pub(crate) fn with_stream(self, events: Vec<StreamEvent>) -> Self {
        self.script.streams.lock().unwrap().push_back(Ok(events));
        self
    }

    pub(crate) fn with_stream_failure(self, error: GatewayError) -> Self {
        self.script.streams.lock().unwrap().push_back(Err(error));
        self
    }

    pub(crate) fn with_one_shot(self, result: Result<String, GatewayError>) -> Self {
        self.script.one_shot.lock().unwrap().push_back(result);
        self
    }

    pub(crate) fn with_session_failures(self, count: usize) -> Self {
        *self.script.session_failures.lock().unwrap() = count;
        self
    }

    pub(crate) fn sessions_created(&self) -> usize {
        *self.script.sessions_created.lock().unwrap()
    }

    pub(crate) fn sent(&self) -> Vec<SentRequest> {
        self.script.sent.lock().unwrap().clone()
    }

    pub(crate) fn configs(&self) -> Vec<GenerationConfig> {
        self.script.configs.lock().unwrap().clone()
    }
}

/// A stream handle that yields `events` in order, then closes.
pub(crate) async fn replay(events: Vec<StreamEvent>) -> StreamHandle {
    let (tx, rx) = mpsc::channel(events.len().max(1));
    for event in events {
        tx.send(event).await.unwrap();
    }
    StreamHandle::new(rx)
}

struct MockSession {
    model: Model,
    script: Arc<Script>,
}

#[async_trait]
impl LlmSession for MockSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send_streaming(
        &self,
        context: &ConversationContext,
        content: &str,
    ) -> Result<StreamHandle, GatewayError> {
        self.script
            .sent
            .lock()
            .unwrap()
            .push((context.turns().to_vec(), content.to_string()));
        let next = self
            .script
            .streams
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())));
        match next {
            Ok(events) => Ok(replay(events).await),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn create_session(
        &self,
        model: &Model,
        config: &GenerationConfig,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        {
            let mut failures = self.script.session_failures.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(GatewayError::SessionError("service unavailable".to_string()));
            }
        }
        *self.script.sessions_created.lock().unwrap() += 1;
        self.script.configs.lock().unwrap().push(config.clone());
        Ok(Box::new(MockSession {
            model: model.clone(),
            script: Arc::clone(&self.script),
        }))
    }

    async fn generate_once(
        &self,
        _model: &Model,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GatewayError> {
        self.script
            .sent
            .lock()
            .unwrap()
            .push((Vec::new(), prompt.to_string()));
        self.script.configs.lock().unwrap().push(config.clone());
        self.script
            .one_shot
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        Ok(vec![])
    }
}
