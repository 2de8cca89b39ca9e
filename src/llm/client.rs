//! Core LLM client trait and test double

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, SwitchboardError};
use crate::llm::types::{CompletionRequest, CompletionResponse, Usage};

/// Client for a hosted chat-completions endpoint
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single completion request (blocking until complete)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Configured model identifier
    fn model(&self) -> &str;

    /// Whether the client can make calls (API key present)
    fn is_ready(&self) -> bool;

    /// Cumulative token usage across all calls
    fn total_usage(&self) -> Usage {
        Usage::default()
    }
}

/// Scripted client for tests: returns queued responses in order
pub struct MockLlmClient {
    responses: Mutex<VecDeque<CompletionResponse>>,
    model: String,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            model: "mock-model".to_string(),
        }
    }

    /// Create a mock pre-loaded with responses
    pub fn with_responses(responses: Vec<CompletionResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            model: "mock-model".to_string(),
        }
    }

    /// Queue a response
    pub fn push_response(&self, response: CompletionResponse) {
        self.responses.lock().unwrap().push_back(response);
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SwitchboardError::Llm("mock has no queued response".to_string()))
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_ready(&self) -> bool {
        true
    }
}
