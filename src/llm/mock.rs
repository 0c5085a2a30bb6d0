//! Mock LLM for tests.
//!
//! Returns a fixed reply, or a scripted sequence of replies so a test can
//! drive one grading verdict per document followed by a generated answer.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;

/// Mock LLM: fixed or scripted assistant replies.
///
/// With a script, each `invoke` returns the next entry; once exhausted, the
/// last entry repeats. Useful for grading tests where call N is the verdict
/// for document N.
///
/// **Interaction**: implements [`LlmClient`]; drop-in for `ChatOpenAI`.
pub struct MockLlm {
    responses: Vec<String>,
    call_count: AtomicUsize,
}

impl MockLlm {
    /// Mock that always returns `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            responses: vec![content.into()],
            call_count: AtomicUsize::new(0),
        }
    }

    /// Mock that returns each response in turn, repeating the last.
    ///
    /// Panics if `responses` is empty (a silent empty mock hides test bugs).
    pub fn with_responses(responses: Vec<String>) -> Self {
        assert!(!responses.is_empty(), "MockLlm needs at least one response");
        Self {
            responses,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Number of `invoke` calls so far.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, _messages: &[Message]) -> Result<String, AgentError> {
        let n = self.call_count.fetch_add(1, Ordering::SeqCst);
        let idx = n.min(self.responses.len() - 1);
        Ok(self.responses[idx].clone())
    }
}
