//! LLM client abstraction for the grader and generate chain.
//!
//! Both callers need the same thing: send a short message list, get the
//! assistant's text back. No tool calling or streaming in this agent.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

/// LLM client: given messages, returns the assistant's reply text.
///
/// Implementations: [`MockLlm`] (fixed or scripted responses, for tests) and
/// [`ChatOpenAI`] (real Chat Completions API).
///
/// **Interaction**: used by `LlmRelevanceGrader` (one call per graded
/// document) and `GenerateChain` (one call per answer).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one completion: read messages, return assistant content.
    async fn invoke(&self, messages: &[Message]) -> Result<String, AgentError>;
}
