//! Answer generation from graded documents.
//!
//! Formats the surviving documents as a numbered list and asks the chat model
//! to answer the question from them. An empty document list still produces an
//! answer; the model is told nothing was found.

use std::sync::Arc;

use tracing::debug;

use crate::document::Document;
use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;

const GENERATE_SYSTEM_PROMPT: &str = "You are a research assistant. Answer \
the user's question using the provided documents. Base the answer on the \
documents where possible and say so when they do not cover the question.";

const NO_DOCUMENTS_NOTICE: &str =
    "No supporting documents were found for this question.";

/// Default sampling temperature for generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Chat-model answer generator.
///
/// **Interaction**: the generate node calls
/// [`generate`](GenerateChain::generate) with the state's prompt and final
/// `resources`.
pub struct GenerateChain {
    llm: Arc<dyn LlmClient>,
}

impl GenerateChain {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Formats documents as a numbered list, one entry per document.
    fn format_context(documents: &[Document]) -> String {
        if documents.is_empty() {
            return NO_DOCUMENTS_NOTICE.to_string();
        }

        let mut context = String::new();
        for (i, document) in documents.iter().enumerate() {
            context.push_str(&format!("{}. {}", i + 1, document.page_content));
            if let Some(url) = document.url() {
                context.push_str(&format!(" (source: {})", url));
            }
            context.push('\n');
        }
        context
    }

    /// Generates an answer to `prompt` conditioned on `documents`.
    pub async fn generate(
        &self,
        prompt: &str,
        documents: &[Document],
    ) -> Result<String, AgentError> {
        let context = Self::format_context(documents);
        let user = format!("Documents:\n{}\nQuestion: {}", context, prompt);
        let messages = [Message::system(GENERATE_SYSTEM_PROMPT), Message::user(user)];

        debug!(document_count = documents.len(), "generating answer");
        self.llm.invoke(&messages).await
    }
}
