//! LLM-based document relevance grading.
//!
//! Each retrieved document is graded against the user's question with one LLM
//! call; the model answers a binary JSON verdict `{"score": "yes"|"no"}`.
//! [`grade_documents`] partitions a document list into the kept documents and
//! a flag saying whether anything was rejected, which the research graph uses
//! to decide on fallback searches.
//!
//! **Interaction**: `LlmRelevanceGrader` wraps an [`LlmClient`]; the grading
//! nodes call [`grade_documents`] and route on `rejected_any`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::document::Document;
use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;

/// System prompt instructing the model to grade one document.
const GRADER_SYSTEM_PROMPT: &str = "You are a grader assessing the relevance \
of a retrieved document to a user question. If the document contains keywords \
or semantic meaning related to the question, grade it as relevant. Respond \
with a JSON object with a single key \"score\" whose value is \"yes\" or \
\"no\", and no other text.";

/// Binary relevance verdict for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceVerdict {
    Relevant,
    NotRelevant,
}

impl RelevanceVerdict {
    pub fn is_relevant(self) -> bool {
        matches!(self, RelevanceVerdict::Relevant)
    }
}

/// Grades one document against a question.
///
/// **Interaction**: held as `Arc<dyn RelevanceGrader>` by the grading nodes;
/// tests substitute a canned implementation.
#[async_trait]
pub trait RelevanceGrader: Send + Sync {
    async fn grade(
        &self,
        prompt: &str,
        document: &Document,
    ) -> Result<RelevanceVerdict, AgentError>;
}

/// Result of grading a document list.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeOutcome {
    /// Documents graded relevant, in their original relative order.
    pub kept: Vec<Document>,
    /// True when at least one document was graded not relevant.
    pub rejected_any: bool,
}

/// Grades each document in turn, one LLM call per document.
///
/// Rejected documents are dropped silently; the kept documents preserve their
/// input order.
pub async fn grade_documents(
    grader: &dyn RelevanceGrader,
    prompt: &str,
    documents: Vec<Document>,
) -> Result<GradeOutcome, AgentError> {
    let total = documents.len();
    let mut kept = Vec::with_capacity(total);
    let mut rejected_any = false;

    for document in documents {
        if grader.grade(prompt, &document).await?.is_relevant() {
            kept.push(document);
        } else {
            rejected_any = true;
        }
    }

    debug!(total, kept = kept.len(), rejected_any, "documents graded");
    Ok(GradeOutcome { kept, rejected_any })
}

#[derive(Deserialize)]
struct ScoreVerdict {
    score: String,
}

/// Grades documents by asking a chat model for a JSON verdict.
pub struct LlmRelevanceGrader {
    llm: Arc<dyn LlmClient>,
}

impl LlmRelevanceGrader {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Parses the model's reply into a verdict.
    ///
    /// Accepts a `{"score": ...}` JSON object (possibly inside a code fence
    /// or surrounding prose) or a bare yes/no. Anything else counts as not
    /// relevant.
    fn parse_verdict(response: &str) -> RelevanceVerdict {
        if let Some(score) = Self::extract_score(response) {
            return if score.trim().eq_ignore_ascii_case("yes") {
                RelevanceVerdict::Relevant
            } else {
                RelevanceVerdict::NotRelevant
            };
        }

        let trimmed = response.trim().trim_matches(|c: char| !c.is_alphanumeric());
        if trimmed.eq_ignore_ascii_case("yes") {
            RelevanceVerdict::Relevant
        } else {
            if !trimmed.eq_ignore_ascii_case("no") {
                warn!(response_len = response.len(), "unparseable grader reply, treating as not relevant");
            }
            RelevanceVerdict::NotRelevant
        }
    }

    /// Extracts the `score` field from the first JSON object in the reply.
    fn extract_score(response: &str) -> Option<String> {
        let start = response.find('{')?;
        let end = response.rfind('}')?;
        if end <= start {
            return None;
        }
        serde_json::from_str::<ScoreVerdict>(&response[start..=end])
            .ok()
            .map(|v| v.score)
    }
}

#[async_trait]
impl RelevanceGrader for LlmRelevanceGrader {
    async fn grade(
        &self,
        prompt: &str,
        document: &Document,
    ) -> Result<RelevanceVerdict, AgentError> {
        let user = format!(
            "Retrieved document:\n\n{}\n\nUser question: {}",
            document.page_content, prompt
        );
        let messages = [Message::system(GRADER_SYSTEM_PROMPT), Message::user(user)];

        let response = self.llm.invoke(&messages).await?;
        let verdict = Self::parse_verdict(&response);
        debug!(?verdict, "document graded");
        Ok(verdict)
    }
}
