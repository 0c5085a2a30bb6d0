//! Graph state for the research agent.
//!
//! One `ResearchState` is created per user query, flows through every node
//! (state-in, state-out), and is discarded after the final answer is read.
//! `steps` is an append-only audit trail of which nodes ran, in order.

use crate::document::Document;

/// Label of an executed research-graph node.
///
/// Appended to `ResearchState::steps` in execution order and never removed.
/// String form (`as_str`) is the stable label used in logs and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Similarity search against the vector index.
    VectorStoreRetrieval,
    /// Per-document grading of vector-store results.
    VectorStoreGradeDocs,
    /// Per-document grading of paper-search results.
    PaperSearchGradeDocs,
    /// Vector-store grading rejected at least one document (fallback queued).
    VectorStoreEvaluation,
    /// Paper-search grading rejected at least one document (fallback queued).
    PaperSearchEvaluation,
    /// Web search replaced the resource list.
    WebSearchRetrieval,
    /// Final answer generation.
    LlmGeneration,
}

impl Step {
    /// Stable string label for this step.
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::VectorStoreRetrieval => "vector_store_retrieval",
            Step::VectorStoreGradeDocs => "vector_store_grade_docs",
            Step::PaperSearchGradeDocs => "paper_search_grade_docs",
            Step::VectorStoreEvaluation => "vector_store_evaluation",
            Step::PaperSearchEvaluation => "paper_search_evaluation",
            Step::WebSearchRetrieval => "web_search_retrieval",
            Step::LlmGeneration => "llm_generation",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State threaded through the research graph.
///
/// **Lifecycle**: built once per query by `ResearchState::new`, moved through
/// nodes by the compiled graph, returned from `invoke` with `generation` set.
/// There is no cross-request shared state.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ResearchState {
    /// The user's question.
    pub prompt: String,
    /// Current candidate documents (replaced or filtered as nodes run).
    pub resources: Vec<Document>,
    /// Final answer once the generate node has run.
    pub generation: Option<String>,
    /// Audit trail of executed steps; append-only.
    pub steps: Vec<Step>,
    /// Set when vector-store grading rejected documents and paper search was queued.
    pub paper_search_performed: bool,
    /// Set when paper-search grading rejected documents and web search was queued.
    pub web_search_performed: bool,
}

impl ResearchState {
    /// Creates the initial state for one query.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: new() stores the prompt and starts with empty resources/steps and clear flags.
    #[test]
    fn new_state_is_empty_apart_from_prompt() {
        let state = ResearchState::new("What is photosynthesis?");
        assert_eq!(state.prompt, "What is photosynthesis?");
        assert!(state.resources.is_empty());
        assert!(state.generation.is_none());
        assert!(state.steps.is_empty());
        assert!(!state.paper_search_performed);
        assert!(!state.web_search_performed);
    }

    /// **Scenario**: step labels match the stable audit-trail strings.
    #[test]
    fn step_labels_are_stable() {
        assert_eq!(Step::VectorStoreRetrieval.as_str(), "vector_store_retrieval");
        assert_eq!(Step::VectorStoreGradeDocs.as_str(), "vector_store_grade_docs");
        assert_eq!(Step::WebSearchRetrieval.as_str(), "web_search_retrieval");
        assert_eq!(Step::LlmGeneration.as_str(), "llm_generation");
        assert_eq!(Step::LlmGeneration.to_string(), "llm_generation");
    }

    /// **Scenario**: Step serializes to its snake_case label.
    #[test]
    fn step_serializes_to_snake_case() {
        let json = serde_json::to_string(&Step::VectorStoreGradeDocs).unwrap();
        assert_eq!(json, "\"vector_store_grade_docs\"");
    }
}
