//! Research graph nodes.
//!
//! Each node takes the state, updates `resources` / `steps` / flags, and
//! returns it. Routing after the grading nodes happens in the runner's
//! conditional edges, driven by the flags set here.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::AgentError;
use crate::generate::GenerateChain;
use crate::grade::{grade_documents, RelevanceGrader};
use crate::graph::{Next, Node};
use crate::retrieve::Retriever;
use crate::search::SearchTool;
use crate::state::{ResearchState, Step};

/// Fetches candidate documents from the vector index.
///
/// Resets `steps` to a fresh audit trail for this query.
pub struct VectorStoreRetrieveNode {
    retriever: Arc<dyn Retriever>,
}

impl VectorStoreRetrieveNode {
    pub fn new(retriever: Arc<dyn Retriever>) -> Self {
        Self { retriever }
    }
}

#[async_trait]
impl Node<ResearchState> for VectorStoreRetrieveNode {
    fn id(&self) -> &str {
        "vector_store_retrieve"
    }

    async fn run(&self, mut state: ResearchState) -> Result<(ResearchState, Next), AgentError> {
        let documents = self
            .retriever
            .retrieve(&state.prompt)
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("Retrieval failed: {}", e)))?;

        debug!(retrieved = documents.len(), "vector store retrieval");
        state.resources = documents;
        state.steps = vec![Step::VectorStoreRetrieval];
        Ok((state, Next::Continue))
    }
}

/// Which document source a grading node is judging.
///
/// Determines the node id, the audit steps, and which follow-up flag a
/// rejection raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradedSource {
    VectorStore,
    PaperSearch,
}

impl GradedSource {
    fn node_id(self) -> &'static str {
        match self {
            GradedSource::VectorStore => "grade_vector_store_documents",
            GradedSource::PaperSearch => "grade_paper_search_documents",
        }
    }

    fn grade_step(self) -> Step {
        match self {
            GradedSource::VectorStore => Step::VectorStoreGradeDocs,
            GradedSource::PaperSearch => Step::PaperSearchGradeDocs,
        }
    }

    fn evaluation_step(self) -> Step {
        match self {
            GradedSource::VectorStore => Step::VectorStoreEvaluation,
            GradedSource::PaperSearch => Step::PaperSearchEvaluation,
        }
    }
}

/// Grades the current resources and drops the irrelevant ones.
///
/// When any document is rejected, sets the follow-up flag for this source
/// (`paper_search_performed` after vector grading, `web_search_performed`
/// after paper grading) and appends the matching evaluation step.
pub struct GradeDocumentsNode {
    grader: Arc<dyn RelevanceGrader>,
    source: GradedSource,
}

impl GradeDocumentsNode {
    pub fn new(grader: Arc<dyn RelevanceGrader>, source: GradedSource) -> Self {
        Self { grader, source }
    }
}

#[async_trait]
impl Node<ResearchState> for GradeDocumentsNode {
    fn id(&self) -> &str {
        self.source.node_id()
    }

    async fn run(&self, mut state: ResearchState) -> Result<(ResearchState, Next), AgentError> {
        state.steps.push(self.source.grade_step());

        let documents = std::mem::take(&mut state.resources);
        let outcome = grade_documents(self.grader.as_ref(), &state.prompt, documents).await?;

        if outcome.rejected_any {
            match self.source {
                GradedSource::VectorStore => state.paper_search_performed = true,
                GradedSource::PaperSearch => state.web_search_performed = true,
            }
            state.steps.push(self.source.evaluation_step());
        }

        debug!(
            source = ?self.source,
            kept = outcome.kept.len(),
            rejected_any = outcome.rejected_any,
            "grading complete"
        );
        state.resources = outcome.kept;
        Ok((state, Next::Continue))
    }
}

/// Extends resources with paper-search results.
pub struct PaperSearchNode {
    tool: Arc<dyn SearchTool>,
}

impl PaperSearchNode {
    pub fn new(tool: Arc<dyn SearchTool>) -> Self {
        Self { tool }
    }
}

#[async_trait]
impl Node<ResearchState> for PaperSearchNode {
    fn id(&self) -> &str {
        "paper_search"
    }

    async fn run(&self, mut state: ResearchState) -> Result<(ResearchState, Next), AgentError> {
        let results = self.tool.search(&state.prompt).await?;
        debug!(hits = results.len(), "paper search");
        state.resources.extend(results);
        Ok((state, Next::Continue))
    }
}

/// Replaces resources with web-search results.
pub struct WebSearchNode {
    tool: Arc<dyn SearchTool>,
}

impl WebSearchNode {
    pub fn new(tool: Arc<dyn SearchTool>) -> Self {
        Self { tool }
    }
}

#[async_trait]
impl Node<ResearchState> for WebSearchNode {
    fn id(&self) -> &str {
        "web_search"
    }

    async fn run(&self, mut state: ResearchState) -> Result<(ResearchState, Next), AgentError> {
        let results = self.tool.search(&state.prompt).await?;
        debug!(hits = results.len(), "web search");
        state.resources = results;
        state.steps.push(Step::WebSearchRetrieval);
        Ok((state, Next::Continue))
    }
}

/// Generates the final answer from the surviving resources.
pub struct GenerateNode {
    chain: GenerateChain,
}

impl GenerateNode {
    pub fn new(chain: GenerateChain) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl Node<ResearchState> for GenerateNode {
    fn id(&self) -> &str {
        "generate"
    }

    async fn run(&self, mut state: ResearchState) -> Result<(ResearchState, Next), AgentError> {
        let answer = self.chain.generate(&state.prompt, &state.resources).await?;
        state.generation = Some(answer);
        state.steps.push(Step::LlmGeneration);
        Ok((state, Next::Continue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::grade::RelevanceVerdict;
    use crate::llm::MockLlm;
    use crate::retrieve::IndexError;

    struct FixedRetriever(Vec<Document>);

    #[async_trait]
    impl Retriever for FixedRetriever {
        async fn retrieve(&self, _query: &str) -> Result<Vec<Document>, IndexError> {
            Ok(self.0.clone())
        }
    }

    /// Grades relevant iff the content contains "keep".
    struct KeywordGrader;

    #[async_trait]
    impl RelevanceGrader for KeywordGrader {
        async fn grade(
            &self,
            _prompt: &str,
            document: &Document,
        ) -> Result<RelevanceVerdict, AgentError> {
            Ok(if document.page_content.contains("keep") {
                RelevanceVerdict::Relevant
            } else {
                RelevanceVerdict::NotRelevant
            })
        }
    }

    struct FixedSearch(Vec<Document>);

    #[async_trait]
    impl SearchTool for FixedSearch {
        async fn search(&self, _query: &str) -> Result<Vec<Document>, AgentError> {
            Ok(self.0.clone())
        }
    }

    /// **Scenario**: retrieval replaces resources and resets the audit trail.
    #[tokio::test]
    async fn retrieve_node_resets_steps() {
        let node = VectorStoreRetrieveNode::new(Arc::new(FixedRetriever(vec![Document::new(
            "doc",
        )])));
        let mut state = ResearchState::new("question");
        state.steps.push(Step::LlmGeneration);

        let (state, _) = node.run(state).await.unwrap();
        assert_eq!(state.resources.len(), 1);
        assert_eq!(state.steps, vec![Step::VectorStoreRetrieval]);
    }

    /// **Scenario**: vector grading with a rejection sets the paper-search flag
    /// and records grade + evaluation steps.
    #[tokio::test]
    async fn grade_node_sets_flag_on_rejection() {
        let node = GradeDocumentsNode::new(Arc::new(KeywordGrader), GradedSource::VectorStore);
        let mut state = ResearchState::new("question");
        state.resources = vec![Document::new("keep this"), Document::new("drop this")];

        let (state, _) = node.run(state).await.unwrap();
        assert_eq!(state.resources.len(), 1);
        assert_eq!(state.resources[0].page_content, "keep this");
        assert!(state.paper_search_performed);
        assert!(!state.web_search_performed);
        assert_eq!(
            state.steps,
            vec![Step::VectorStoreGradeDocs, Step::VectorStoreEvaluation]
        );
    }

    /// **Scenario**: grading with everything kept leaves the flags unset.
    #[tokio::test]
    async fn grade_node_keeps_flags_when_all_relevant() {
        let node = GradeDocumentsNode::new(Arc::new(KeywordGrader), GradedSource::PaperSearch);
        let mut state = ResearchState::new("question");
        state.resources = vec![Document::new("keep a"), Document::new("keep b")];

        let (state, _) = node.run(state).await.unwrap();
        assert_eq!(state.resources.len(), 2);
        assert!(!state.web_search_performed);
        assert_eq!(state.steps, vec![Step::PaperSearchGradeDocs]);
    }

    /// **Scenario**: paper search extends resources; web search replaces them.
    #[tokio::test]
    async fn search_nodes_extend_and_replace() {
        let mut state = ResearchState::new("question");
        state.resources = vec![Document::new("existing")];

        let paper = PaperSearchNode::new(Arc::new(FixedSearch(vec![Document::new("paper")])));
        let (state, _) = paper.run(state).await.unwrap();
        assert_eq!(state.resources.len(), 2);

        let web = WebSearchNode::new(Arc::new(FixedSearch(vec![Document::with_url(
            "web hit",
            "https://example.com",
        )])));
        let (state, _) = web.run(state).await.unwrap();
        assert_eq!(state.resources.len(), 1);
        assert_eq!(state.resources[0].url(), Some("https://example.com"));
        assert_eq!(state.steps.last(), Some(&Step::WebSearchRetrieval));
    }

    /// **Scenario**: generation stores the answer and appends its step.
    #[tokio::test]
    async fn generate_node_sets_generation() {
        let node = GenerateNode::new(GenerateChain::new(Arc::new(MockLlm::new("answer"))));
        let mut state = ResearchState::new("question");
        state.resources = vec![Document::new("context")];

        let (state, _) = node.run(state).await.unwrap();
        assert_eq!(state.generation.as_deref(), Some("answer"));
        assert_eq!(state.steps.last(), Some(&Step::LlmGeneration));
    }
}
