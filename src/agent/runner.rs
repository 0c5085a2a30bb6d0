//! Research graph runner: build, wire, invoke.
//!
//! Graph: START → vector_store_retrieve → grade_vector_store_documents →
//! [paper_search | generate]; paper_search → grade_paper_search_documents →
//! [web_search | generate]; web_search → generate → END.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AgentError;
use crate::generate::GenerateChain;
use crate::grade::RelevanceGrader;
use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use crate::llm::LlmClient;
use crate::retrieve::Retriever;
use crate::search::SearchTool;
use crate::state::ResearchState;

use super::nodes::{
    GenerateNode, GradeDocumentsNode, GradedSource, PaperSearchNode, VectorStoreRetrieveNode,
    WebSearchNode,
};

/// Route after vector-store grading: widen to paper search when something was
/// rejected, otherwise answer from what survived.
fn vector_grading_condition(state: &ResearchState) -> &'static str {
    if state.paper_search_performed {
        "paper_search"
    } else {
        "generate"
    }
}

/// Route after paper-search grading: fall back to the web when something was
/// rejected again.
fn paper_grading_condition(state: &ResearchState) -> &'static str {
    if state.web_search_performed {
        "web_search"
    } else {
        "generate"
    }
}

/// Error type for ResearchRunner operations.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("compilation failed: {0}")]
    Compilation(#[from] CompilationError),
    #[error("execution failed: {0}")]
    Execution(#[from] AgentError),
}

/// Research graph runner: encapsulates the compiled graph.
///
/// **Interaction**: built once per component stack; `invoke(prompt)` is safe
/// to call concurrently since each run owns its state.
pub struct ResearchRunner {
    compiled: CompiledStateGraph<ResearchState>,
}

impl ResearchRunner {
    /// Wires and compiles the research graph from its components.
    pub fn new(
        llm: Arc<dyn LlmClient>,
        retriever: Arc<dyn Retriever>,
        grader: Arc<dyn RelevanceGrader>,
        web_search: Arc<dyn SearchTool>,
        paper_search: Arc<dyn SearchTool>,
    ) -> Result<Self, CompilationError> {
        let retrieve = VectorStoreRetrieveNode::new(retriever);
        let grade_vector =
            GradeDocumentsNode::new(Arc::clone(&grader), GradedSource::VectorStore);
        let grade_paper = GradeDocumentsNode::new(grader, GradedSource::PaperSearch);
        let paper = PaperSearchNode::new(paper_search);
        let web = WebSearchNode::new(web_search);
        let generate = GenerateNode::new(GenerateChain::new(llm));

        let vector_path_map: HashMap<String, String> = [
            ("paper_search".into(), "paper_search".into()),
            ("generate".into(), "generate".into()),
        ]
        .into_iter()
        .collect();
        let paper_path_map: HashMap<String, String> = [
            ("web_search".into(), "web_search".into()),
            ("generate".into(), "generate".into()),
        ]
        .into_iter()
        .collect();

        let mut graph = StateGraph::<ResearchState>::new();
        graph
            .add_node("vector_store_retrieve", Arc::new(retrieve))
            .add_node("grade_vector_store_documents", Arc::new(grade_vector))
            .add_node("paper_search", Arc::new(paper))
            .add_node("grade_paper_search_documents", Arc::new(grade_paper))
            .add_node("web_search", Arc::new(web))
            .add_node("generate", Arc::new(generate))
            .add_edge(START, "vector_store_retrieve")
            .add_edge("vector_store_retrieve", "grade_vector_store_documents")
            .add_conditional_edges(
                "grade_vector_store_documents",
                Arc::new(|state: &ResearchState| vector_grading_condition(state).to_string()),
                Some(vector_path_map),
            )
            .add_edge("paper_search", "grade_paper_search_documents")
            .add_conditional_edges(
                "grade_paper_search_documents",
                Arc::new(|state: &ResearchState| paper_grading_condition(state).to_string()),
                Some(paper_path_map),
            )
            .add_edge("web_search", "generate")
            .add_edge("generate", END);

        let compiled = graph.compile()?;
        Ok(Self { compiled })
    }

    /// Runs the full research flow for one prompt.
    pub async fn invoke(&self, prompt: impl Into<String>) -> Result<ResearchState, RunError> {
        let state = ResearchState::new(prompt);
        let final_state = self.compiled.invoke(state).await?;
        Ok(final_state)
    }
}
