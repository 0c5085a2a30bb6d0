//! Integration tests: the full research flow from prompt to generation.
//!
//! Uses the in-memory vector index with a deterministic embedder and a
//! scripted mock LLM shared by grader and generator; no real APIs.


use std::sync::Arc;

use async_trait::async_trait;

use trawl::{
    AgentError, Document, Embedder, InMemoryVectorIndex, IndexError, LlmRelevanceGrader, MockLlm,
    PaperSearch, ResearchRunner, SearchTool, Step,
};

/// Deterministic embedder: byte histogram folded into a fixed dimension.
struct HashEmbedder;

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, IndexError> {
        Ok(texts
            .iter()
            .map(|t| {
                let mut v = vec![0f32; 64];
                for (i, b) in t.bytes().enumerate() {
                    v[i % 64] += b as f32 / 256.0;
                }
                v
            })
            .collect())
    }

    fn dimension(&self) -> usize {
        64
    }
}

struct NoopSearch;

#[async_trait]
impl SearchTool for NoopSearch {
    async fn search(&self, _query: &str) -> Result<Vec<Document>, AgentError> {
        Ok(Vec::new())
    }
}

async fn indexed_retriever(contents: &[&str]) -> Arc<InMemoryVectorIndex> {
    let index = Arc::new(InMemoryVectorIndex::with_top_k(Arc::new(HashEmbedder), 3));
    let documents: Vec<Document> = contents.iter().map(|c| Document::new(*c)).collect();
    index.add_documents(&documents).await.unwrap();
    index
}

/// Retrieval with 3 indexed docs, 2 graded relevant: the kept documents feed
/// generation, the audit trail records retrieval then grading, and the
/// rejection routes through paper search before answering.
#[tokio::test]
async fn three_retrieved_two_kept_generates_from_survivors() {
    let retriever = indexed_retriever(&[
        "Rust ownership and borrowing",
        "Rust lifetimes explained",
        "A recipe for sourdough bread",
    ])
    .await;

    // Script: 3 grading verdicts for the vector docs, 2 for the re-graded
    // survivors after the (empty) paper search, then the final answer.
    let llm = Arc::new(MockLlm::with_responses(vec![
        r#"{"score": "yes"}"#.into(),
        r#"{"score": "yes"}"#.into(),
        r#"{"score": "no"}"#.into(),
        r#"{"score": "yes"}"#.into(),
        r#"{"score": "yes"}"#.into(),
        "Ownership and lifetimes keep references valid.".into(),
    ]));
    let grader = Arc::new(LlmRelevanceGrader::new(llm.clone()));

    let runner = ResearchRunner::new(
        llm,
        retriever,
        grader,
        Arc::new(NoopSearch),
        Arc::new(PaperSearch::new()),
    )
    .unwrap();

    let out = runner.invoke("How do Rust lifetimes work?").await.unwrap();

    assert_eq!(
        out.generation.as_deref(),
        Some("Ownership and lifetimes keep references valid.")
    );
    assert_eq!(out.resources.len(), 2);
    assert!(out.paper_search_performed);
    assert!(!out.web_search_performed);
    assert_eq!(out.steps[0], Step::VectorStoreRetrieval);
    assert_eq!(out.steps[1], Step::VectorStoreGradeDocs);
    assert_eq!(out.steps.last(), Some(&Step::LlmGeneration));
}

/// All documents relevant: no fallback searches, steps end with generation.
#[tokio::test]
async fn all_relevant_goes_straight_to_generation() {
    let retriever = indexed_retriever(&["Rust ownership", "Rust lifetimes"]).await;

    let llm = Arc::new(MockLlm::with_responses(vec![
        r#"{"score": "yes"}"#.into(),
        r#"{"score": "yes"}"#.into(),
        "Answer.".into(),
    ]));
    let grader = Arc::new(LlmRelevanceGrader::new(llm.clone()));

    let runner = ResearchRunner::new(
        llm,
        retriever,
        grader,
        Arc::new(NoopSearch),
        Arc::new(PaperSearch::new()),
    )
    .unwrap();

    let out = runner.invoke("Rust?").await.unwrap();

    assert_eq!(out.generation.as_deref(), Some("Answer."));
    assert!(!out.paper_search_performed);
    assert!(!out.web_search_performed);
    assert_eq!(
        out.steps,
        vec![
            Step::VectorStoreRetrieval,
            Step::VectorStoreGradeDocs,
            Step::LlmGeneration
        ]
    );
}

/// Web search returning nothing still yields a non-error generation: the
/// model is asked to answer without supporting documents.
#[tokio::test]
async fn empty_web_search_still_generates() {
    struct RejectingPaper;

    #[async_trait]
    impl SearchTool for RejectingPaper {
        async fn search(&self, _query: &str) -> Result<Vec<Document>, AgentError> {
            Ok(vec![Document::new("an unrelated paper abstract")])
        }
    }

    let retriever = indexed_retriever(&["completely unrelated content"]).await;

    // Script: reject the vector doc, reject the paper doc, then answer.
    let llm = Arc::new(MockLlm::with_responses(vec![
        r#"{"score": "no"}"#.into(),
        r#"{"score": "no"}"#.into(),
        "I could not find supporting documents.".into(),
    ]));
    let grader = Arc::new(LlmRelevanceGrader::new(llm.clone()));

    let runner = ResearchRunner::new(
        llm,
        retriever,
        grader,
        Arc::new(NoopSearch),
        Arc::new(RejectingPaper),
    )
    .unwrap();

    let out = runner.invoke("An unanswerable question").await.unwrap();

    assert_eq!(
        out.generation.as_deref(),
        Some("I could not find supporting documents.")
    );
    assert!(out.resources.is_empty());
    assert!(out.paper_search_performed);
    assert!(out.web_search_performed);
    assert_eq!(
        out.steps,
        vec![
            Step::VectorStoreRetrieval,
            Step::VectorStoreGradeDocs,
            Step::VectorStoreEvaluation,
            Step::PaperSearchGradeDocs,
            Step::PaperSearchEvaluation,
            Step::WebSearchRetrieval,
            Step::LlmGeneration
        ]
    );
}
