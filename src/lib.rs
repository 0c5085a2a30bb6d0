//! # Trawl
//!
//! A retrieval-augmented research agent in Rust. Given a question, Trawl
//! retrieves candidate documents from a vector index, grades each one for
//! relevance with an LLM, widens the search (paper search, then web search)
//! when documents get rejected, and generates an answer from whatever
//! survives. The control flow is a small state graph with a
//! **state-in, state-out** design: one [`ResearchState`] flows through named
//! nodes, each node returns updated state.
//!
//! ## Design principles
//!
//! - **Single state type**: the research graph threads one [`ResearchState`]
//!   through every node; nodes own the state while they run.
//! - **Pluggable seams**: [`LlmClient`], [`Retriever`], [`RelevanceGrader`],
//!   [`SearchTool`], and [`Embedder`] are traits, so tests swap in mocks and
//!   real deployments swap in backends.
//! - **Explicit routing**: conditional edges read flags the grading nodes
//!   set; no hidden control flow.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`Next`],
//!   [`RetryPolicy`] — build and run state graphs over any state type.
//! - [`agent`]: the research graph nodes and [`ResearchRunner`].
//! - [`state`]: [`ResearchState`] and the [`Step`] audit trail.
//! - [`retrieve`]: [`Retriever`], [`InMemoryVectorIndex`], [`Embedder`],
//!   [`OpenAIEmbedder`].
//! - [`grade`]: [`RelevanceGrader`], [`LlmRelevanceGrader`],
//!   [`grade_documents`].
//! - [`search`]: [`SearchTool`], [`TavilySearch`], [`PaperSearch`].
//! - [`generate`]: [`GenerateChain`].
//! - [`llm`]: [`LlmClient`] trait, [`MockLlm`], [`ChatOpenAI`].
//! - [`config`]: [`ResearchConfig`] and the env-driven assembly helpers.
//!
//! Key types are re-exported at crate root:
//! `use trawl::{ResearchRunner, ResearchState, Document};`
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trawl::{build_research_runner, build_vector_index, Document, ResearchConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ResearchConfig::from_env();
//! let index = Arc::new(build_vector_index(&config));
//! index
//!     .add_documents(&[Document::new("Rust's ownership model prevents data races.")])
//!     .await?;
//!
//! let runner = build_research_runner(&config, index)?;
//! let state = runner.invoke("How does Rust prevent data races?").await?;
//! println!("{}", state.generation.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod document;
pub mod error;
pub mod generate;
pub mod grade;
pub mod graph;
pub mod llm;
pub mod message;
pub mod retrieve;
pub mod search;
pub mod state;

pub use agent::{
    GenerateNode, GradeDocumentsNode, GradedSource, PaperSearchNode, ResearchRunner, RunError,
    VectorStoreRetrieveNode, WebSearchNode,
};
pub use config::{build_research_runner, build_vector_index, ResearchConfig};
pub use document::{Document, METADATA_URL};
pub use error::AgentError;
pub use generate::GenerateChain;
pub use grade::{
    grade_documents, GradeOutcome, LlmRelevanceGrader, RelevanceGrader, RelevanceVerdict,
};
pub use graph::{
    CompilationError, CompiledStateGraph, Next, Node, RetryPolicy, StateGraph, END, START,
};
pub use llm::{ChatOpenAI, LlmClient, MockLlm};
pub use message::Message;
pub use retrieve::{Embedder, InMemoryVectorIndex, IndexError, OpenAIEmbedder, Retriever};
pub use search::{PaperSearch, SearchTool, TavilySearch};
pub use state::{ResearchState, Step};
