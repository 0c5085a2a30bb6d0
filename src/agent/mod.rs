//! The research agent: graph nodes over [`ResearchState`](crate::state::ResearchState)
//! and the runner that wires them.
//!
//! Flow: vector-store retrieval, per-document grading, optional paper-search
//! fallback with its own grading, optional web-search fallback, then answer
//! generation. Conditional edges read the flags the grading nodes set.

mod nodes;
mod runner;

pub use nodes::{
    GenerateNode, GradeDocumentsNode, GradedSource, PaperSearchNode, VectorStoreRetrieveNode,
    WebSearchNode,
};
pub use runner::{ResearchRunner, RunError};
