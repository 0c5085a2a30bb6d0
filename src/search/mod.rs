//! Fallback document sources: web search and paper search.
//!
//! When grading rejects retrieved documents, the research graph widens the
//! net through these adapters. Both sit behind [`SearchTool`] so the graph
//! nodes never care which backend answered.

mod paper;
mod tavily;

pub use paper::PaperSearch;
pub use tavily::{TavilySearch, DEFAULT_MAX_RESULTS};

use async_trait::async_trait;

use crate::document::Document;
use crate::error::AgentError;

/// Turns a query into documents from an external source.
///
/// **Interaction**: the web-search and paper-search nodes hold this as
/// `Arc<dyn SearchTool>`; tests substitute canned implementations.
#[async_trait]
pub trait SearchTool: Send + Sync {
    /// Runs the query and returns result documents (possibly empty).
    async fn search(&self, query: &str) -> Result<Vec<Document>, AgentError>;
}
