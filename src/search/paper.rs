//! Paper search stub.

use async_trait::async_trait;

use crate::document::Document;
use crate::error::AgentError;
use crate::search::SearchTool;

/// Academic paper search.
///
/// Currently a no-op returning no results; kept as the seam where a real
/// paper index (arXiv, Semantic Scholar) plugs in. The research graph still
/// grades whatever this returns, so wiring a backend needs no graph changes.
#[derive(Debug, Default, Clone)]
pub struct PaperSearch;

impl PaperSearch {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SearchTool for PaperSearch {
    async fn search(&self, query: &str) -> Result<Vec<Document>, AgentError> {
        tracing::debug!(query_len = query.len(), "paper search not configured, returning no results");
        Ok(Vec::new())
    }
}
