//! Tavily web search client.
//!
//! POSTs a JSON query to the Tavily search API and maps each hit to a
//! [`Document`] carrying its source URL in metadata. The base URL is
//! overridable so tests can point it at a local mock server.
//!
//! Requires a Tavily API key (`TAVILY_API_KEY` when built from env config).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::Document;
use crate::error::AgentError;
use crate::search::SearchTool;

const TAVILY_API_BASE: &str = "https://api.tavily.com";

/// Default number of web results per query.
pub const DEFAULT_MAX_RESULTS: usize = 3;

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    #[serde(default)]
    content: String,
    #[serde(default)]
    url: String,
}

/// Web search via the Tavily API.
pub struct TavilySearch {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    max_results: usize,
}

impl TavilySearch {
    /// Creates a client for the public Tavily endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: TAVILY_API_BASE.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Overrides the API base URL (local mock servers, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the maximum number of results per query.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[async_trait]
impl SearchTool for TavilySearch {
    async fn search(&self, query: &str) -> Result<Vec<Document>, AgentError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let request = SearchRequest {
            api_key: &self.api_key,
            query,
            max_results: self.max_results,
        };

        debug!(query_len = query.len(), max_results = self.max_results, "web search");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("Web search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::ExecutionFailed(format!(
                "Web search returned {}: {}",
                status, body
            )));
        }

        let parsed: SearchResponse = response.json().await.map_err(|e| {
            AgentError::ExecutionFailed(format!("Web search response parse failed: {}", e))
        })?;

        let documents: Vec<Document> = parsed
            .results
            .into_iter()
            .map(|hit| Document::with_url(hit.content, hit.url))
            .collect();

        debug!(hits = documents.len(), "web search complete");
        Ok(documents)
    }
}
