//! Environment-driven configuration for the OpenAI-backed stack.
//!
//! `.env` is loaded first (dotenv), then individual variables. Tests bypass
//! this entirely by constructing components with explicit config.

use std::sync::Arc;

use async_openai::config::OpenAIConfig;

use crate::agent::ResearchRunner;
use crate::generate::DEFAULT_TEMPERATURE;
use crate::grade::LlmRelevanceGrader;
use crate::graph::CompilationError;
use crate::llm::ChatOpenAI;
use crate::retrieve::{InMemoryVectorIndex, OpenAIEmbedder, Retriever, DEFAULT_TOP_K};
use crate::search::{PaperSearch, TavilySearch, DEFAULT_MAX_RESULTS};

/// Configuration for building the research agent.
#[derive(Clone, Debug)]
pub struct ResearchConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub model: String,
    pub embedding_model: String,
    pub tavily_api_key: Option<String>,
    pub top_k: usize,
    pub temperature: f32,
    pub max_web_results: usize,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: None,
            model: "gpt-4o-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            tavily_api_key: None,
            top_k: DEFAULT_TOP_K,
            temperature: DEFAULT_TEMPERATURE,
            max_web_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl ResearchConfig {
    /// Builds config from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::default();
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            model: std::env::var("MODEL")
                .or_else(|_| std::env::var("OPENAI_MODEL"))
                .unwrap_or(defaults.model),
            embedding_model: std::env::var("EMBEDDING_MODEL").unwrap_or(defaults.embedding_model),
            tavily_api_key: std::env::var("TAVILY_API_KEY").ok(),
            top_k: std::env::var("TOP_K")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.top_k),
            temperature: std::env::var("TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.temperature),
            max_web_results: std::env::var("MAX_WEB_RESULTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_web_results),
        }
    }

    /// OpenAI client config from this config's key and base URL.
    pub fn openai_config(&self) -> OpenAIConfig {
        let mut config = OpenAIConfig::new();
        if let Some(ref key) = self.openai_api_key {
            config = config.with_api_key(key);
        }
        if let Some(ref base) = self.openai_base_url {
            config = config.with_api_base(base);
        }
        config
    }
}

/// Builds an empty OpenAI-embedded vector index from this config.
///
/// Callers index their corpus with
/// [`add_documents`](InMemoryVectorIndex::add_documents) before running
/// queries.
pub fn build_vector_index(config: &ResearchConfig) -> InMemoryVectorIndex {
    let embedder = Arc::new(OpenAIEmbedder::with_config(
        config.openai_config(),
        config.embedding_model.clone(),
    ));
    InMemoryVectorIndex::with_top_k(embedder, config.top_k)
}

/// Assembles an OpenAI-backed [`ResearchRunner`] around the given retriever.
///
/// The retriever is passed in so the caller controls what gets indexed (and
/// with which embedder); everything else comes from the config.
pub fn build_research_runner(
    config: &ResearchConfig,
    retriever: Arc<dyn Retriever>,
) -> Result<ResearchRunner, CompilationError> {
    let llm = Arc::new(
        ChatOpenAI::with_config(config.openai_config(), config.model.clone())
            .with_temperature(config.temperature),
    );
    let grader = Arc::new(LlmRelevanceGrader::new(Arc::new(
        ChatOpenAI::with_config(config.openai_config(), config.model.clone())
            .with_temperature(0.0),
    )));
    let web_search = Arc::new(
        TavilySearch::new(config.tavily_api_key.clone().unwrap_or_default())
            .with_max_results(config.max_web_results),
    );
    let paper_search = Arc::new(PaperSearch::new());

    ResearchRunner::new(llm, retriever, grader, web_search, paper_search)
}
