//! Text embedding for vector search.
//!
//! [`Embedder`] turns text into fixed-dimension vectors; [`OpenAIEmbedder`]
//! implements it with OpenAI's Embeddings API. Supports models like
//! `text-embedding-3-small`, `text-embedding-3-large`, and
//! `text-embedding-ada-002`.
//!
//! Requires `OPENAI_API_KEY` environment variable (or custom config).

use async_openai::{
    config::OpenAIConfig,
    types::embeddings::{CreateEmbeddingRequest, EmbeddingInput},
    Client,
};
use async_trait::async_trait;

use crate::retrieve::IndexError;

/// Generates vector embeddings from text.
///
/// **Interaction**: used by
/// [`InMemoryVectorIndex`](crate::retrieve::InMemoryVectorIndex) to embed
/// both indexed documents and incoming queries.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embeds each text into a vector of [`dimension`](Embedder::dimension) floats.
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, IndexError>;

    /// Dimension of the vectors this embedder produces.
    fn dimension(&self) -> usize;
}

/// OpenAI Embeddings client implementing [`Embedder`].
///
/// Default model is `text-embedding-3-small` (1536 dimensions).
pub struct OpenAIEmbedder {
    config: OpenAIConfig,
    model: String,
    dimensions: usize,
}

impl OpenAIEmbedder {
    /// Creates an embedder for the given model; API key comes from
    /// `OPENAI_API_KEY`.
    ///
    /// Supported models and their dimensions:
    ///
    /// - `text-embedding-3-small`: 1536 (default, cost-effective)
    /// - `text-embedding-3-large`: 3072 (higher quality)
    /// - `text-embedding-ada-002`: 1536 (legacy)
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_config(OpenAIConfig::new(), model)
    }

    /// Creates an embedder with custom configuration (custom API key, base
    /// URL, or an OpenAI-compatible provider).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        let model = model.into();
        let dimensions = Self::get_model_dimensions(&model);
        Self {
            config,
            model,
            dimensions,
        }
    }

    fn get_model_dimensions(model: &str) -> usize {
        match model {
            "text-embedding-3-large" => 3072,
            "text-embedding-3-small" | "text-embedding-ada-002" => 1536,
            _ => 1536,
        }
    }

    /// Embeds a single text. Convenience wrapper over [`embed`](Embedder::embed).
    pub async fn embed_one(&self, text: &str) -> Result<Vec<f32>, IndexError> {
        let vectors = self.embed(&[text]).await?;
        vectors
            .into_iter()
            .next()
            .ok_or_else(|| IndexError::EmbeddingError("No embedding returned".to_string()))
    }
}

#[async_trait]
impl Embedder for OpenAIEmbedder {
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, IndexError> {
        let inputs: Vec<String> = texts.iter().map(|&s| s.to_string()).collect();
        let input = if inputs.len() == 1 {
            EmbeddingInput::String(inputs[0].clone())
        } else {
            EmbeddingInput::StringArray(inputs)
        };

        let request = CreateEmbeddingRequest {
            input,
            model: self.model.clone(),
            ..Default::default()
        };

        let client = Client::with_config(self.config.clone());
        let response = client
            .embeddings()
            .create(request)
            .await
            .map_err(|e| IndexError::EmbeddingError(format!("OpenAI API error: {}", e)))?;

        Ok(response.data.into_iter().map(|e| e.embedding).collect())
    }

    fn dimension(&self) -> usize {
        self.dimensions
    }
}
