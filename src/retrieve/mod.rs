//! Document retrieval: embeddings and vector similarity search.
//!
//! The research graph only needs one thing from this layer: given a question,
//! return the most similar indexed documents. [`Retriever`] is that seam;
//! [`InMemoryVectorIndex`] is the shipped implementation, backed by an
//! [`Embedder`].

mod embedder;
mod vector_index;

pub use embedder::{Embedder, OpenAIEmbedder};
pub use vector_index::{InMemoryVectorIndex, DEFAULT_TOP_K};

use async_trait::async_trait;
use thiserror::Error;

use crate::document::Document;

/// Errors from the retrieval layer.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Embedding generation failed (API error, empty response).
    #[error("Embedding error: {0}")]
    EmbeddingError(String),

    /// Similarity search failed.
    #[error("Search error: {0}")]
    SearchError(String),
}

/// Fetches documents relevant to a query.
///
/// **Interaction**: the vector-store retrieval node holds this as
/// `Arc<dyn Retriever>`; tests substitute a canned implementation.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Returns documents for `query`, most relevant first.
    async fn retrieve(&self, query: &str) -> Result<Vec<Document>, IndexError>;
}
