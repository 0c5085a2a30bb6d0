//! In-memory vector index for semantic document retrieval.
//!
//! Embeds documents on insert and ranks them by cosine similarity against an
//! embedded query. Not persistent.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::document::Document;
use crate::retrieve::{Embedder, IndexError, Retriever};

/// Default number of documents returned per query.
pub const DEFAULT_TOP_K: usize = 4;

/// Pure in-memory vector index.
///
/// **Interaction**: used as `Arc<dyn Retriever>` by the vector-store
/// retrieval node. All data lives in memory and is lost when the index is
/// dropped.
pub struct InMemoryVectorIndex {
    data: DashMap<usize, IndexEntry>,
    next_id: AtomicUsize,
    embedder: Arc<dyn Embedder>,
    top_k: usize,
}

#[derive(Clone)]
struct IndexEntry {
    document: Document,
    vector: Vec<f32>,
}

impl InMemoryVectorIndex {
    /// Creates an empty index returning up to [`DEFAULT_TOP_K`] hits per query.
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self::with_top_k(embedder, DEFAULT_TOP_K)
    }

    /// Creates an empty index returning up to `top_k` hits per query.
    pub fn with_top_k(embedder: Arc<dyn Embedder>, top_k: usize) -> Self {
        Self {
            data: DashMap::new(),
            next_id: AtomicUsize::new(0),
            embedder,
            top_k,
        }
    }

    /// Embeds and indexes the given documents.
    pub async fn add_documents(&self, documents: &[Document]) -> Result<(), IndexError> {
        if documents.is_empty() {
            return Ok(());
        }

        let texts: Vec<&str> = documents.iter().map(|d| d.page_content.as_str()).collect();
        let vectors = self.embedder.embed(&texts).await?;
        if vectors.len() != documents.len() {
            return Err(IndexError::EmbeddingError(format!(
                "Expected {} vectors, got {}",
                documents.len(),
                vectors.len()
            )));
        }

        for (document, vector) in documents.iter().zip(vectors) {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            self.data.insert(
                id,
                IndexEntry {
                    document: document.clone(),
                    vector,
                },
            );
        }

        debug!(indexed = documents.len(), total = self.data.len(), "documents indexed");
        Ok(())
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the index holds no documents.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Computes cosine similarity between two vectors.
    ///
    /// Returns 0.0 if either vector has zero magnitude.
    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            0.0
        } else {
            dot_product / (norm_a * norm_b)
        }
    }
}

#[async_trait]
impl Retriever for InMemoryVectorIndex {
    async fn retrieve(&self, query: &str) -> Result<Vec<Document>, IndexError> {
        if self.data.is_empty() {
            return Ok(Vec::new());
        }

        let vectors = self.embedder.embed(&[query]).await?;
        let query_vec = vectors
            .into_iter()
            .next()
            .ok_or_else(|| IndexError::EmbeddingError("No vector returned".into()))?;

        let mut scores: Vec<(usize, f32)> = self
            .data
            .iter()
            .map(|entry| {
                (
                    *entry.key(),
                    Self::cosine_similarity(&query_vec, &entry.vector),
                )
            })
            .collect();

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let hits: Vec<Document> = scores
            .into_iter()
            .take(self.top_k)
            .filter_map(|(id, _)| self.data.get(&id).map(|e| e.document.clone()))
            .collect();

        debug!(query_len = query.len(), hits = hits.len(), "similarity search");
        Ok(hits)
    }
}
