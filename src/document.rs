//! Document record: content plus source metadata.
//!
//! Produced by the retriever and search adapters, consumed by the grader and
//! the generate chain. Metadata is a flat string map (e.g. `url`, `title`).

use std::collections::BTreeMap;

/// Metadata key for a document's source URL (set by search adapters).
pub const METADATA_URL: &str = "url";

/// A retrieved or searched document.
///
/// `page_content` is the text shown to the grader and generator; `metadata`
/// carries provenance. Ordering inside a result list is meaningful (rank),
/// so collections of documents preserve insertion order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Document text.
    pub page_content: String,
    /// Flat provenance map (e.g. source URL). BTreeMap keeps Debug output stable.
    pub metadata: BTreeMap<String, String>,
}

impl Document {
    /// Creates a document with no metadata.
    pub fn new(page_content: impl Into<String>) -> Self {
        Self {
            page_content: page_content.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Creates a document with a source URL in metadata (search adapters).
    pub fn with_url(page_content: impl Into<String>, url: impl Into<String>) -> Self {
        let mut doc = Self::new(page_content);
        doc.metadata.insert(METADATA_URL.to_string(), url.into());
        doc
    }

    /// Returns the source URL when present.
    pub fn url(&self) -> Option<&str> {
        self.metadata.get(METADATA_URL).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: with_url stores the URL under the `url` metadata key.
    #[test]
    fn with_url_sets_url_metadata() {
        let doc = Document::with_url("content", "https://example.com/a");
        assert_eq!(doc.page_content, "content");
        assert_eq!(doc.url(), Some("https://example.com/a"));
    }

    /// **Scenario**: a plain document has no URL.
    #[test]
    fn new_document_has_no_url() {
        let doc = Document::new("content");
        assert_eq!(doc.url(), None);
        assert!(doc.metadata.is_empty());
    }
}
