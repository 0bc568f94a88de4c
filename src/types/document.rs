//! Document, page, and chunk types with provenance for citations

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A page of pre-extracted text, as supplied by the text-extraction layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// Page number, 1-based
    pub page_number: u32,
    /// Extracted plain text for this page
    pub text: String,
}

impl PageText {
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

/// A document queued for ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Display name used in citations
    pub name: String,
    /// Ordered pages
    pub pages: Vec<PageText>,
}

impl DocumentInput {
    pub fn new(name: impl Into<String>, pages: Vec<PageText>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }

    /// Convenience constructor for a document with a single page of text
    pub fn single_page(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pages: vec![PageText::new(1, text)],
        }
    }
}

/// A bounded window of page text with document and page provenance.
///
/// Immutable once created. `sequence_id` is the chunk's dense 0-based
/// position in corpus order and doubles as its row index in the vector
/// index; the two orderings must never diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Parent document id
    pub document_id: Uuid,
    /// Parent document display name (used in citations)
    pub document_name: String,
    /// Page number the window was cut from, 1-based
    pub page_number: u32,
    /// Dense position within the corpus, assigned in
    /// document-then-page-then-window order
    pub sequence_id: usize,
    /// Window text
    pub text: String,
}
