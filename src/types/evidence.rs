//! Evidence records returned to reasoning stages and the presentation layer

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A retrieved chunk enriched with a similarity score and a display excerpt.
/// Derived and read-only: built fresh for each query, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    /// Source document id
    pub document_id: Uuid,
    /// Source document display name
    pub document_name: String,
    /// Page number within the document, 1-based
    pub page_number: u32,
    /// Sequence id of the underlying chunk
    pub sequence_id: usize,
    /// Similarity score from the index (cosine; higher is better)
    pub score: f32,
    /// Full chunk text, for reasoning stages
    pub text: String,
    /// Bounded-length excerpt, for display
    pub excerpt: String,
}

impl Evidence {
    /// Format a short citation for display, e.g. `report.pdf, Page 3`
    pub fn citation(&self) -> String {
        format!("{}, Page {}", self.document_name, self.page_number)
    }
}
