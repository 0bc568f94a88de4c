//! Evidence assembly from raw search hits

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};
use crate::types::{Chunk, Evidence};

use super::index::SearchHit;

/// Marker appended to excerpts that were shortened
const TRUNCATION_MARKER: &str = "...";

/// Resolve search hits into evidence records.
///
/// Every hit must reference a chunk that exists: a `sequence_id` outside the
/// chunk list means the index and corpus have desynchronized, which is
/// reported as [`Error::DanglingChunk`] and must propagate, never be
/// dropped.
pub fn assemble(
    hits: &[SearchHit],
    chunks: &[Chunk],
    excerpt_chars: usize,
) -> Result<Vec<Evidence>> {
    hits.iter()
        .map(|hit| {
            let chunk = chunks
                .get(hit.sequence_id)
                .ok_or(Error::DanglingChunk {
                    sequence_id: hit.sequence_id,
                    corpus_len: chunks.len(),
                })?;

            Ok(Evidence {
                document_id: chunk.document_id,
                document_name: chunk.document_name.clone(),
                page_number: chunk.page_number,
                sequence_id: chunk.sequence_id,
                score: hit.score,
                text: chunk.text.clone(),
                excerpt: make_excerpt(&chunk.text, excerpt_chars),
            })
        })
        .collect()
}

/// First `max_graphemes` grapheme clusters of `text`, with a truncation
/// marker when shortened. Grapheme-aware so combined characters survive.
fn make_excerpt(text: &str, max_graphemes: usize) -> String {
    match text.grapheme_indices(true).nth(max_graphemes) {
        None => text.to_string(),
        Some((byte_offset, _)) => format!("{}{}", &text[..byte_offset], TRUNCATION_MARKER),
    }
}
