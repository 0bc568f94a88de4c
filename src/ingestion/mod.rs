//! Corpus ingestion: page text to provenance-tagged chunks

pub mod chunker;

pub use chunker::WindowChunker;

use uuid::Uuid;

use crate::types::{Chunk, DocumentInput};

/// Chunk every document in the set, assigning dense sequence ids in
/// document-then-page-then-window order.
///
/// The resulting ordering is deterministic for a given input: sequence ids
/// are 0-based, unique, and strictly increasing, and double as row indices
/// in the vector index built over these chunks.
pub fn chunk_corpus(chunker: &WindowChunker, documents: &[DocumentInput]) -> Vec<Chunk> {
    let mut chunks = Vec::new();

    for document in documents {
        let document_id = Uuid::new_v4();
        let before = chunks.len();

        for page in &document.pages {
            for window in chunker.split_page(&page.text) {
                chunks.push(Chunk {
                    document_id,
                    document_name: document.name.clone(),
                    page_number: page.page_number,
                    sequence_id: chunks.len(),
                    text: window.to_string(),
                });
            }
        }

        tracing::debug!(
            document = %document.name,
            chunks = chunks.len() - before,
            "document chunked"
        );
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageText;

    fn chunker() -> WindowChunker {
        WindowChunker::new(20, 5).unwrap()
    }

    #[test]
    fn test_sequence_ids_dense_and_increasing_across_documents() {
        let documents = vec![
            DocumentInput::new(
                "a.pdf",
                vec![
                    PageText::new(1, "first page of document a"),
                    PageText::new(2, "second page of document a"),
                ],
            ),
            DocumentInput::new("b.pdf", vec![PageText::new(1, "only page of document b")]),
        ];

        let chunks = chunk_corpus(&chunker(), &documents);
        assert!(!chunks.is_empty());
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.sequence_id, i);
        }
    }

    #[test]
    fn test_page_provenance_preserved() {
        let documents = vec![DocumentInput::new(
            "doc.pdf",
            vec![PageText::new(1, "alpha"), PageText::new(2, "beta")],
        )];

        let chunks = chunk_corpus(&chunker(), &documents);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].page_number, 1);
        assert_eq!(chunks[0].text, "alpha");
        assert_eq!(chunks[1].page_number, 2);
        assert_eq!(chunks[1].text, "beta");
        assert_eq!(chunks[0].document_id, chunks[1].document_id);
    }

    #[test]
    fn test_empty_pages_produce_no_chunks() {
        let documents = vec![DocumentInput::new(
            "doc.pdf",
            vec![PageText::new(1, "   "), PageText::new(2, "content")],
        )];

        let chunks = chunk_corpus(&chunker(), &documents);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].page_number, 2);
        assert_eq!(chunks[0].sequence_id, 0);
    }

    #[test]
    fn test_documents_get_distinct_ids() {
        let documents = vec![
            DocumentInput::single_page("a.txt", "text a"),
            DocumentInput::single_page("b.txt", "text b"),
        ];

        let chunks = chunk_corpus(&chunker(), &documents);
        assert_ne!(chunks[0].document_id, chunks[1].document_id);
    }
}
