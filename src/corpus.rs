//! The ingested corpus: chunks plus the index fitted over them

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RagConfig;
use crate::error::Result;
use crate::ingestion::{chunk_corpus, WindowChunker};
use crate::providers::EmbeddingProvider;
use crate::retrieval::{SearchHit, VectorIndex};
use crate::types::{Chunk, DocumentInput};

/// Per-document ingestion statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Chunks produced from the document
    pub chunk_count: usize,
    /// Highest page number seen
    pub page_count: u32,
    /// Total characters across the document's chunks
    pub total_chars: usize,
}

/// An ordered chunk collection with the vector index fitted over it.
///
/// Built once per ingested document set and immutable afterwards; row `i`
/// of the index is the embedding of `chunks[i]`. Re-ingestion builds a
/// whole new corpus rather than mutating this one.
pub struct Corpus {
    chunks: Vec<Chunk>,
    index: VectorIndex,
    ingested_at: DateTime<Utc>,
}

impl Corpus {
    /// Chunk, embed, and index a document set.
    ///
    /// Fails with [`crate::Error::EmptyCorpus`] when the documents contain
    /// no indexable text.
    pub async fn build(
        documents: &[DocumentInput],
        config: &RagConfig,
        embedder: &dyn EmbeddingProvider,
    ) -> Result<Self> {
        let chunker = WindowChunker::from_config(&config.chunking)?;
        let chunks = chunk_corpus(&chunker, documents);

        let texts: Vec<String> = chunks.iter().map(|chunk| chunk.text.clone()).collect();
        let index = VectorIndex::build(embedder, &texts, config.embeddings.batch_size).await?;

        tracing::info!(
            documents = documents.len(),
            chunks = chunks.len(),
            "corpus ingested"
        );

        Ok(Self {
            chunks,
            index,
            ingested_at: Utc::now(),
        })
    }

    /// All chunks in sequence order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Resolve a sequence id to its chunk
    pub fn chunk(&self, sequence_id: usize) -> Option<&Chunk> {
        self.chunks.get(sequence_id)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// When this corpus was ingested
    pub fn ingested_at(&self) -> DateTime<Utc> {
        self.ingested_at
    }

    /// Embed the query text and run a top-k similarity search
    pub async fn search(
        &self,
        embedder: &dyn EmbeddingProvider,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchHit>> {
        let query_vector = embedder.embed(query).await?;
        let hits = self.index.search(&query_vector, top_k);
        tracing::debug!(hits = hits.len(), top_k, "similarity search");
        Ok(hits)
    }

    /// Per-document chunk, page, and character counts
    pub fn document_stats(&self) -> BTreeMap<String, DocumentStats> {
        let mut stats: BTreeMap<String, DocumentStats> = BTreeMap::new();

        for chunk in &self.chunks {
            let entry = stats.entry(chunk.document_name.clone()).or_default();
            entry.chunk_count += 1;
            entry.page_count = entry.page_count.max(chunk.page_number);
            entry.total_chars += chunk.text.chars().count();
        }

        stats
    }
}
