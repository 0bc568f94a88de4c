//! Exact nearest-neighbor index over normalized chunk embeddings

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;

/// A raw search hit: chunk position plus similarity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// Sequence id of the matched chunk
    pub sequence_id: usize,
    /// Cosine similarity, higher is better
    pub score: f32,
}

/// Similarity-searchable index over a fixed chunk set.
///
/// Row `i` holds the embedding of the chunk with `sequence_id == i`; the
/// caller is responsible for keeping that pairing intact, which it gets for
/// free by building the index from the corpus chunk list in order.
///
/// Search is an exact scan. At the corpus sizes a single session holds
/// (thousands of chunks) correctness beats approximate structures.
pub struct VectorIndex {
    dimensions: usize,
    vectors: Vec<Vec<f32>>,
}

impl VectorIndex {
    /// Embed and index the given texts, in order.
    ///
    /// Embeddings are requested in batches of `batch_size` and L2-normalized
    /// on insert so the inner product used by [`search`](Self::search) is
    /// cosine similarity. Fails with [`Error::EmptyCorpus`] when there is
    /// nothing to index.
    pub async fn build(
        embedder: &dyn EmbeddingProvider,
        texts: &[String],
        batch_size: usize,
    ) -> Result<Self> {
        if texts.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let mut vectors = Vec::with_capacity(texts.len());
        for batch in texts.chunks(batch_size.max(1)) {
            let embedded = embedder.embed_batch(batch).await?;
            vectors.extend(embedded.into_iter().map(normalize));
        }

        tracing::info!(vectors = vectors.len(), "vector index built");

        Ok(Self {
            dimensions: embedder.dimensions(),
            vectors,
        })
    }

    /// Number of indexed vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Embedding dimensions this index was built with
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Exact top-k scan: at most `top_k` hits ordered by descending
    /// similarity, ties broken by ascending sequence id so identical scores
    /// always come back in the same order.
    pub fn search(&self, query: &[f32], top_k: usize) -> Vec<SearchHit> {
        if self.vectors.is_empty() || top_k == 0 {
            return Vec::new();
        }

        let query = normalize(query.to_vec());

        let mut hits: Vec<SearchHit> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(sequence_id, vector)| SearchHit {
                sequence_id,
                score: dot(&query, vector),
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.sequence_id.cmp(&b.sequence_id))
        });
        hits.truncate(top_k);
        hits
    }
}

/// Scale to unit L2 norm, leaving the zero vector untouched
fn normalize(mut vector: Vec<f32>) -> Vec<f32> {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in &mut vector {
            *x /= norm;
        }
    }
    vector
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Embedder returning canned vectors per text
    struct FixedEmbedder {
        vectors: HashMap<String, Vec<f32>>,
    }

    impl FixedEmbedder {
        fn new(entries: &[(&str, Vec<f32>)]) -> Self {
            Self {
                vectors: entries
                    .iter()
                    .map(|(text, vector)| (text.to_string(), vector.clone()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl EmbeddingProvider for FixedEmbedder {
        async fn embed(&self, text: &str) -> crate::error::Result<Vec<f32>> {
            self.vectors
                .get(text)
                .cloned()
                .ok_or_else(|| Error::embedding(format!("no fixture for '{text}'")))
        }

        fn dimensions(&self) -> usize {
            3
        }

        async fn health_check(&self) -> crate::error::Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let embedder = FixedEmbedder::new(&[]);
        let result = tokio_test::block_on(VectorIndex::build(&embedder, &[], 32));
        assert!(matches!(result, Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_search_orders_by_descending_similarity() {
        let embedder = FixedEmbedder::new(&[
            ("north", vec![0.0, 1.0, 0.0]),
            ("east", vec![1.0, 0.0, 0.0]),
            ("northeast", vec![1.0, 1.0, 0.0]),
        ]);
        let index = tokio_test::block_on(VectorIndex::build(
            &embedder,
            &texts(&["north", "east", "northeast"]),
            2,
        ))
        .unwrap();

        let hits = index.search(&[0.0, 1.0, 0.0], 3);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].sequence_id, 0); // exact match first
        assert_eq!(hits[1].sequence_id, 2); // diagonal second
        assert_eq!(hits[2].sequence_id, 1); // orthogonal last
        assert!(hits[0].score > hits[1].score && hits[1].score > hits[2].score);
    }

    #[test]
    fn test_ties_break_by_ascending_sequence_id() {
        let embedder = FixedEmbedder::new(&[
            ("twin-a", vec![1.0, 0.0, 0.0]),
            ("twin-b", vec![1.0, 0.0, 0.0]),
        ]);
        let index = tokio_test::block_on(VectorIndex::build(
            &embedder,
            &texts(&["twin-a", "twin-b"]),
            32,
        ))
        .unwrap();

        let hits = index.search(&[1.0, 0.0, 0.0], 2);
        assert_eq!(hits[0].sequence_id, 0);
        assert_eq!(hits[1].sequence_id, 1);
    }

    #[test]
    fn test_top_k_bounds_result_length() {
        let embedder = FixedEmbedder::new(&[
            ("a", vec![1.0, 0.0, 0.0]),
            ("b", vec![0.0, 1.0, 0.0]),
            ("c", vec![0.0, 0.0, 1.0]),
        ]);
        let index =
            tokio_test::block_on(VectorIndex::build(&embedder, &texts(&["a", "b", "c"]), 32))
                .unwrap();

        assert_eq!(index.search(&[1.0, 1.0, 1.0], 2).len(), 2);
        assert_eq!(index.search(&[1.0, 1.0, 1.0], 10).len(), 3);
        assert!(index.search(&[1.0, 1.0, 1.0], 0).is_empty());
    }

    #[test]
    fn test_repeated_search_is_deterministic() {
        let embedder = FixedEmbedder::new(&[
            ("a", vec![0.9, 0.1, 0.0]),
            ("b", vec![0.1, 0.9, 0.0]),
            ("c", vec![0.5, 0.5, 0.0]),
        ]);
        let index =
            tokio_test::block_on(VectorIndex::build(&embedder, &texts(&["a", "b", "c"]), 1))
                .unwrap();

        let first = index.search(&[0.7, 0.3, 0.0], 3);
        let second = index.search(&[0.7, 0.3, 0.0], 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_stored_vectors_are_normalized() {
        // Same direction, different magnitude: similarity must be identical
        let embedder = FixedEmbedder::new(&[
            ("unit", vec![1.0, 0.0, 0.0]),
            ("scaled", vec![10.0, 0.0, 0.0]),
        ]);
        let index = tokio_test::block_on(VectorIndex::build(
            &embedder,
            &texts(&["unit", "scaled"]),
            32,
        ))
        .unwrap();

        let hits = index.search(&[1.0, 0.0, 0.0], 2);
        assert!((hits[0].score - hits[1].score).abs() < 1e-6);
    }
}
