//! Error types for the RAG pipeline

use thiserror::Error;

/// Result type alias for RAG operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced during ingestion, retrieval, and reasoning
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Attempted to build an index over an empty corpus
    #[error("Cannot build an index over an empty corpus")]
    EmptyCorpus,

    /// A search hit referenced a chunk position that does not exist.
    /// The index and the chunk list have diverged.
    #[error("Search hit references chunk {sequence_id} but the corpus holds {corpus_len} chunks")]
    DanglingChunk {
        sequence_id: usize,
        corpus_len: usize,
    },

    /// Embedding generation failure
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// Completion (reasoning) failure
    #[error("Completion failed: {0}")]
    Completion(String),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create a completion error
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion(message.into())
    }

    /// True for internal-consistency failures. These abort the whole request
    /// instead of being converted into a failed task result: a corpus that
    /// disagrees with its index is a bug, not an expected absence of data.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::EmptyCorpus | Self::DanglingChunk { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defect_classification() {
        assert!(Error::EmptyCorpus.is_defect());
        assert!(Error::DanglingChunk {
            sequence_id: 9,
            corpus_len: 3
        }
        .is_defect());
        assert!(!Error::completion("model unavailable").is_defect());
        assert!(!Error::embedding("connection refused").is_defect());
    }
}
