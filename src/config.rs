//! Configuration for the RAG pipeline

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Chunking configuration
    pub chunking: ChunkingConfig,
    /// Embedding configuration
    pub embeddings: EmbeddingConfig,
    /// Retrieval configuration
    pub retrieval: RetrievalConfig,
    /// Summarization configuration
    pub summarize: SummarizeConfig,
    /// LLM (Ollama) configuration
    pub llm: LlmConfig,
}

impl RagConfig {
    /// Validate cross-field constraints before the pipeline is constructed
    pub fn validate(&self) -> Result<()> {
        self.chunking.validate()?;
        if self.summarize.batch_size == 0 {
            return Err(Error::config("summarize.batch_size must be at least 1"));
        }
        if self.retrieval.top_k == 0 {
            return Err(Error::config("retrieval.top_k must be at least 1"));
        }
        Ok(())
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Window size in characters
    pub window_size: usize,
    /// Overlap between consecutive windows in characters
    pub overlap: usize,
}

impl ChunkingConfig {
    /// Windows must advance: overlap strictly smaller than the window
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::config("chunking.window_size must be at least 1"));
        }
        if self.overlap >= self.window_size {
            return Err(Error::config(format!(
                "chunking.overlap ({}) must be smaller than window_size ({})",
                self.overlap, self.window_size
            )));
        }
        Ok(())
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            window_size: 1000,
            overlap: 200,
        }
    }
}

/// Embedding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Embedding dimensions (768 for nomic-embed-text)
    pub dimensions: usize,
    /// Batch size for embedding generation
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: 768,
            batch_size: 32,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of nearest neighbors to retrieve per query
    pub top_k: usize,
    /// Display excerpt length in characters
    pub excerpt_chars: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            excerpt_chars: 200,
        }
    }
}

/// Map-reduce summarization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeConfig {
    /// Chunks per map batch
    pub batch_size: usize,
    /// Maximum concurrent batch summarization calls
    pub max_concurrency: usize,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            batch_size: 10,
            max_concurrency: 4,
        }
    }
}

/// LLM (Ollama) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Embedding model name
    pub embed_model: String,
    /// Generation model name
    pub generate_model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            embed_model: "nomic-embed-text".to_string(),
            generate_model: "phi3".to_string(),
            temperature: 0.3,
            timeout_secs: 120,
            max_retries: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RagConfig::default().validate().is_ok());
    }

    #[test]
    fn test_overlap_must_be_smaller_than_window() {
        let config = ChunkingConfig {
            window_size: 100,
            overlap: 100,
        };
        assert!(config.validate().is_err());

        let config = ChunkingConfig {
            window_size: 100,
            overlap: 99,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let mut config = RagConfig::default();
        config.summarize.batch_size = 0;
        assert!(config.validate().is_err());
    }
}
