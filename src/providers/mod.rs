//! Provider abstractions for the reasoning and embedding collaborators
//!
//! Trait-based seams so the pipeline can run against a local Ollama server
//! in production and scripted fakes in tests.

pub mod completion;
pub mod embedding;
pub mod ollama;

pub use completion::CompletionProvider;
pub use embedding::EmbeddingProvider;
pub use ollama::{OllamaClient, OllamaProvider};
