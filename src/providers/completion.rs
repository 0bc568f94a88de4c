//! Completion provider trait for task-specific reasoning

use async_trait::async_trait;

use crate::error::Result;

/// Trait for the opaque reasoning capability: "do X given text Y".
///
/// Implementations:
/// - `OllamaProvider`: local Ollama server (phi3, llama3, etc.)
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one reasoning call. `instructions` frame the task; `input` is the
    /// text to reason over.
    async fn complete(&self, instructions: &str, input: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
