//! Cross-document comparison

use std::sync::Arc;

use crate::providers::CompletionProvider;
use crate::types::{Evidence, OutputKind, TaskOutput, TaskResult};

use super::prompt::PromptBuilder;

/// Produces a structured comparison (similarities, differences,
/// contradictions) grounded in the retrieved evidence.
pub struct CompareStage {
    completion: Arc<dyn CompletionProvider>,
}

impl CompareStage {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }

    pub async fn process(&self, query: &str, evidence: &[Evidence]) -> TaskResult {
        if evidence.is_empty() {
            return TaskResult::failed("no evidence to compare");
        }

        tracing::debug!(evidence = evidence.len(), "compare stage");

        match self
            .completion
            .complete(
                PromptBuilder::compare_instructions(),
                &PromptBuilder::compare_input(query, evidence),
            )
            .await
        {
            Ok(content) => TaskResult::ok(TaskOutput::new(
                OutputKind::Comparison,
                content,
                evidence.to_vec(),
            )),
            Err(e) => TaskResult::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoCompletion;

    #[async_trait]
    impl CompletionProvider for EchoCompletion {
        async fn complete(&self, _: &str, input: &str) -> crate::error::Result<String> {
            Ok(input.to_string())
        }

        async fn health_check(&self) -> crate::error::Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn test_empty_evidence_fails_without_calling_the_model() {
        let stage = CompareStage::new(Arc::new(EchoCompletion));
        let result = tokio_test::block_on(stage.process("compare a and b", &[]));
        assert!(!result.success);
        assert!(result.payload.is_none());
        assert!(!result.error.unwrap().is_empty());
    }
}
