//! Information synthesis across sources

use std::sync::Arc;

use crate::providers::CompletionProvider;
use crate::types::{Evidence, OutputKind, TaskOutput, TaskResult};

use super::prompt::PromptBuilder;

/// Merges overlapping content across sources, deduplicating while
/// preserving each source's unique contributions.
pub struct AggregateStage {
    completion: Arc<dyn CompletionProvider>,
}

impl AggregateStage {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }

    pub async fn process(&self, query: &str, evidence: &[Evidence]) -> TaskResult {
        if evidence.is_empty() {
            return TaskResult::failed("no evidence to aggregate");
        }

        tracing::debug!(evidence = evidence.len(), "aggregate stage");

        match self
            .completion
            .complete(
                PromptBuilder::aggregate_instructions(),
                &PromptBuilder::aggregate_input(query, evidence),
            )
            .await
        {
            Ok(content) => TaskResult::ok(TaskOutput::new(
                OutputKind::Aggregation,
                content,
                evidence.to_vec(),
            )),
            Err(e) => TaskResult::failed(e.to_string()),
        }
    }
}
