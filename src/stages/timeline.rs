//! Chronological ordering of retrieved events

use std::sync::Arc;

use crate::providers::CompletionProvider;
use crate::types::{Evidence, OutputKind, TaskOutput, TaskResult};

use super::prompt::PromptBuilder;

/// Extracts temporal markers from the evidence, orders events
/// chronologically, and surfaces causal links.
pub struct TimelineStage {
    completion: Arc<dyn CompletionProvider>,
}

impl TimelineStage {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }

    pub async fn process(&self, query: &str, evidence: &[Evidence]) -> TaskResult {
        if evidence.is_empty() {
            return TaskResult::failed("no evidence to build a timeline from");
        }

        tracing::debug!(evidence = evidence.len(), "timeline stage");

        match self
            .completion
            .complete(
                PromptBuilder::timeline_instructions(),
                &PromptBuilder::timeline_input(query, evidence),
            )
            .await
        {
            Ok(content) => TaskResult::ok(TaskOutput::new(
                OutputKind::Timeline,
                content,
                evidence.to_vec(),
            )),
            Err(e) => TaskResult::failed(e.to_string()),
        }
    }
}
