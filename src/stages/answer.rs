//! Direct question answering grounded in retrieved evidence

use std::sync::Arc;

use crate::providers::CompletionProvider;
use crate::types::{Evidence, OutputKind, TaskOutput, TaskResult};

use super::prompt::PromptBuilder;

/// Answers a question using only the supplied evidence.
///
/// Retrieval happens upstream; an empty evidence list is not an error here —
/// the stage still produces an answer stating the insufficiency.
pub struct AnswerStage {
    completion: Arc<dyn CompletionProvider>,
}

impl AnswerStage {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }

    pub async fn process(&self, query: &str, evidence: &[Evidence]) -> TaskResult {
        tracing::debug!(evidence = evidence.len(), "answer stage");

        let input = PromptBuilder::answer_input(query, evidence);

        match self
            .completion
            .complete(PromptBuilder::answer_instructions(), &input)
            .await
        {
            Ok(content) => TaskResult::ok(TaskOutput::new(
                OutputKind::Answer,
                content,
                evidence.to_vec(),
            )),
            Err(e) => TaskResult::failed(e.to_string()),
        }
    }
}
