//! Whole-corpus summarization via bounded map-reduce

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::error::Result;
use crate::providers::CompletionProvider;
use crate::types::{Chunk, OutputKind, TaskOutput, TaskResult};

use super::prompt::PromptBuilder;

/// Summarizes the entire corpus.
///
/// Map step: chunks are partitioned into batches of `batch_size` and each
/// batch is summarized independently, up to `max_concurrency` at a time.
/// Reduce step: when more than one batch summary exists, a single final
/// pass summarizes their concatenation. The reduce never recurses — depth
/// is bounded at two passes total, trading compression quality for a hard
/// bound on reasoning calls.
pub struct SummarizeStage {
    completion: Arc<dyn CompletionProvider>,
    batch_size: usize,
    max_concurrency: usize,
}

impl SummarizeStage {
    pub fn new(completion: Arc<dyn CompletionProvider>, batch_size: usize, max_concurrency: usize) -> Self {
        Self {
            completion,
            batch_size: batch_size.max(1),
            max_concurrency: max_concurrency.max(1),
        }
    }

    pub async fn process(&self, chunks: &[Chunk]) -> TaskResult {
        if chunks.is_empty() {
            return TaskResult::failed("no documents");
        }

        let texts: Vec<&str> = chunks.iter().map(|chunk| chunk.text.as_str()).collect();
        let batches: Vec<&[&str]> = texts.chunks(self.batch_size).collect();

        tracing::info!(
            chunks = texts.len(),
            batches = batches.len(),
            "summarize stage"
        );

        let content = if batches.len() == 1 {
            // Single batch: one call, no reduce
            match self.summarize_batch(batches[0]).await {
                Ok(summary) => summary,
                Err(e) => return TaskResult::failed(e.to_string()),
            }
        } else {
            let summaries = match self.map_batches(&batches).await {
                Ok(summaries) => summaries,
                Err(e) => return TaskResult::failed(e.to_string()),
            };

            // One bounded reduce pass over the concatenation, however large
            match self
                .completion
                .complete(
                    PromptBuilder::summarize_instructions(),
                    &PromptBuilder::summarize_reduce_input(&summaries),
                )
                .await
            {
                Ok(summary) => summary,
                Err(e) => return TaskResult::failed(e.to_string()),
            }
        };

        TaskResult::ok(TaskOutput::new(OutputKind::Summary, content, Vec::new()))
    }

    /// Summarize every batch concurrently, preserving batch order in the output
    async fn map_batches(&self, batches: &[&[&str]]) -> Result<Vec<String>> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));

        let futures = batches.iter().map(|batch| {
            let semaphore = Arc::clone(&semaphore);
            async move {
                let _permit = semaphore.acquire().await.unwrap();
                self.summarize_batch(batch).await
            }
        });

        // join_all yields results in input order regardless of completion order
        join_all(futures).await.into_iter().collect()
    }

    async fn summarize_batch(&self, batch: &[&str]) -> Result<String> {
        self.completion
            .complete(
                PromptBuilder::summarize_instructions(),
                &PromptBuilder::summarize_batch_input(batch),
            )
            .await
    }
}
