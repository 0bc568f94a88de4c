//! Finite-state orchestration of classification, retrieval, and reasoning

pub mod intent;

pub use intent::IntentClassifier;

use std::sync::Arc;

use crate::config::{RagConfig, RetrievalConfig};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::providers::{CompletionProvider, EmbeddingProvider};
use crate::retrieval::assemble;
use crate::stages::{
    AggregateStage, AnswerStage, CompareStage, SummarizeStage, TimelineStage,
};
use crate::types::{Evidence, Intent, TaskResult};

/// States visited while serving a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerState {
    Idle,
    Classifying,
    Answering,
    Summarizing,
    Retrieving,
    Comparing,
    Timelining,
    Aggregating,
    Done,
    Failed,
}

/// Which stage consumes the retrieved evidence
enum RetrievalTask {
    Answer,
    Compare,
    Timeline,
    Aggregate,
}

/// How an intent is served
enum Route {
    /// Whole-corpus map-reduce, no retrieval
    Summarize,
    /// Shared retrieval step, then the given stage
    Retrieve(RetrievalTask),
}

fn route(intent: Intent) -> Route {
    match intent {
        Intent::Summarize => Route::Summarize,
        Intent::Query => Route::Retrieve(RetrievalTask::Answer),
        Intent::Compare => Route::Retrieve(RetrievalTask::Compare),
        Intent::Timeline => Route::Retrieve(RetrievalTask::Timeline),
        Intent::Aggregate => Route::Retrieve(RetrievalTask::Aggregate),
    }
}

/// Drives one request through classify → (retrieve) → stage, packaging a
/// uniform [`TaskResult`] with an ordered execution trace.
///
/// The planner holds no per-request state; the corpus handle is passed in
/// explicitly on every call and is read-only from its perspective.
pub struct Planner {
    classifier: IntentClassifier,
    answer: AnswerStage,
    summarize: SummarizeStage,
    compare: CompareStage,
    timeline: TimelineStage,
    aggregate: AggregateStage,
    embedder: Arc<dyn EmbeddingProvider>,
    retrieval: RetrievalConfig,
}

impl Planner {
    pub fn new(
        config: &RagConfig,
        completion: Arc<dyn CompletionProvider>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            classifier: IntentClassifier::new(Arc::clone(&completion)),
            answer: AnswerStage::new(Arc::clone(&completion)),
            summarize: SummarizeStage::new(
                Arc::clone(&completion),
                config.summarize.batch_size,
                config.summarize.max_concurrency,
            ),
            compare: CompareStage::new(Arc::clone(&completion)),
            timeline: TimelineStage::new(Arc::clone(&completion)),
            aggregate: AggregateStage::new(completion),
            embedder,
            retrieval: config.retrieval.clone(),
        }
    }

    /// Serve one request start to finish.
    ///
    /// Expected failures (empty input, empty evidence, upstream provider
    /// errors) surface as `TaskResult { success: false, .. }`. Only
    /// internal-consistency defects ([`crate::Error::is_defect`]) abort the
    /// request with `Err`.
    pub async fn run(&self, corpus: Option<&Corpus>, user_text: &str) -> Result<TaskResult> {
        let mut state = PlannerState::Idle;
        let mut trace: Vec<String> = Vec::new();

        if user_text.trim().is_empty() {
            advance(&mut state, PlannerState::Failed);
            return Ok(TaskResult::failed("no input").with_trace(trace));
        }

        advance(&mut state, PlannerState::Classifying);
        trace.push("classify".to_string());
        let intent = self.classifier.classify(user_text).await;
        tracing::info!(%intent, "intent classified");

        let result = match route(intent) {
            Route::Summarize => {
                advance(&mut state, PlannerState::Summarizing);
                trace.push("summarize".to_string());
                let chunks = corpus.map(Corpus::chunks).unwrap_or(&[]);
                self.summarize.process(chunks).await
            }
            Route::Retrieve(task) => {
                // QUERY folds retrieval into the answering state; the other
                // intents pass through an explicit retrieving state first.
                match task {
                    RetrievalTask::Answer => advance(&mut state, PlannerState::Answering),
                    _ => advance(&mut state, PlannerState::Retrieving),
                }
                trace.push("retrieve".to_string());

                match self.retrieve(corpus, user_text).await {
                    Err(e) if e.is_defect() => return Err(e),
                    Err(e) => TaskResult::failed(e.to_string()),
                    Ok(evidence) => match task {
                        RetrievalTask::Answer => {
                            trace.push("answer".to_string());
                            self.answer.process(user_text, &evidence).await
                        }
                        RetrievalTask::Compare => {
                            advance(&mut state, PlannerState::Comparing);
                            trace.push("compare".to_string());
                            self.compare.process(user_text, &evidence).await
                        }
                        RetrievalTask::Timeline => {
                            advance(&mut state, PlannerState::Timelining);
                            trace.push("timeline".to_string());
                            self.timeline.process(user_text, &evidence).await
                        }
                        RetrievalTask::Aggregate => {
                            advance(&mut state, PlannerState::Aggregating);
                            trace.push("aggregate".to_string());
                            self.aggregate.process(user_text, &evidence).await
                        }
                    },
                }
            }
        };

        // The planner never masks a stage error: the first failure ends the
        // request with that stage's error string unchanged.
        if result.success {
            advance(&mut state, PlannerState::Done);
        } else {
            advance(&mut state, PlannerState::Failed);
        }

        Ok(result.with_trace(trace))
    }

    /// Shared retrieval step. No corpus means no evidence — a normal state,
    /// left to each stage to accept or reject.
    async fn retrieve(&self, corpus: Option<&Corpus>, query: &str) -> Result<Vec<Evidence>> {
        let Some(corpus) = corpus else {
            return Ok(Vec::new());
        };

        let hits = corpus
            .search(self.embedder.as_ref(), query, self.retrieval.top_k)
            .await?;
        assemble(&hits, corpus.chunks(), self.retrieval.excerpt_chars)
    }
}

fn advance(state: &mut PlannerState, next: PlannerState) {
    tracing::debug!(from = ?state, to = ?next, "planner transition");
    *state = next;
}
