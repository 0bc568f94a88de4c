//! Session state: providers plus the currently ingested corpus

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::RagConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::planner::Planner;
use crate::providers::{CompletionProvider, EmbeddingProvider};
use crate::types::{DocumentInput, TaskResult};

/// One user session over an ephemeral document set.
///
/// Holds the providers and the corpus handle and threads them explicitly
/// into every request — there is no ambient global state. Sessions are
/// isolated: nothing here is shared across instances.
pub struct Session {
    config: RagConfig,
    embedder: Arc<dyn EmbeddingProvider>,
    planner: Planner,
    corpus: RwLock<Option<Arc<Corpus>>>,
}

impl Session {
    /// Create a session from validated configuration and providers
    pub fn new(
        config: RagConfig,
        completion: Arc<dyn CompletionProvider>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self> {
        config.validate()?;
        let planner = Planner::new(&config, completion, Arc::clone(&embedder));

        Ok(Self {
            config,
            embedder,
            planner,
            corpus: RwLock::new(None),
        })
    }

    /// Ingest a document set, replacing any previous corpus wholesale.
    ///
    /// The new corpus is built entirely off-lock and swapped in at the end,
    /// so concurrent readers observe either the old corpus or the new one,
    /// never a partially built state.
    pub async fn ingest(&self, documents: &[DocumentInput]) -> Result<()> {
        let corpus = Corpus::build(documents, &self.config, self.embedder.as_ref()).await?;
        *self.corpus.write() = Some(Arc::new(corpus));
        Ok(())
    }

    /// The current corpus, if any documents have been ingested
    pub fn corpus(&self) -> Option<Arc<Corpus>> {
        self.corpus.read().clone()
    }

    /// Drop the current corpus
    pub fn clear(&self) {
        *self.corpus.write() = None;
    }

    /// Serve one request against the current corpus
    pub async fn ask(&self, user_text: &str) -> Result<TaskResult> {
        let corpus = self.corpus();
        self.planner.run(corpus.as_deref(), user_text).await
    }
}
