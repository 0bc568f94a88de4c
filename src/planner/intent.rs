//! Intent classification with a safe default

use std::sync::Arc;

use crate::providers::CompletionProvider;
use crate::stages::PromptBuilder;
use crate::types::Intent;

/// Maps free-text user requests onto the closed intent set.
///
/// Classification never fails a request: an out-of-set label, empty reply,
/// or provider error all degrade to [`Intent::Query`], the safest route.
pub struct IntentClassifier {
    completion: Arc<dyn CompletionProvider>,
}

impl IntentClassifier {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }

    pub async fn classify(&self, user_text: &str) -> Intent {
        let raw = match self
            .completion
            .complete(&PromptBuilder::classify_instructions(), user_text)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "intent classification failed, defaulting to query");
                return Intent::Query;
            }
        };

        match Intent::parse(&raw) {
            Some(intent) => intent,
            None => {
                tracing::warn!(label = %raw.trim(), "unrecognized intent label, defaulting to query");
                Intent::Query
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;

    struct CannedCompletion {
        reply: crate::error::Result<String>,
    }

    impl CannedCompletion {
        fn ok(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
            })
        }

        fn err(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(Error::completion(message)),
            })
        }
    }

    #[async_trait]
    impl CompletionProvider for CannedCompletion {
        async fn complete(&self, _: &str, _: &str) -> crate::error::Result<String> {
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(e) => Err(Error::completion(e.to_string())),
            }
        }

        async fn health_check(&self) -> crate::error::Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    #[test]
    fn test_valid_label_is_respected() {
        let classifier = IntentClassifier::new(CannedCompletion::ok("TIMELINE"));
        let intent = tokio_test::block_on(classifier.classify("what happened when?"));
        assert_eq!(intent, Intent::Timeline);
    }

    #[test]
    fn test_out_of_set_label_defaults_to_query() {
        let classifier = IntentClassifier::new(CannedCompletion::ok("MAYBE"));
        let intent = tokio_test::block_on(classifier.classify("hmm"));
        assert_eq!(intent, Intent::Query);
    }

    #[test]
    fn test_provider_error_defaults_to_query() {
        let classifier = IntentClassifier::new(CannedCompletion::err("offline"));
        let intent = tokio_test::block_on(classifier.classify("anything"));
        assert_eq!(intent, Intent::Query);
    }
}
