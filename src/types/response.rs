//! The uniform task result contract returned by every stage

use serde::{Deserialize, Serialize};

use super::evidence::Evidence;

/// Category of a stage's output payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Answer,
    Summary,
    Comparison,
    Timeline,
    Aggregation,
}

/// Payload of a successful task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutput {
    /// What kind of content this is
    pub kind: OutputKind,
    /// The generated text
    pub content: String,
    /// Evidence the content is grounded in (empty for whole-corpus tasks)
    pub evidence: Vec<Evidence>,
}

impl TaskOutput {
    pub fn new(kind: OutputKind, content: impl Into<String>, evidence: Vec<Evidence>) -> Self {
        Self {
            kind,
            content: content.into(),
            evidence,
        }
    }
}

/// Outcome of a single request or stage invocation.
///
/// Invariant, enforced by the constructors: `success == false` implies
/// `payload` is `None` and `error` is `Some`; `success == true` implies
/// `payload` is `Some`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    /// Whether the task completed
    pub success: bool,
    /// Output, present exactly when `success` is true
    pub payload: Option<TaskOutput>,
    /// Human-readable failure description, present exactly when `success` is false
    pub error: Option<String>,
    /// Ordered stage names visited while serving the request
    pub trace: Vec<String>,
}

impl TaskResult {
    /// A successful result carrying `payload`
    pub fn ok(payload: TaskOutput) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            error: None,
            trace: Vec::new(),
        }
    }

    /// A failed result carrying a human-readable error
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            payload: None,
            error: Some(error.into()),
            trace: Vec::new(),
        }
    }

    /// Attach the trace accumulated by the orchestrator
    pub fn with_trace(mut self, trace: Vec<String>) -> Self {
        self.trace = trace;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_payload_and_no_error() {
        let result = TaskResult::ok(TaskOutput::new(OutputKind::Answer, "42", Vec::new()));
        assert!(result.success);
        assert!(result.payload.is_some());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_failure_carries_error_and_no_payload() {
        let result = TaskResult::failed("no evidence");
        assert!(!result.success);
        assert!(result.payload.is_none());
        assert_eq!(result.error.as_deref(), Some("no evidence"));
    }

    #[test]
    fn test_output_kind_serializes_lowercase() {
        let json = serde_json::to_string(&OutputKind::Summary).unwrap();
        assert_eq!(json, "\"summary\"");
    }
}
