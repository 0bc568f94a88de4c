//! The closed set of task intents driving stage selection

use serde::{Deserialize, Serialize};

/// Task category a user request is classified into.
///
/// Closed enumeration: classifier output that does not match any label is
/// resolved to [`Intent::Query`] by the caller, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Direct question over the documents
    Query,
    /// Whole-corpus summary
    Summarize,
    /// Cross-document comparison
    Compare,
    /// Chronological ordering of events
    Timeline,
    /// Synthesis of overlapping information
    Aggregate,
}

impl Intent {
    /// The label set presented to the classifier
    pub const LABELS: [&'static str; 5] =
        ["QUERY", "SUMMARIZE", "COMPARE", "TIMELINE", "AGGREGATE"];

    /// Parse a raw classifier label. Trims whitespace and trailing
    /// punctuation and uppercases before matching; returns `None` for
    /// anything outside the set.
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label
            .trim()
            .trim_end_matches(['.', '!', ':'])
            .to_uppercase();
        match normalized.as_str() {
            "QUERY" => Some(Self::Query),
            "SUMMARIZE" => Some(Self::Summarize),
            "COMPARE" => Some(Self::Compare),
            "TIMELINE" => Some(Self::Timeline),
            "AGGREGATE" => Some(Self::Aggregate),
            _ => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Query => "query",
            Self::Summarize => "summarize",
            Self::Compare => "compare",
            Self::Timeline => "timeline",
            Self::Aggregate => "aggregate",
        };
        f.write_str(name)
    }
}
