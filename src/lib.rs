//! session-rag: intent-routed question answering over an ephemeral document corpus
//!
//! This crate answers natural-language questions over a user-supplied set of
//! documents by combining semantic retrieval with task-specific reasoning
//! stages. A request is classified into an intent (query, summarize, compare,
//! timeline, aggregate), routed through retrieval where the task needs
//! evidence, and served by the matching specialist stage; the result carries
//! the generated text, the evidence it is grounded in, and an execution
//! trace.
//!
//! The corpus lives in memory for the duration of one session and is rebuilt
//! wholesale on re-ingestion. Text extraction, presentation, and the language
//! model itself are external collaborators behind the provider traits.

pub mod config;
pub mod corpus;
pub mod error;
pub mod ingestion;
pub mod planner;
pub mod providers;
pub mod retrieval;
pub mod session;
pub mod stages;
pub mod types;

pub use config::RagConfig;
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use planner::Planner;
pub use session::Session;
pub use types::{
    Chunk, DocumentInput, Evidence, Intent, OutputKind, PageText, TaskOutput, TaskResult,
};
