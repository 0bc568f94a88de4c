//! Core data types shared across the pipeline

pub mod document;
pub mod evidence;
pub mod intent;
pub mod response;

pub use document::{Chunk, DocumentInput, PageText};
pub use evidence::Evidence;
pub use intent::Intent;
pub use response::{OutputKind, TaskOutput, TaskResult};
