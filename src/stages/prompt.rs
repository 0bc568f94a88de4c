//! Prompt templates for classification and the reasoning stages

use crate::types::{Evidence, Intent};

/// Prompt builder shared by every stage
pub struct PromptBuilder;

impl PromptBuilder {
    /// Instructions for the intent classifier: closed label set, one word back
    pub fn classify_instructions() -> String {
        format!(
            r#"Classify the user request into ONE category:
- QUERY: Questions about the documents
- SUMMARIZE: Wants a summary
- COMPARE: Wants a comparison
- TIMELINE: Wants chronological order
- AGGREGATE: Wants synthesized information

Respond with ONLY the category name, one of: {}."#,
            Intent::LABELS.join(", ")
        )
    }

    /// Format evidence as a numbered source block
    pub fn evidence_block(evidence: &[Evidence]) -> String {
        evidence
            .iter()
            .enumerate()
            .map(|(i, item)| {
                format!(
                    "[Source {}] {}, Page {}, relevance {:.3}\n{}",
                    i + 1,
                    item.document_name,
                    item.page_number,
                    item.score,
                    item.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n---\n\n")
    }

    /// Instructions for grounded question answering
    pub fn answer_instructions() -> &'static str {
        r#"You answer questions using ONLY the provided source passages.

Rules:
1. Use only information explicitly stated in the passages
2. Cite sources inline with each claim: [Document Name, Page X]
3. If the passages do not contain the answer, say that the information
   is not available in the provided documents
4. Never use outside knowledge or guess beyond what the passages state
5. Be precise and factual; quote directly when helpful"#
    }

    /// Input for the answer stage: question plus its retrieved passages
    pub fn answer_input(query: &str, evidence: &[Evidence]) -> String {
        if evidence.is_empty() {
            return format!(
                "Question: {query}\n\nNo relevant passages were retrieved. \
                 State that the information is not available in the provided documents."
            );
        }
        format!(
            "Question: {query}\n\nSource passages:\n\n{}",
            Self::evidence_block(evidence)
        )
    }

    /// Instructions shared by the map and reduce summarization calls
    pub fn summarize_instructions() -> &'static str {
        r#"You produce faithful document summaries.

Rules:
1. Extract key themes and main points
2. Preserve critical information and factual accuracy
3. Remove redundancy; keep the narrative coherent
4. Do not introduce information that is not in the text"#
    }

    /// Map step: summarize one batch of chunk texts
    pub fn summarize_batch_input(texts: &[&str]) -> String {
        format!(
            "Summarize the following text, preserving key information:\n\n{}",
            texts.join("\n\n")
        )
    }

    /// Reduce step: merge the batch summaries into one
    pub fn summarize_reduce_input(summaries: &[String]) -> String {
        format!(
            "Combine the following partial summaries into one coherent summary, \
             preserving key information:\n\n{}",
            summaries.join("\n\n")
        )
    }

    /// Instructions for cross-document comparison
    pub fn compare_instructions() -> &'static str {
        r#"You analyze differences and similarities across sources.

Rules:
1. Identify key similarities across the sources
2. Highlight important differences
3. Call out contradictions or conflicts explicitly
4. Stay grounded in the provided passages and cite them by source number
5. Organize the comparison logically"#
    }

    pub fn compare_input(query: &str, evidence: &[Evidence]) -> String {
        format!(
            "Query: {query}\n\nCompare and contrast the following information:\n\n{}",
            Self::evidence_block(evidence)
        )
    }

    /// Instructions for chronological ordering
    pub fn timeline_instructions() -> &'static str {
        r#"You organize events chronologically.

Rules:
1. Extract temporal markers (dates, times, sequences)
2. Order events in time, noting simultaneity where relevant
3. Surface cause-and-effect relationships between events
4. Handle relative time references carefully
5. Stay grounded in the provided passages and cite them by source number"#
    }

    pub fn timeline_input(query: &str, evidence: &[Evidence]) -> String {
        format!(
            "Query: {query}\n\nConstruct a chronological timeline from these events:\n\n{}",
            Self::evidence_block(evidence)
        )
    }

    /// Instructions for information synthesis
    pub fn aggregate_instructions() -> &'static str {
        r#"You synthesize information from multiple sources.

Rules:
1. Merge overlapping information and eliminate redundancy
2. Preserve unique contributions from each source
3. Note disagreements rather than papering over them
4. Credit sources by source number
5. Stay grounded in the provided passages"#
    }

    pub fn aggregate_input(query: &str, evidence: &[Evidence]) -> String {
        format!(
            "Query: {query}\n\nAggregate and synthesize information from these sources:\n\n{}",
            Self::evidence_block(evidence)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn evidence(document_name: &str, page_number: u32, text: &str) -> Evidence {
        Evidence {
            document_id: Uuid::new_v4(),
            document_name: document_name.to_string(),
            page_number,
            sequence_id: 0,
            score: 0.5,
            text: text.to_string(),
            excerpt: text.to_string(),
        }
    }

    #[test]
    fn test_evidence_block_numbers_sources() {
        let block = PromptBuilder::evidence_block(&[
            evidence("a.pdf", 1, "alpha"),
            evidence("b.pdf", 3, "beta"),
        ]);
        assert!(block.contains("[Source 1] a.pdf, Page 1"));
        assert!(block.contains("[Source 2] b.pdf, Page 3"));
        assert!(block.contains("alpha"));
        assert!(block.contains("beta"));
    }

    #[test]
    fn test_answer_input_without_evidence_notes_insufficiency() {
        let input = PromptBuilder::answer_input("who?", &[]);
        assert!(input.contains("No relevant passages"));
    }

    #[test]
    fn test_classify_instructions_list_every_label() {
        let instructions = PromptBuilder::classify_instructions();
        for label in crate::types::Intent::LABELS {
            assert!(instructions.contains(label));
        }
    }
}
