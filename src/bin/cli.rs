//! One-shot CLI: ingest plain-text documents and answer a single question
//! against a local Ollama server.
//!
//! Multi-page documents are supported by separating pages with a form feed
//! (`\f`) inside the text file.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use session_rag::providers::{CompletionProvider, OllamaProvider};
use session_rag::{DocumentInput, PageText, RagConfig, Session};

#[derive(Parser)]
#[command(name = "session-rag", about = "Ask questions over a set of text documents")]
struct Args {
    /// Plain-text documents to ingest
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// The question or request to run
    #[arg(short, long)]
    question: String,

    /// Ollama base URL
    #[arg(long, default_value = "http://localhost:11434")]
    ollama_url: String,

    /// Generation model name
    #[arg(long)]
    model: Option<String>,

    /// Number of passages to retrieve per query
    #[arg(long)]
    top_k: Option<usize>,
}

fn load_document(path: &PathBuf) -> anyhow::Result<DocumentInput> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    // Form feeds delimit pages inside a plain-text file
    let pages = text
        .split('\x0c')
        .enumerate()
        .map(|(i, page)| PageText::new(i as u32 + 1, page))
        .collect();

    Ok(DocumentInput::new(name, pages))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut config = RagConfig::default();
    config.llm.base_url = args.ollama_url;
    if let Some(model) = args.model {
        config.llm.generate_model = model;
    }
    if let Some(top_k) = args.top_k {
        config.retrieval.top_k = top_k;
    }

    let provider = Arc::new(OllamaProvider::new(&config.llm, &config.embeddings)?);
    if !CompletionProvider::health_check(provider.as_ref()).await? {
        bail!(
            "Ollama is not reachable at {} - is the server running?",
            config.llm.base_url
        );
    }

    let documents = args
        .files
        .iter()
        .map(load_document)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let session = Session::new(config, provider.clone(), provider)?;
    session.ingest(&documents).await?;

    if let Some(corpus) = session.corpus() {
        for (name, stats) in corpus.document_stats() {
            tracing::info!(
                document = %name,
                chunks = stats.chunk_count,
                pages = stats.page_count,
                "ingested"
            );
        }
    }

    let result = session.ask(&args.question).await?;

    match result.payload {
        Some(payload) => {
            println!("{}\n", payload.content);
            if !payload.evidence.is_empty() {
                println!("Sources:");
                for item in &payload.evidence {
                    println!("  [{:.3}] {}", item.score, item.citation());
                }
            }
            tracing::debug!(trace = ?result.trace, "request complete");
            Ok(())
        }
        None => bail!(
            "request failed: {}",
            result.error.unwrap_or_else(|| "unknown error".to_string())
        ),
    }
}
