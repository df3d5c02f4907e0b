//! Thin CLI over the document analysis pipeline.
//!
//! Reads documents from disk, runs them through extraction and
//! normalization, and prints the structured result as JSON. The library
//! owns all decision logic; this binary is transport only.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use docsift::{Document, GeminiConfig, Pipeline};

#[derive(Parser)]
#[command(name = "docsift", version, about = "Document summarization, QA, and concept graphs")]
struct Cli {
    /// Gemini model name.
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    model: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract and normalize text from documents.
    Extract {
        /// Document files (pdf, docx, txt, images).
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Summarize documents.
    Summarize {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Answer a question from documents.
    Qa {
        /// The question to answer.
        question: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Build a concept graph from documents.
    Graph {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show backend availability and extraction tool status.
    Status,
}

fn load_documents(paths: &[PathBuf]) -> Result<Vec<Document>> {
    paths
        .iter()
        .map(|path| {
            let data = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string());
            Ok(Document::new(data, filename))
        })
        .collect()
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = GeminiConfig::default().with_model(&cli.model);
    let pipeline = Pipeline::new(config);

    match cli.command {
        Command::Extract { files } => {
            let texts = pipeline.ingest(&load_documents(&files)?)?;
            print_json(&texts)?;
        }
        Command::Summarize { files } => {
            let texts = pipeline.ingest(&load_documents(&files)?)?;
            let result = pipeline.summarize(&texts).await;
            print_json(&result)?;
        }
        Command::Qa { question, files } => {
            let texts = pipeline.ingest(&load_documents(&files)?)?;
            let result = pipeline.answer(&question, &texts).await;
            print_json(&result)?;
        }
        Command::Graph { files } => {
            let texts = pipeline.ingest(&load_documents(&files)?)?;
            let graph = pipeline.build_graph(&texts);
            print_json(&graph)?;
        }
        Command::Status => {
            let status = pipeline.status();
            print_json(&status)?;
            for (tool, found) in docsift::extract::check_tools() {
                println!("{}: {}", tool, if found { "found" } else { "missing" });
            }
        }
    }

    Ok(())
}
