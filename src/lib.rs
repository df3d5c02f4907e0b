//! Document ingestion and analysis pipeline.
//!
//! Takes heterogeneous documents (plain text, PDF, DOCX, images), extracts
//! and normalizes their text, and produces derived artifacts:
//!
//! - a summary,
//! - an answer to a natural-language question with a confidence score,
//! - a concept graph of capitalized lexical tokens.
//!
//! Summarization and QA go through a remote Gemini backend when a credential
//! is configured, with a deterministic local algorithm substituted when the
//! backend is absent or the call fails. Concept graphs are always built
//! locally. The transport layer (HTTP, CLI, whatever) is a thin caller: it
//! supplies raw bytes plus a filename per document and consumes a structured
//! result.

pub mod config;
pub mod extract;
pub mod gemini;
pub mod local;
pub mod normalize;
pub mod pipeline;
pub mod prompt;

pub use config::GeminiConfig;
pub use extract::{extract, ExtractError};
pub use gemini::{BackendHandle, GeminiError, Generation};
pub use local::graph::ConceptGraph;
pub use normalize::normalize;
pub use pipeline::{AnswerOutcome, BackendStatus, Document, Pipeline, ResultSource, SummaryResult};
pub use prompt::join_bounded;
