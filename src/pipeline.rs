//! Fallback orchestrator: remote backend when available, deterministic
//! local algorithms otherwise.
//!
//! Every remote failure is absorbed here and converted into a local
//! invocation; the caller always gets a full result (or an extraction
//! error — ingestion has no partial-success mode). The path actually taken
//! is recorded on the result and logged, since silent degradation is
//! otherwise unobservable.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::GeminiConfig;
use crate::extract::{self, ExtractError};
use crate::gemini;
use crate::local;
use crate::normalize::normalize;

/// One uploaded document: raw bytes plus an optional filename hint.
/// Request-scoped and never persisted.
#[derive(Debug, Clone)]
pub struct Document {
    pub data: Vec<u8>,
    pub filename: Option<String>,
}

impl Document {
    pub fn new(data: Vec<u8>, filename: Option<String>) -> Self {
        Self { data, filename }
    }
}

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultSource {
    RemoteCurrent,
    RemoteLegacy,
    Local,
}

impl ResultSource {
    fn from_generation(generation: gemini::Generation) -> Self {
        match generation {
            gemini::Generation::Current => ResultSource::RemoteCurrent,
            gemini::Generation::Legacy => ResultSource::RemoteLegacy,
        }
    }
}

/// Summarization result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub source: ResultSource,
}

/// Question-answering result. The score is a heuristic in `[0.0, 1.0]`,
/// not a calibrated probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub question: String,
    pub answer: String,
    pub score: f64,
    pub source: ResultSource,
}

/// Snapshot of backend availability, for status surfaces. Pure; performs
/// no network I/O.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendStatus {
    /// Whether a credential resolves right now.
    pub key_set: bool,
    /// Whether the probe would select a backend.
    pub active: bool,
    /// Generation the probe would select, when active.
    pub generation: Option<String>,
    /// Engine used for summarization: "gemini" or "local_stub".
    pub summarize_engine: String,
    /// Engine used for QA: "gemini" or "local_stub".
    pub qa_engine: String,
}

/// Document analysis pipeline. Stateless between calls: the probe
/// re-resolves the credential on every operation, so a credential change
/// takes effect without restart.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: GeminiConfig,
}

impl Pipeline {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Extract and normalize each document in order. Any extraction failure
    /// fails the whole call; there is no partial success.
    pub fn ingest(&self, documents: &[Document]) -> Result<Vec<String>, ExtractError> {
        documents
            .iter()
            .map(|doc| {
                let text = extract::extract(&doc.data, doc.filename.as_deref())?;
                Ok(normalize(&text))
            })
            .collect()
    }

    /// Summarize the given texts: remote backend when available, local
    /// truncating join otherwise. Never fails.
    pub async fn summarize(&self, texts: &[String]) -> SummaryResult {
        if let Ok(handle) = gemini::select_backend(&self.config) {
            match gemini::remote_summarize(&handle, &self.config, texts).await {
                Ok(summary) => {
                    return SummaryResult {
                        summary,
                        source: ResultSource::from_generation(handle.generation),
                    };
                }
                Err(e) => {
                    warn!("remote summarize failed, using local fallback: {}", e);
                }
            }
        } else {
            info!("no remote backend configured, summarizing locally");
        }
        SummaryResult {
            summary: local::summarize(texts, local::summarize::DEFAULT_MAX_CHARS),
            source: ResultSource::Local,
        }
    }

    /// Answer a question from the given texts: remote backend when
    /// available, keyword-overlap retrieval otherwise. Never fails.
    pub async fn answer(&self, question: &str, texts: &[String]) -> AnswerOutcome {
        if let Ok(handle) = gemini::select_backend(&self.config) {
            match gemini::remote_answer(&handle, &self.config, question, texts).await {
                Ok((answer, score)) => {
                    return AnswerOutcome {
                        question: question.to_string(),
                        answer,
                        score,
                        source: ResultSource::from_generation(handle.generation),
                    };
                }
                Err(e) => {
                    warn!("remote answer failed, using local fallback: {}", e);
                }
            }
        } else {
            info!("no remote backend configured, answering locally");
        }
        let (answer, score) = local::answer(question, texts);
        AnswerOutcome {
            question: question.to_string(),
            answer,
            score,
            source: ResultSource::Local,
        }
    }

    /// Build a concept graph from the given texts. Always local; there is
    /// no remote path for graph construction.
    pub fn build_graph(&self, texts: &[String]) -> local::ConceptGraph {
        local::build_graph(texts)
    }

    /// Report which engine each operation would use right now.
    pub fn status(&self) -> BackendStatus {
        let key_set = self.config.resolve_key().is_some();
        let selected = gemini::select_backend(&self.config).ok();
        let active = selected.is_some();
        let engine = if active { "gemini" } else { "local_stub" };
        BackendStatus {
            key_set,
            active,
            generation: selected.map(|h| h.generation.as_str().to_string()),
            summarize_engine: engine.to_string(),
            qa_engine: engine.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_backend_pipeline() -> Pipeline {
        Pipeline::new(GeminiConfig::default().with_api_key(""))
    }

    #[test]
    fn test_ingest_extracts_and_normalizes() {
        let pipeline = no_backend_pipeline();
        let docs = vec![Document::new(
            b"  line one\r\n\tline two  ".to_vec(),
            Some("a.txt".to_string()),
        )];
        let texts = pipeline.ingest(&docs).unwrap();
        assert_eq!(texts, vec!["line one line two"]);
    }

    #[test]
    fn test_ingest_fails_whole_call_on_bad_document() {
        let pipeline = no_backend_pipeline();
        let docs = vec![
            Document::new(b"fine".to_vec(), Some("a.txt".to_string())),
            Document::new(b"not a pdf".to_vec(), Some("b.pdf".to_string())),
        ];
        assert!(pipeline.ingest(&docs).is_err());
    }

    #[tokio::test]
    async fn test_summarize_without_backend_is_local() {
        let pipeline = no_backend_pipeline();
        let result = pipeline.summarize(&["short text".to_string()]).await;
        assert_eq!(result.source, ResultSource::Local);
        assert_eq!(result.summary, "short text");
    }

    #[tokio::test]
    async fn test_answer_without_backend_is_local() {
        let pipeline = no_backend_pipeline();
        let texts = vec!["Paris is the capital of France.".to_string()];
        let result = pipeline
            .answer("What is the capital of France?", &texts)
            .await;
        assert_eq!(result.source, ResultSource::Local);
        assert_eq!(result.answer, "Paris is the capital of France.");
        assert!(result.score > 0.0);
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_silently() {
        // Credential configured but the endpoint is unreachable: the remote
        // error must be absorbed, not surfaced.
        let config = GeminiConfig::default()
            .with_api_key("test-key")
            .with_generation("auto")
            .with_api_base("http://127.0.0.1:1");
        let pipeline = Pipeline::new(config);
        let result = pipeline.summarize(&["fallback content".to_string()]).await;
        assert_eq!(result.source, ResultSource::Local);
        assert_eq!(result.summary, "fallback content");
    }

    #[test]
    fn test_graph_is_always_local() {
        let pipeline = no_backend_pipeline();
        let graph = pipeline.build_graph(&["Alice met Bob.".to_string()]);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_status_without_credential() {
        let pipeline = no_backend_pipeline();
        let status = pipeline.status();
        assert!(!status.key_set);
        assert!(!status.active);
        assert_eq!(status.summarize_engine, "local_stub");
        assert_eq!(status.qa_engine, "local_stub");
    }

    #[test]
    fn test_status_with_credential() {
        let pipeline = Pipeline::new(
            GeminiConfig::default()
                .with_api_key("k")
                .with_generation("auto"),
        );
        let status = pipeline.status();
        assert!(status.key_set);
        assert!(status.active);
        assert_eq!(status.generation.as_deref(), Some("current"));
        assert_eq!(status.summarize_engine, "gemini");
    }
}
