//! Remote Gemini backend: capability probe and generation functions.
//!
//! Two mutually incompatible protocol generations coexist in the wild;
//! callers should not need to know which one is in play. A pure detection
//! function resolves the credential and picks a generation per call (never
//! cached, so credential changes take effect immediately), and the two
//! generation functions differ only in their request idiom. No network I/O
//! happens until an actual generation call; the probe only inspects
//! configuration.

mod wire;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::GeminiConfig;
use crate::prompt::join_bounded;

const SUMMARIZE_PREAMBLE: &str = "You are a helpful research assistant. \
    Summarize the following documents into a clear, concise abstract with \
    bullet points for key contributions.";

const ANSWER_PREAMBLE: &str = "Answer the question based strictly on the \
    provided documents. If unknown, say you don't know. Provide a brief, \
    direct answer.";

/// Errors from the remote backend. These never reach the end user through
/// the orchestrator, which converts them into a local fallback.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY not set")]
    MissingCredential,

    #[error("Unrecognized backend generation: {0}")]
    UnrecognizedGeneration(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

/// Remote protocol generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    /// `generateContent` protocol with header auth.
    Current,
    /// `generateText` protocol with query-parameter auth.
    Legacy,
}

impl Generation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Generation::Current => "current",
            Generation::Legacy => "legacy",
        }
    }
}

/// A resolved backend: generation tag plus credential. Built fresh for
/// every call by [`select_backend`].
#[derive(Debug, Clone)]
pub struct BackendHandle {
    pub generation: Generation,
    key: String,
}

/// Pure detection function: resolve credential and generation preference
/// from the config (and process environment) without touching the network.
///
/// Returns `Err(MissingCredential)` when no usable key is configured and
/// `Err(UnrecognizedGeneration)` for an unknown generation override; both
/// make [`available`] report false.
pub fn select_backend(config: &GeminiConfig) -> Result<BackendHandle, GeminiError> {
    let key = config.resolve_key().ok_or(GeminiError::MissingCredential)?;
    let generation = match config.resolve_generation().as_str() {
        "auto" | "current" => Generation::Current,
        "legacy" => Generation::Legacy,
        other => return Err(GeminiError::UnrecognizedGeneration(other.to_string())),
    };
    Ok(BackendHandle { generation, key })
}

/// Whether a remote backend can be selected right now. Performs no network
/// call; transport and auth errors only surface at invocation time.
pub fn available(config: &GeminiConfig) -> bool {
    select_backend(config).is_ok()
}

/// Summarize documents through the remote backend.
pub async fn remote_summarize(
    handle: &BackendHandle,
    config: &GeminiConfig,
    texts: &[String],
) -> Result<String, GeminiError> {
    let body = join_bounded(texts, config.max_input_chars);
    let prompt = format!("{}\n\n{}", SUMMARIZE_PREAMBLE, body);
    generate(handle, config, &prompt).await
}

/// Answer a question from documents through the remote backend. The score
/// is 1.0 for any non-empty answer, else 0.0.
pub async fn remote_answer(
    handle: &BackendHandle,
    config: &GeminiConfig,
    question: &str,
    texts: &[String],
) -> Result<(String, f64), GeminiError> {
    let body = join_bounded(texts, config.max_input_chars);
    let prompt = format!(
        "{}\n\nQUESTION: {}\n\nDOCUMENTS:\n{}",
        ANSWER_PREAMBLE, question, body
    );
    let answer = generate(handle, config, &prompt).await?.trim().to_string();
    let score = if answer.is_empty() { 0.0 } else { 1.0 };
    Ok((answer, score))
}

/// Issue a single generation request and normalize the response to text.
async fn generate(
    handle: &BackendHandle,
    config: &GeminiConfig,
    prompt: &str,
) -> Result<String, GeminiError> {
    debug!(
        generation = handle.generation.as_str(),
        model = %config.model,
        "calling remote backend"
    );
    let client = reqwest::Client::new();

    let request = match handle.generation {
        Generation::Current => {
            let url = format!(
                "{}/v1beta/models/{}:generateContent",
                config.api_base, config.model
            );
            client
                .post(&url)
                .header("x-goog-api-key", &handle.key)
                .json(&wire::GenerateContentRequest::from_prompt(prompt))
        }
        Generation::Legacy => {
            let url = format!(
                "{}/v1beta3/models/{}:generateText",
                config.api_base, config.model
            );
            client
                .post(&url)
                .query(&[("key", handle.key.as_str())])
                .json(&wire::GenerateTextRequest::from_prompt(prompt))
        }
    };

    let response = request.send().await?;
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(GeminiError::Api { status, body });
    }

    let value: Value = response.json().await?;
    Ok(match handle.generation {
        Generation::Current => wire::current_response_text(&value),
        Generation::Legacy => wire::legacy_response_text(&value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_without_credential() {
        // An explicit blank key resolves to no credential without ever
        // consulting the environment.
        let config = GeminiConfig::default().with_api_key("");
        assert!(matches!(
            select_backend(&config),
            Err(GeminiError::MissingCredential)
        ));
        assert!(!available(&config));
    }

    #[test]
    fn test_probe_selects_current_by_default() {
        let config = GeminiConfig::default()
            .with_api_key("test-key")
            .with_generation("auto");
        let handle = select_backend(&config).unwrap();
        assert_eq!(handle.generation, Generation::Current);
    }

    #[test]
    fn test_probe_selects_legacy_on_override() {
        let config = GeminiConfig::default()
            .with_api_key("test-key")
            .with_generation("legacy");
        let handle = select_backend(&config).unwrap();
        assert_eq!(handle.generation, Generation::Legacy);
    }

    #[test]
    fn test_unrecognized_generation_means_unavailable() {
        let config = GeminiConfig::default()
            .with_api_key("test-key")
            .with_generation("v99");
        assert!(!available(&config));
    }
}
