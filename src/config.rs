//! Configuration for the remote Gemini backend.

use serde::{Deserialize, Serialize};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the protocol generation.
pub const GENERATION_ENV: &str = "GEMINI_API_GENERATION";

/// Configuration for the Gemini client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Explicit API key. When unset, `GEMINI_API_KEY` is read from the
    /// process environment at call time (never cached, so a credential
    /// change takes effect on the next call without restart).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the Generative Language API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model used for summarization and QA.
    #[serde(default = "default_model")]
    pub model: String,
    /// Protocol generation preference: "auto", "current", or "legacy".
    /// When unset, `GEMINI_API_GENERATION` is consulted, defaulting to auto.
    #[serde(default)]
    pub generation: Option<String>,
    /// Maximum characters of document content assembled into one prompt.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_max_input_chars() -> usize {
    60_000
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            model: default_model(),
            generation: None,
            max_input_chars: default_max_input_chars(),
        }
    }
}

impl GeminiConfig {
    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_generation(mut self, generation: &str) -> Self {
        self.generation = Some(generation.to_string());
        self
    }

    /// Resolve the credential: explicit config value first, then the
    /// process environment. Blank values count as absent.
    pub fn resolve_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// Resolve the generation preference string: explicit config value
    /// first, then the process environment, defaulting to "auto".
    pub fn resolve_generation(&self) -> String {
        self.generation
            .clone()
            .or_else(|| std::env::var(GENERATION_ENV).ok())
            .map(|g| g.trim().to_ascii_lowercase())
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| "auto".to_string())
    }
}
