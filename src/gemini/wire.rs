//! Request and response shapes for the two Gemini protocol generations.
//!
//! The generations do not share a schema, so each gets its own request body
//! and a response adapter that normalizes whatever came back into plain
//! text. The adapters share a three-tier extractor: a direct convenience
//! text field, then the nested candidate/content/parts structure, then a
//! stringification of the whole value — degrading gracefully instead of
//! assuming a fixed shape.

use serde::Serialize;
use serde_json::Value;

/// Current-generation request body (`models/{model}:generateContent`).
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Legacy-generation request body (`models/{model}:generateText`).
#[derive(Debug, Serialize)]
pub struct GenerateTextRequest {
    pub prompt: TextPrompt,
}

#[derive(Debug, Serialize)]
pub struct TextPrompt {
    pub text: String,
}

impl GenerateTextRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            prompt: TextPrompt {
                text: prompt.to_string(),
            },
        }
    }
}

/// Normalize a current-generation response into plain text.
pub fn current_response_text(response: &Value) -> String {
    three_tier_text(response)
}

/// Normalize a legacy-generation response into plain text. Legacy puts the
/// answer in `candidates[0].output`, which counts as its convenience field.
pub fn legacy_response_text(response: &Value) -> String {
    if let Some(output) = response
        .pointer("/candidates/0/output")
        .and_then(Value::as_str)
    {
        if !output.is_empty() {
            return output.to_string();
        }
    }
    three_tier_text(response)
}

/// Three-tier text extraction over an arbitrary response value.
fn three_tier_text(response: &Value) -> String {
    // Tier 1: direct convenience text field.
    if let Some(text) = response.get("text").and_then(Value::as_str) {
        if !text.is_empty() {
            return text.to_string();
        }
    }

    // Tier 2: candidates -> content -> parts, fragments joined by newline.
    if let Some(parts) = response
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
    {
        let fragments: Vec<&str> = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(Value::as_str))
            .filter(|t| !t.is_empty())
            .collect();
        if !fragments.is_empty() {
            return fragments.join("\n");
        }
    }

    // Tier 3: stringify whatever this is.
    response.to_string()
}
