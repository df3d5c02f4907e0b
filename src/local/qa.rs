//! Local fallback question answering.
//!
//! Keyword-overlap sentence retrieval: the score is the fraction of
//! question tokens found in a sentence, not a calibrated probability.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Return the sentence with the highest question-token overlap across all
/// texts, with its score in `[0.0, 1.0]`. Strictly-greater comparison, so
/// the first best-scoring sentence wins ties. No overlap anywhere yields
/// `("", 0.0)`.
pub fn answer<S: AsRef<str>>(question: &str, texts: &[S]) -> (String, f64) {
    let question_tokens = tokenize(question);
    let mut best_sentence = "";
    let mut best_score = 0.0_f64;

    for text in texts {
        for sentence in split_sentences(text.as_ref()) {
            let sentence_tokens = tokenize(sentence);
            if sentence_tokens.is_empty() {
                continue;
            }
            let overlap = question_tokens.intersection(&sentence_tokens).count();
            let score = overlap as f64 / question_tokens.len().max(1) as f64;
            if score > best_score {
                best_score = score;
                best_sentence = sentence;
            }
        }
    }

    (best_sentence.trim().to_string(), best_score)
}

/// Lowercase word-token set.
fn tokenize(text: &str) -> HashSet<String> {
    WORD.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into sentences at `.`, `!`, or `?` followed by whitespace.
/// The terminator stays with its sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(next_i, next_c)) = chars.peek() {
                if next_c.is_whitespace() {
                    sentences.push(&text[start..next_i]);
                    // Consume the whitespace run before the next sentence.
                    while let Some(&(_, w)) = chars.peek() {
                        if !w.is_whitespace() {
                            break;
                        }
                        chars.next();
                    }
                    start = chars.peek().map(|&(j, _)| j).unwrap_or(text.len());
                }
            } else {
                sentences.push(&text[start..=i]);
                start = text.len();
            }
        }
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}
