//! Local fallback summarization.

/// Default length cap for the local summary.
pub const DEFAULT_MAX_CHARS: usize = 500;

/// Join non-empty texts with newlines and truncate to `max_chars`, marking
/// truncation with an ellipsis. Deterministic stand-in, not a summarizer.
pub fn summarize<S: AsRef<str>>(texts: &[S], max_chars: usize) -> String {
    let joined = texts
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if joined.len() <= max_chars {
        return joined;
    }
    let mut end = max_chars;
    while end > 0 && !joined.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &joined[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_untouched() {
        assert_eq!(summarize(&["one", "two"], 500), "one\ntwo");
    }

    #[test]
    fn test_empty_texts_skipped() {
        assert_eq!(summarize(&["one", "", "two"], 500), "one\ntwo");
    }

    #[test]
    fn test_truncation_appends_ellipsis() {
        let out = summarize(&["abcdefghij"], 5);
        assert_eq!(out, "abcde...");
    }

    #[test]
    fn test_no_input_gives_empty_summary() {
        let texts: [&str; 0] = [];
        assert_eq!(summarize(&texts, 500), "");
    }
}
