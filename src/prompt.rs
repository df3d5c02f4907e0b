//! Prompt body assembly for remote calls.

/// Join non-empty trimmed texts with a blank-line separator, never exceeding
/// `max_chars`. When the next text (plus separator) would overflow, it is
/// truncated at a char boundary to fill the remaining budget and assembly
/// stops; later texts are dropped entirely. Earlier documents win.
pub fn join_bounded<S: AsRef<str>>(texts: &[S], max_chars: usize) -> String {
    let mut body = String::new();
    for text in texts {
        let text = text.as_ref().trim();
        if text.is_empty() {
            continue;
        }
        let separator = if body.is_empty() { "" } else { "\n\n" };
        let budget = max_chars.saturating_sub(body.len() + separator.len());
        if budget == 0 {
            break;
        }
        let take = floor_char_boundary(text, budget.min(text.len()));
        if take == 0 {
            break;
        }
        body.push_str(separator);
        body.push_str(&text[..take]);
        if take < text.len() {
            break;
        }
    }
    body
}

/// Largest index `<= at` that lies on a char boundary of `text`.
fn floor_char_boundary(text: &str, at: usize) -> usize {
    let mut end = at.min(text.len());
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_blank_line() {
        let body = join_bounded(&["first", "second"], 100);
        assert_eq!(body, "first\n\nsecond");
    }

    #[test]
    fn test_skips_empty_and_trims() {
        let body = join_bounded(&["  a  ", "", "   ", "b"], 100);
        assert_eq!(body, "a\n\nb");
    }

    #[test]
    fn test_never_exceeds_budget() {
        let texts = vec!["alpha beta"; 50];
        for max in [0, 1, 5, 11, 12, 13, 100, 1000] {
            let body = join_bounded(&texts, max);
            assert!(body.len() <= max, "len {} > max {}", body.len(), max);
        }
    }

    #[test]
    fn test_truncates_overflowing_text_and_drops_rest() {
        let body = join_bounded(&["abcdef", "ghijkl", "never"], 10);
        // "abcdef" (6) + separator (2) leaves budget for 2 chars.
        assert_eq!(body, "abcdef\n\ngh");
    }

    #[test]
    fn test_multibyte_truncation_stays_on_char_boundary() {
        let body = join_bounded(&["ééééé"], 5);
        assert!(body.len() <= 5);
        assert_eq!(body, "éé");
    }

    #[test]
    fn test_earlier_documents_win() {
        let body = join_bounded(&["kept", "dropped"], 4);
        assert_eq!(body, "kept");
    }
}
