//! Whitespace normalization for extracted text.

/// Collapse all whitespace runs (tabs, carriage returns, newlines included)
/// to a single space and trim both ends. Pure and total; idempotent.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_runs_and_trims() {
        assert_eq!(normalize("  a\t\tb\r\nc   d  "), "a b c d");
    }

    #[test]
    fn test_no_tabs_or_carriage_returns_remain() {
        let out = normalize("x\ty\rz");
        assert!(!out.contains('\t'));
        assert!(!out.contains('\r'));
        assert_eq!(out, "x y z");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["", "   ", "plain", " a \n b ", "\u{a0}tricky\u{2003}space"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \r\n\t "), "");
    }
}
