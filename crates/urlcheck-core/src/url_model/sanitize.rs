//! URL string sanitization for seed-script generation.

/// Sanitizes one raw dataset line into a URL safe to embed in a generated
/// insertion statement.
///
/// - Trims leading/trailing whitespace (including the line terminator)
/// - Deletes every `"`, `'`, and `\` (no replacement character)
///
/// The operation only removes characters, so it is idempotent. No validation
/// is performed; a blank line sanitizes to an empty string.
pub fn sanitize_url(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '\\'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_surrounding_whitespace() {
        assert_eq!(sanitize_url("  http://a.com/x \n"), "http://a.com/x");
        assert_eq!(sanitize_url("\thttp://b.com\r\n"), "http://b.com");
    }

    #[test]
    fn deletes_quotes_and_backslashes() {
        assert_eq!(sanitize_url("http://a.com/\"x\""), "http://a.com/x");
        assert_eq!(sanitize_url("http://a.com/it's"), "http://a.com/its");
        assert_eq!(sanitize_url("http://b.com\\"), "http://b.com");
        assert_eq!(sanitize_url("\"'\\"), "");
    }

    #[test]
    fn never_contains_forbidden_characters() {
        let nasty = " ht\"tp://e'vil.com/\\path\\'\" ";
        let clean = sanitize_url(nasty);
        assert!(!clean.contains('"'));
        assert!(!clean.contains('\''));
        assert!(!clean.contains('\\'));
    }

    #[test]
    fn idempotent() {
        for raw in [" http://a.com/\"x\" ", "plain", "", "'\\\"", "  \t "] {
            let once = sanitize_url(raw);
            assert_eq!(sanitize_url(&once), once);
        }
    }

    #[test]
    fn blank_line_sanitizes_to_empty() {
        assert_eq!(sanitize_url(""), "");
        assert_eq!(sanitize_url("   \n"), "");
    }
}
