//! String utility functions for text processing

/// First whitespace-delimited token of a credential string. Feeds
/// sometimes carry trailing junk after a UUID; everything past the
/// first blank is noise.
pub fn cut_at_whitespace(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_at_whitespace() {
        assert_eq!(cut_at_whitespace("abc-123 trailing junk"), "abc-123");
        assert_eq!(cut_at_whitespace("clean"), "clean");
        assert_eq!(cut_at_whitespace("  padded"), "padded");
        assert_eq!(cut_at_whitespace("   "), "");
    }
}
