//! Formatting helpers for fixed-width TUI text.

/// Truncate `s` to at most `max_width` characters with a "…" suffix when
/// truncated. Character count, not grapheme clusters; fine for status lines.
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let take = max_width - 1;
    format!("{}…", s.chars().take(take).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn long_strings_get_ellipsis() {
        assert_eq!(truncate_ellipsis("hello world", 6), "hello…");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(truncate_ellipsis("hello", 0), "");
    }
}
