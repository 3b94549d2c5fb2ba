//! Turning loosely formatted model output ("1. foo", "- bar", "• baz") into plain items.

fn is_leading_marker(ch: char) -> bool {
    ch.is_ascii_digit() || ch.is_whitespace() || matches!(ch, '-' | '•' | '*' | ')' | '.')
}

fn is_trailing_marker(ch: char) -> bool {
    ch.is_ascii_digit() || ch.is_whitespace() || matches!(ch, '-' | '•' | '*' | '.')
}

/// Strips bullets and numbering from the front of `line`, and stray numbering,
/// periods and dashes from its end. Markdown emphasis (`*`, `**`) goes on both sides.
pub fn strip_list_marker(line: &str) -> &str {
    line.trim_start_matches(is_leading_marker)
        .trim_end_matches(is_trailing_marker)
}

/// Splits `text` into lines, skipping blank lines and lines that are nothing but
/// list markers. Bold markers inside an item are dropped. Returns at most `limit`
/// items.
pub fn parse_list_items(text: &str, limit: usize) -> Vec<String> {
    text.trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(strip_list_marker)
        .filter(|item| !item.is_empty())
        .take(limit)
        .map(|item| item.replace("**", ""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_list_marker() {
        assert_eq!(strip_list_marker("1. Foo"), "Foo");
        assert_eq!(strip_list_marker("- Bar"), "Bar");
        assert_eq!(strip_list_marker("3) Baz"), "Baz");
        assert_eq!(strip_list_marker("• Qux"), "Qux");
        assert_eq!(strip_list_marker("* Quux."), "Quux");
        assert_eq!(strip_list_marker("  12.  Deep Learning  "), "Deep Learning");
    }

    #[test]
    fn test_strip_list_marker_keeps_inner_text() {
        assert_eq!(strip_list_marker("2. Self-driving cars"), "Self-driving cars");
        assert_eq!(strip_list_marker("- Open Source (OSS)"), "Open Source (OSS)");
    }

    #[test]
    fn test_parse_list_items_mixed_markers() {
        let items = parse_list_items("1. Foo\n- Bar\n\n3) Baz", 3);
        assert_eq!(items, vec!["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn test_parse_list_items_markdown_emphasis() {
        let items = parse_list_items("1. **Machine Learning**\n- *Ethics*\n* **Data** Privacy", 3);
        assert_eq!(items, vec!["Machine Learning", "Ethics", "Data Privacy"]);
    }

    #[test]
    fn test_parse_list_items_truncates() {
        let items = parse_list_items("1. a\n2. b\n3. c\n4. d\n5. e", 2);
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_list_items_crlf_and_marker_only_lines() {
        let items = parse_list_items("1. Foo\r\n---\r\n   \r\n2. Bar\r\n", 10);
        assert_eq!(items, vec!["Foo", "Bar"]);
    }

    #[test]
    fn test_parse_list_items_empty() {
        assert!(parse_list_items("", 3).is_empty());
        assert!(parse_list_items("1. Foo", 0).is_empty());
    }
}
