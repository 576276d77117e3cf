/// Greedy word wrap.
///
/// Lines after the first are prefixed with `subsequent_indent`. Words longer
/// than the width stay whole on their own line; hyphens are never break points.
/// Widths count characters, not bytes.
pub fn fill(text: &str, width: usize, subsequent_indent: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_w = word.chars().count();

        if current_width == 0 {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + 1 + word_w > width {
            // Line is full; start a new indented one.
            lines.push(std::mem::take(&mut current));
            current.push_str(subsequent_indent);
            current.push_str(word);
            current_width = subsequent_indent.chars().count() + word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(fill("* one two", 70, "  "), "* one two");
    }

    #[test]
    fn test_wraps_with_hanging_indent() {
        let out = fill("* alpha beta gamma delta", 12, "  ");
        assert_eq!(out, "* alpha beta\n  gamma\n  delta");
        assert!(out.lines().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn test_long_words_not_broken() {
        let url = "https://example.com/a/very/long/path/that/exceeds/the/width";
        let out = fill(&format!("* see {url}"), 20, "  ");
        assert_eq!(out, format!("* see\n  {url}"));
    }

    #[test]
    fn test_hyphenated_words_stay_whole() {
        let out = fill("well-known long-running thing", 14, "");
        assert_eq!(out, "well-known\nlong-running\nthing");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(fill("   ", 80, "  "), "");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // "é" is two bytes; six chars fit exactly.
        assert_eq!(fill("résumé résumé", 13, ""), "résumé résumé");
    }
}
