use std::sync::LazyLock;

use regex::Regex;

/// URLs embedded in free-form text. A sentence-ending period is not part of a match.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[A-Za-z0-9_/.-]*[A-Za-z0-9_/-]").expect("valid regex")
});

/// A piece of free-form text, split around embedded URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Url(&'a str),
}

/// Splits `text` into plain and URL segments, in order. Empty text segments are skipped.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in URL_PATTERN.find_iter(text) {
        if m.start() > last {
            out.push(Segment::Text(&text[last..m.start()]));
        }
        out.push(Segment::Url(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        out.push(Segment::Text(&text[last..]));
    }
    out
}
